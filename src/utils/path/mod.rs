//! Path utilities.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `expand_tilde`)

pub mod fs;

pub use fs::{expand_tilde, normalize_path};
