//! Shared helpers: command execution, git, escaping, hashing, paths.

pub mod exec;
pub mod git;
pub mod hash;
pub mod html;
pub mod path;
pub mod time;
