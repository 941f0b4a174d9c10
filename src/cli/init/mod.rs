//! Blog workspace initialization.
//!
//! - [`validate`]: Pre-initialization checks
//! - [`structure`]: Directories, starter config, store files

mod structure;
mod validate;

use crate::{
    embed::{BLOG_TOML, ConfigVars},
    log,
};
use anyhow::Result;
use std::path::Path;

pub use validate::InitMode;

/// Scaffold a blog workspace at `root`.
///
/// With `dry_run`, only prints the config template to stdout.
pub fn new_blog(root: &Path, config_name: &str, mode: InitMode, dry_run: bool) -> Result<()> {
    let title = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if dry_run {
        print!("{}", BLOG_TOML.render(&ConfigVars { title: &title }));
        return Ok(());
    }

    validate::validate_target(root, mode, config_name)?;

    structure::create_structure(root)?;
    structure::write_config(root, config_name, &title)?;
    structure::write_ignore_file(root)?;

    log!("init"; "blog initialized at {}", root.display());
    Ok(())
}
