//! Blog workspace layout.

use crate::{
    config::BlogConfig,
    embed::{BLOG_TOML, ConfigVars, GITIGNORE},
    post::PostStore,
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Directories a fresh workspace gets, relative to the root.
const BLOG_DIRS: &[&str] = &["pages/posts", "public/images", "public/assets"];

/// Create the directory layout under `root` (created if missing).
pub fn create_structure(root: &Path) -> Result<()> {
    for dir in BLOG_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }

    let defaults = BlogConfig::default();
    PostStore::open(root.join(&defaults.store.data_dir), defaults.store.max_content_chars)
        .ensure_structure()?;
    Ok(())
}

/// Write the starter config.
pub fn write_config(root: &Path, config_name: &str, title: &str) -> Result<()> {
    let path = root.join(config_name);
    fs::write(&path, BLOG_TOML.render(&ConfigVars { title }))
        .with_context(|| format!("Failed to write config file '{}'", path.display()))
}

/// Write `.gitignore` unless the user already has one.
pub fn write_ignore_file(root: &Path) -> Result<()> {
    let path = root.join(".gitignore");
    if !path.exists() {
        fs::write(&path, GITIGNORE)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
    }
    Ok(())
}
