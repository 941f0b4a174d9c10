//! Target directory checks before scaffolding.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Where `init` writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `blogkit init`: the current directory, which must hold no `blog.toml`
    CurrentDir,
    /// `blogkit init <name>`: a new directory, which must be absent or empty
    NewDir,
}

/// Refuse to scaffold over an existing blog or into a non-empty new dir.
///
/// Running in the current directory is allowed when it already holds a
/// generator project, as long as there is no `blog.toml` yet.
pub fn validate_target(root: &Path, mode: InitMode, config_name: &str) -> Result<()> {
    let config = root.join(config_name);
    if config.exists() {
        bail!(
            "'{}' already exists.\n\
             Edit it directly, or run `blogkit init <name>` for a new blog.",
            config.display()
        );
    }

    if mode == InitMode::NewDir && !is_empty(root)? {
        bail!(
            "Directory '{}' is not empty.\n\
             Choose a different name or remove the existing directory.",
            root.display()
        );
    }
    Ok(())
}

fn is_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let is_empty = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory '{}'", path.display()))?
        .next()
        .is_none();
    Ok(is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_current_dir_with_other_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir, "blog.toml").is_ok());
    }

    #[test]
    fn test_existing_config_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("blog.toml"), "").unwrap();
        let err = validate_target(temp.path(), InitMode::CurrentDir, "blog.toml").unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_new_dir_must_be_empty() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(&temp.path().join("new"), InitMode::NewDir, "blog.toml").is_ok());
        assert!(validate_target(temp.path(), InitMode::NewDir, "blog.toml").is_ok());

        fs::write(temp.path().join("file.txt"), "content").unwrap();
        assert!(validate_target(temp.path(), InitMode::NewDir, "blog.toml").is_err());
    }
}
