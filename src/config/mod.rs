//! Blog configuration management for `blog.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site/      # [site] identity, social, search, license
//! │   ├── theme/     # [theme_config] toggles
//! │   ├── markdown   # [markdown]
//! │   └── publish    # [publish], [store], [build]
//! ├── check/         # Field checks (url, color, locale, assets)
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # BlogConfig (this file)
//! ```
//!
//! Keys under `[site]`, `[theme_config]` and `[markdown]` use the
//! generator's own names (`codeHighlight`, `wordCount`), so the export is a
//! straight serialization. Snake-case spellings are accepted as aliases.

pub mod check;
pub mod section;
pub mod types;
mod util;

pub use section::{
    BuildConfig, MarkdownConfig, PublishConfig, SiteIdentity, StoreConfig, ThemeConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, prompt},
    log,
    utils::{
        path::{expand_tilde, normalize_path},
        time,
    },
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::find_config_file;

/// Default config filename
pub const CONFIG_FILE: &str = "blog.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing blog.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Blog root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Theme package name.
    pub theme: String,

    /// Site identity
    pub site: SiteIdentity,

    /// Theme toggles
    pub theme_config: ThemeConfig,

    /// Markdown rendering options
    pub markdown: MarkdownConfig,

    /// Publishing settings
    pub publish: PublishConfig,

    /// Post store settings
    pub store: StoreConfig,

    /// Local layout
    pub build: BuildConfig,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            theme: "yun".into(),
            site: SiteIdentity::default(),
            theme_config: ThemeConfig::default(),
            markdown: MarkdownConfig::default(),
            publish: PublishConfig::default(),
            store: StoreConfig::default(),
            build: BuildConfig::default(),
        }
    }
}

impl BlogConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// Searches upward from cwd to find the config file. The blog root is
    /// the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config = Self::load_unchecked(cli)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and normalize without structural validation (`blogkit validate`
    /// reports problems itself).
    pub fn load_unchecked(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let Some(config_path) = find_config_file(&cwd, &cli.config) else {
            bail!(
                "Config file '{}' not found. Run 'blogkit init' to create a new blog workspace.",
                cli.config.display()
            );
        };

        let mut config = Self::from_path(&config_path)?;
        config.finalize(&config_path);
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize config")
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !prompt::confirm("Continue?")? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Record the config location and make every path absolute.
    pub fn finalize(&mut self, config_path: &Path) {
        self.config_path = normalize_path(config_path);
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.set_root(&root);
        self.normalize_paths();
    }

    /// Normalize all paths relative to the root directory.
    ///
    /// `posts_dir` and `assets_dir` are relative to `publish.root`, which
    /// itself is relative to the blog root (with `~` expanded).
    fn normalize_paths(&mut self) {
        let root = self.root.clone();

        let publish_root = expand_tilde(&self.publish.root);
        self.publish.root = normalize_path(&root.join(publish_root));
        self.publish.posts_dir = self.publish.root.join(&self.publish.posts_dir);
        self.publish.assets_dir = self.publish.root.join(&self.publish.assets_dir);

        self.store.data_dir = root.join(&self.store.data_dir);
        self.build.public_dir = root.join(&self.build.public_dir);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Collect structural diagnostics without failing.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        if self.theme.trim().is_empty() {
            diag.error_with_hint(
                FieldPath::new("theme"),
                "theme name is empty",
                "set theme = \"yun\"",
            );
        }
        self.site.validate(&mut diag);
        self.theme_config
            .validate(time::current_year(), &mut diag);
        self.publish.validate(&mut diag);

        if self.store.max_content_chars == 0 {
            diag.error(
                FieldPath::new("store.max_content_chars"),
                "limit must be greater than zero",
            );
        }

        diag
    }

    /// Check that assets referenced by the site and theme exist under
    /// `build.public_dir`.
    pub fn check_assets(&self, diag: &mut ConfigDiagnostics) {
        self.site.check_assets(&self.build.public_dir, diag);
        self.theme_config
            .check_assets(&self.build.public_dir, diag);
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// A real-world blog configuration, used as a realistic fixture.
#[cfg(test)]
pub const SAMPLE_CONFIG: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/blog.toml"));

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> BlogConfig {
    let (parsed, ignored) = BlogConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::{LicenseKind, SearchEngine};
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = BlogConfig::from_str("[site\ntitle = \"My Blog\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_blog_config_default() {
        let config = BlogConfig::default();
        assert_eq!(config.theme, "yun");
        assert_eq!(config.site.lang, "en");
        assert_eq!(config.store.max_content_chars, 200_000);
        assert_eq!(config.publish.posts_dir, PathBuf::from("pages/posts"));
        assert_eq!(config.get_root(), Path::new(""));
    }

    #[test]
    fn test_sample_config_parses_and_validates() {
        let config = test_parse_config(SAMPLE_CONFIG);

        assert_eq!(config.site.lang, "zh-CN");
        assert_eq!(config.site.url, "https://mikotossd.net/");
        assert_eq!(config.site.author.status.emoji, "🐟");
        assert_eq!(config.site.search.kind, SearchEngine::Fuse);
        assert_eq!(config.site.license.kind, LicenseKind::ByNcSa);
        assert_eq!(config.site.social.len(), 3);
        assert_eq!(config.theme_config.pages.len(), 4);
        assert_eq!(config.theme_config.bg_image.opacity, 0.8);
        assert!(config.markdown.katex.enable);

        let diag = config.diagnostics();
        assert!(diag.is_empty(), "{:?}", diag.errors());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = test_parse_config(SAMPLE_CONFIG);
        let serialized = config.to_toml().unwrap();
        let reparsed = test_parse_config(&serialized);

        assert_eq!(reparsed.site.title, config.site.title);
        assert_eq!(reparsed.site.subtitle, config.site.subtitle);
        assert_eq!(reparsed.site.description, config.site.description);
        assert_eq!(reparsed.site.url, config.site.url);
        assert_eq!(reparsed.site.social, config.site.social);
        assert_eq!(reparsed.theme_config, config.theme_config);
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let (_, ignored) =
            BlogConfig::parse_with_ignored("[site]\ntitle = \"x\"\ntitel = \"typo\"").unwrap();
        assert_eq!(ignored, vec!["site.titel".to_string()]);
    }

    #[test]
    fn test_snake_case_aliases_accepted() {
        let config = test_parse_config(
            "[markdown.code_highlight]\ntheme = \"nord\"\n[theme_config.post]\nreading_time = false",
        );
        assert_eq!(config.markdown.code_highlight.theme, "nord");
        assert!(!config.theme_config.post.reading_time);
    }

    #[test]
    fn test_diagnostics_collects_across_sections() {
        let config = test_parse_config(
            "theme = \"\"\n[site]\nurl = \"nope\"\n[store]\nmax_content_chars = 0",
        );
        let diag = config.diagnostics();
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["theme", "site.title", "site.url", "store.max_content_chars"]
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_finalize_resolves_paths() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE);
        fs::write(&config_path, "").unwrap();

        let mut config = test_parse_config("[publish]\nroot = \"site\"");
        config.finalize(&config_path);

        let root = normalize_path(temp.path());
        assert_eq!(config.get_root(), root);
        assert_eq!(config.publish.root, root.join("site"));
        assert_eq!(config.publish.posts_dir, root.join("site/pages/posts"));
        assert_eq!(config.publish.assets_dir, root.join("site/public/assets"));
        assert_eq!(config.store.data_dir, root.join("data"));
        assert_eq!(config.build.public_dir, root.join("public"));
    }

    #[test]
    fn test_check_assets_against_public_dir() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE);
        fs::write(&config_path, "").unwrap();

        let mut config = test_parse_config(SAMPLE_CONFIG);
        config.finalize(&config_path);

        let mut diag = ConfigDiagnostics::new();
        config.check_assets(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "site.author.avatar",
                "site.favicon",
                "theme_config.bg_image.url",
                "theme_config.bg_image.dark",
            ]
        );

        for asset in ["images/avatar.jpg", "favicon.ico", "images/bg.jpg", "images/bg-dark.jpg"] {
            let path = temp.path().join("public").join(asset);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"x").unwrap();
        }
        let mut diag = ConfigDiagnostics::new();
        config.check_assets(&mut diag);
        assert!(diag.is_empty());
    }
}
