//! `[publish]`, `[store]` and `[build]` sections.
//!
//! Local tooling settings. None of these are exported to the generator.
//!
//! # Example
//!
//! ```toml
//! [publish]
//! root = "~/blog"
//! commit_message = "feat: publish {title}"
//! push = true
//!
//! [store]
//! data_dir = "data"
//! max_content_chars = 200000
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placeholder replaced by the post title in `commit_message`.
pub const TITLE_PLACEHOLDER: &str = "{title}";

/// Obsidian → generator publishing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Generator project root (git working tree). Relative to the config file.
    pub root: PathBuf,
    /// Post directory, relative to `root`.
    pub posts_dir: PathBuf,
    /// Image destination, relative to `root`. Served as `/assets/`.
    pub assets_dir: PathBuf,
    /// Attachment folder names searched next to and above a note.
    pub attachment_dirs: Vec<String>,
    /// Extensions (lowercase, no dot) treated as images in wiki embeds.
    pub image_extensions: Vec<String>,
    /// Commit message template.
    pub commit_message: String,
    /// Run `git add/commit` after writing the post.
    pub git: bool,
    /// Run `git push` after committing.
    pub push: bool,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            posts_dir: PathBuf::from("pages/posts"),
            assets_dir: PathBuf::from("public/assets"),
            attachment_dirs: ["attachments", "assets", "images", "附件", "Attachments"]
                .map(String::from)
                .to_vec(),
            image_extensions: ["png", "jpg", "jpeg", "gif", "webp", "svg", "bmp", "ico"]
                .map(String::from)
                .to_vec(),
            commit_message: format!("feat: publish {TITLE_PLACEHOLDER}"),
            git: true,
            push: true,
        }
    }
}

impl PublishConfig {
    /// Render the commit message for a post title.
    pub fn commit_message_for(&self, title: &str) -> String {
        self.commit_message.replace(TITLE_PLACEHOLDER, title)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.commit_message.trim().is_empty() {
            diag.error_with_hint(
                FieldPath::new("publish.commit_message"),
                "commit message template is empty",
                format!("e.g. \"feat: publish {TITLE_PLACEHOLDER}\""),
            );
        }
        if self.push && !self.git {
            diag.warn(
                FieldPath::new("publish.push"),
                "push has no effect while git is disabled",
            );
        }
        for (idx, ext) in self.image_extensions.iter().enumerate() {
            if ext.starts_with('.') || ext.chars().any(|c| c.is_ascii_uppercase()) {
                diag.error_with_hint(
                    FieldPath::index("publish.image_extensions", idx, "ext"),
                    format!("extension '{ext}' must be lowercase without a dot"),
                    format!("use \"{}\"", ext.trim_start_matches('.').to_lowercase()),
                );
            }
        }
    }
}

/// Short-post JSON store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store directory, relative to the config file.
    pub data_dir: PathBuf,
    /// Upper bound on post body length, in characters.
    pub max_content_chars: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            max_content_chars: 200_000,
        }
    }
}

/// Local site layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Static-asset directory; site-absolute asset paths resolve here.
    pub public_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
        }
    }
}
