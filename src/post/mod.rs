//! Short-post store.
//!
//! ```text
//! <data_dir>/
//! ├── posts.json          # [{id, title, intro}], newest first
//! └── articles/
//!     └── <id>.json       # {id, title, content, image}
//! ```
//!
//! Text is stored HTML-escaped, ready to be dropped into a page.

mod store;

pub use store::{Deleted, PostStore};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub const INDEX_FILE: &str = "posts.json";
pub const ARTICLES_DIR: &str = "articles";

/// Entry in `posts.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub intro: String,
}

/// Contents of `articles/<id>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Image file name under `images/`, empty for none.
    #[serde(default)]
    pub image: String,
}

/// Raw user input for a new post.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub intro: String,
    pub content: String,
    pub image: String,
}

#[derive(Debug, Error)]
pub enum PostError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("a post titled \"{0}\" already exists")]
    Duplicate(String),

    #[error("content is {len} characters, the limit is {max}")]
    TooLong { len: usize, max: usize },

    #[error("no post at index {index} ({count} posts)")]
    NoSuchPost { index: usize, count: usize },

    #[error("failed to access {0}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to encode {0}")]
    Json(PathBuf, #[source] serde_json::Error),
}
