//! `[markdown]` section configuration.
//!
//! Options forwarded to the generator's markdown renderer.
//!
//! # Example
//!
//! ```toml
//! [markdown.katex]
//! enable = true
//!
//! [markdown.codeHighlight]
//! theme = "one-dark-pro"
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub katex: KatexConfig,
    #[serde(rename = "codeHighlight", alias = "code_highlight")]
    pub code_highlight: CodeHighlightConfig,
}

/// Math rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KatexConfig {
    pub enable: bool,
    /// Engine options, passed through verbatim.
    pub options: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeHighlightConfig {
    /// Highlighter theme identifier.
    pub theme: String,
}

impl Default for CodeHighlightConfig {
    fn default() -> Self {
        Self {
            theme: "one-dark-pro".into(),
        }
    }
}
