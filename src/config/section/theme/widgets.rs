//! Individual theme widgets: banner, footer, sidebar, post meta, menus.

use crate::config::section::site::EnableFlag;
use serde::{Deserialize, Serialize};

/// Home page banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub enable: bool,
    /// Banner text, rendered one character per line by the theme.
    pub title: String,
    /// Animated cloud decoration.
    pub cloud: EnableFlag,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            enable: true,
            title: String::new(),
            cloud: EnableFlag { enable: true },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// First year of the copyright range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i32>,
    /// ICP filing notice (mainland China hosting).
    pub beian: BeianConfig,
    /// "Powered by" line.
    pub powered: bool,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            since: None,
            beian: BeianConfig::default(),
            powered: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeianConfig {
    pub enable: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icp: String,
}

/// Sidebar widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsideConfig {
    /// Tag cloud.
    pub tags: EnableFlag,
    pub categories: EnableFlag,
}

impl Default for AsideConfig {
    fn default() -> Self {
        Self {
            tags: EnableFlag { enable: true },
            categories: EnableFlag { enable: true },
        }
    }
}

/// Per-post metadata line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostMetaConfig {
    #[serde(rename = "wordCount", alias = "word_count")]
    pub word_count: bool,
    #[serde(rename = "readingTime", alias = "reading_time")]
    pub reading_time: bool,
}

impl Default for PostMetaConfig {
    fn default() -> Self {
        Self {
            word_count: true,
            reading_time: true,
        }
    }
}

/// Static page link (`[[theme_config.pages]]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLink {
    pub name: String,
    /// Site-relative URL, e.g. "/archives/".
    pub url: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomMenuEntry>,
}

/// Extra navigation entry appended to the theme menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomMenuEntry {
    pub title: String,
    pub url: String,
    pub icon: String,
}
