//! `[site.search]` and `[site.license]` toggles.

use serde::{Deserialize, Serialize};

/// Client-side search widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub enable: bool,
    #[serde(rename = "type")]
    pub kind: SearchEngine,
}

/// Search engines the generator knows how to wire up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    /// In-browser fuzzy full-text search over a prebuilt index.
    #[default]
    Fuse,
    /// Hosted Algolia DocSearch.
    Algolia,
    /// Generator-provided search engine.
    Engine,
}

/// Footer license notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseConfig {
    pub enabled: bool,
    /// Locale of the notice text.
    pub language: String,
    #[serde(rename = "type")]
    pub kind: LicenseKind,
}

impl Default for LicenseConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            language: "en".into(),
            kind: LicenseKind::default(),
        }
    }
}

/// Creative Commons variants accepted by the theme.
///
/// Serialized as the short tag (`by-nc-sa`); the long human form
/// (`CC BY-NC-SA 4.0`) is accepted on load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LicenseKind {
    #[serde(rename = "zero", alias = "CC0", alias = "CC0 1.0")]
    Zero,
    #[serde(rename = "by", alias = "CC BY 4.0")]
    By,
    #[serde(rename = "by-sa", alias = "CC BY-SA 4.0")]
    BySa,
    #[serde(rename = "by-nd", alias = "CC BY-ND 4.0")]
    ByNd,
    #[serde(rename = "by-nc", alias = "CC BY-NC 4.0")]
    ByNc,
    #[default]
    #[serde(rename = "by-nc-sa", alias = "CC BY-NC-SA 4.0")]
    ByNcSa,
    #[serde(rename = "by-nc-nd", alias = "CC BY-NC-ND 4.0")]
    ByNcNd,
}

impl LicenseKind {
    /// Human readable license name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Zero => "CC0 1.0",
            Self::By => "CC BY 4.0",
            Self::BySa => "CC BY-SA 4.0",
            Self::ByNd => "CC BY-ND 4.0",
            Self::ByNc => "CC BY-NC 4.0",
            Self::ByNcSa => "CC BY-NC-SA 4.0",
            Self::ByNcNd => "CC BY-NC-ND 4.0",
        }
    }
}
