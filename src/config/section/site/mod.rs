//! `[site]` section configuration.
//!
//! Site identity handed to the generator as `siteConfig`: title, author
//! card, social icons, search and license toggles.
//!
//! # Example
//!
//! ```toml
//! [site]
//! lang = "zh-CN"
//! title = "My Blog"
//! url = "https://example.com/"
//!
//! [site.author]
//! name = "me"
//! avatar = "/images/avatar.jpg"
//!
//! [[site.social]]
//! name = "Telegram"
//! link = "https://t.me/example"
//! icon = "i-ri-telegram-fill"
//! color = "#0088CC"
//! ```

mod search;
mod social;

pub use search::{LicenseConfig, LicenseKind, SearchConfig, SearchEngine};
pub use social::{SocialLink, validate_social};

use crate::config::check::{check_asset, check_http_url, check_locale};
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Site identity and global toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteIdentity {
    /// Locale tag (e.g., "en", "zh-CN").
    pub lang: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: AuthorConfig,
    /// Canonical site URL, used for canonical links and feeds.
    pub url: String,
    /// Favicon asset path.
    pub favicon: String,
    pub social: Vec<SocialLink>,
    pub search: SearchConfig,
    pub license: LicenseConfig,
    /// Per-post encryption (generator feature, off by default).
    pub encrypt: EnableFlag,
    /// Comment system (generator feature, off by default).
    pub comment: EnableFlag,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            lang: "en".into(),
            title: String::new(),
            subtitle: String::new(),
            description: String::new(),
            author: AuthorConfig::default(),
            url: String::new(),
            favicon: "/favicon.ico".into(),
            social: Vec::new(),
            search: SearchConfig::default(),
            license: LicenseConfig::default(),
            encrypt: EnableFlag::default(),
            comment: EnableFlag::default(),
        }
    }
}

/// Author card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    pub name: String,
    /// Avatar asset path (e.g. "/images/avatar.jpg").
    pub avatar: String,
    pub status: AuthorStatus,
}

/// Presence status shown next to the avatar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorStatus {
    pub emoji: String,
    pub message: String,
}

/// A bare `{ enable = bool }` toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnableFlag {
    pub enable: bool,
}

impl SiteIdentity {
    /// Validate site identity.
    ///
    /// # Checks
    /// - `title` is set
    /// - `url` is an absolute http(s) URL with a host
    /// - `lang` and `license.language` are locale tags
    /// - every social link is valid
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                FieldPath::new("site.title"),
                "site title is empty",
                "set title = \"My Blog\" under [site]",
            );
        }

        if self.url.trim().is_empty() {
            diag.error_with_hint(
                FieldPath::new("site.url"),
                "site URL is not configured",
                "set url, e.g.: \"https://example.com/\"",
            );
        } else {
            check_http_url(&self.url, FieldPath::new("site.url"), diag);
        }

        check_locale(&self.lang, FieldPath::new("site.lang"), diag);
        if self.license.enabled {
            check_locale(
                &self.license.language,
                FieldPath::new("site.license.language"),
                diag,
            );
        }

        validate_social(&self.social, diag);
    }

    /// Check that referenced site assets exist in the static-asset directory.
    pub fn check_assets(&self, public_dir: &Path, diag: &mut ConfigDiagnostics) {
        check_asset(
            public_dir,
            &self.author.avatar,
            FieldPath::new("site.author.avatar"),
            diag,
        );
        check_asset(public_dir, &self.favicon, FieldPath::new("site.favicon"), diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_site() -> SiteIdentity {
        SiteIdentity {
            lang: "zh-CN".into(),
            title: "Blog".into(),
            url: "https://mikotossd.net/".into(),
            ..SiteIdentity::default()
        }
    }

    #[test]
    fn test_valid_site() {
        let mut diag = ConfigDiagnostics::new();
        valid_site().validate(&mut diag);
        assert!(diag.is_empty(), "{:?}", diag.errors());
    }

    #[test]
    fn test_missing_title_and_url() {
        let mut diag = ConfigDiagnostics::new();
        SiteIdentity::default().validate(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["site.title", "site.url"]);
    }

    #[test]
    fn test_bad_locale() {
        let mut site = valid_site();
        site.lang = "chinese".into();
        site.license.enabled = true;
        site.license.language = "zh-".into();

        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["site.lang", "site.license.language"]);
    }

    #[test]
    fn test_license_language_ignored_when_disabled() {
        let mut site = valid_site();
        site.license.language = "??".into();
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
