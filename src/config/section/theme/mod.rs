//! `[theme_config]` section configuration.
//!
//! Cosmetic and layout toggles of the theme package. Each toggle is read
//! independently by the renderer; there are no cross-field invariants beyond
//! value ranges checked in [`ThemeConfig::validate`].
//!
//! # Example
//!
//! ```toml
//! theme = "yun"
//!
//! [theme_config.colors]
//! primary = "#3498db"
//!
//! [theme_config.bg_image]
//! enable = true
//! url = "/images/bg.jpg"
//! dark = "/images/bg-dark.jpg"
//! opacity = 0.8
//! ```

mod widgets;

pub use widgets::{
    AsideConfig, BannerConfig, BeianConfig, CustomMenuEntry, FooterConfig, MenuConfig,
    PageLink, PostMetaConfig,
};

use crate::config::check::{check_asset, check_color};
use crate::config::section::site::EnableFlag;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Theme toggles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub colors: ThemeColors,
    pub banner: BannerConfig,
    pub bg_image: BackgroundImage,
    pub footer: FooterConfig,
    pub aside: AsideConfig,
    pub post: PostMetaConfig,
    /// Static page links shown on the home page, in display order.
    pub pages: Vec<PageLink>,
    pub sponsor: EnableFlag,
    pub menu: MenuConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub primary: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#0078E7".into(),
        }
    }
}

/// Page background with light and dark variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundImage {
    pub enable: bool,
    /// Light-mode image.
    pub url: String,
    /// Dark-mode image.
    pub dark: String,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
}

impl Default for BackgroundImage {
    fn default() -> Self {
        Self {
            enable: false,
            url: String::new(),
            dark: String::new(),
            opacity: 1.0,
        }
    }
}

impl ThemeConfig {
    /// Validate value ranges and color literals.
    pub fn validate(&self, current_year: i32, diag: &mut ConfigDiagnostics) {
        check_color(
            &self.colors.primary,
            FieldPath::new("theme_config.colors.primary"),
            diag,
        );

        if !(0.0..=1.0).contains(&self.bg_image.opacity) {
            diag.error_with_hint(
                FieldPath::new("theme_config.bg_image.opacity"),
                format!("opacity {} is out of range", self.bg_image.opacity),
                "use a value between 0.0 and 1.0",
            );
        }

        if let Some(since) = self.footer.since
            && since > current_year
        {
            diag.error(
                FieldPath::new("theme_config.footer.since"),
                format!("year {since} is in the future"),
            );
        }

        for (idx, page) in self.pages.iter().enumerate() {
            if page.name.trim().is_empty() {
                diag.error(
                    FieldPath::index("theme_config.pages", idx, "name"),
                    "name is empty",
                );
            }
            if page.url.trim().is_empty() {
                diag.error(
                    FieldPath::index("theme_config.pages", idx, "url"),
                    "url is empty",
                );
            }
            if !page.color.is_empty() {
                check_color(
                    &page.color,
                    FieldPath::index("theme_config.pages", idx, "color"),
                    diag,
                );
            }
        }
    }

    /// Check background images exist when the background is enabled.
    pub fn check_assets(&self, public_dir: &Path, diag: &mut ConfigDiagnostics) {
        if !self.bg_image.enable {
            return;
        }
        check_asset(
            public_dir,
            &self.bg_image.url,
            FieldPath::new("theme_config.bg_image.url"),
            diag,
        );
        check_asset(
            public_dir,
            &self.bg_image.dark,
            FieldPath::new("theme_config.bg_image.dark"),
            diag,
        );
    }
}
