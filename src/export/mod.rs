//! JSON export in the shape the generator reads.
//!
//! ```json
//! { "siteConfig": {...}, "theme": "yun", "themeConfig": {...}, "markdown": {...} }
//! ```
//!
//! Keys keep declaration order (`serde_json` with `preserve_order`).

use crate::config::{BlogConfig, MarkdownConfig, SiteIdentity, ThemeConfig};
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

/// Exported document shape.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportTarget {
    /// Full generator config: siteConfig, theme, themeConfig, markdown
    #[default]
    Valaxy,
    /// Site config only
    Site,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeneratorConfig<'a> {
    site_config: &'a SiteIdentity,
    theme: &'a str,
    theme_config: &'a ThemeConfig,
    markdown: &'a MarkdownConfig,
}

impl<'a> From<&'a BlogConfig> for GeneratorConfig<'a> {
    fn from(config: &'a BlogConfig) -> Self {
        Self {
            site_config: &config.site,
            theme: &config.theme,
            theme_config: &config.theme_config,
            markdown: &config.markdown,
        }
    }
}

/// Serialize `config` as the requested JSON document.
pub fn render(config: &BlogConfig, target: ExportTarget, pretty: bool) -> Result<String> {
    let value = match target {
        ExportTarget::Valaxy => serde_json::to_value(GeneratorConfig::from(config)),
        ExportTarget::Site => serde_json::to_value(&config.site),
    }
    .context("Failed to serialize config")?;

    let json = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SAMPLE_CONFIG, test_parse_config};
    use serde_json::Value;

    fn export(config: &BlogConfig, target: ExportTarget) -> Value {
        serde_json::from_str(&render(config, target, false).unwrap()).unwrap()
    }

    #[test]
    fn test_single_telegram_entry() {
        let config = test_parse_config(
            r##"
            [[site.social]]
            name = "Telegram"
            link = "https://t.me/+85vc8uK_ebUyM2E1"
            icon = "i-ri-telegram-fill"
            color = "#0088CC"
            "##,
        );

        let json = export(&config, ExportTarget::Valaxy);
        let social = json["siteConfig"]["social"].as_array().unwrap();
        assert_eq!(social.len(), 1);
        assert_eq!(social[0]["name"], "Telegram");
        assert_eq!(social[0]["link"], "https://t.me/+85vc8uK_ebUyM2E1");
        assert_eq!(social[0]["color"], "#0088CC");
    }

    #[test]
    fn test_top_level_key_order() {
        let config = test_parse_config(SAMPLE_CONFIG);
        let json = export(&config, ExportTarget::Valaxy);
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["siteConfig", "theme", "themeConfig", "markdown"]);
        assert_eq!(json["theme"], "yun");
    }

    #[test]
    fn test_social_order_preserved() {
        let config = test_parse_config(SAMPLE_CONFIG);
        let json = export(&config, ExportTarget::Site);
        let names: Vec<_> = json["social"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap().to_string())
            .collect();
        let expected: Vec<_> = config.site.social.iter().map(|s| s.name.clone()).collect();
        assert_eq!(names, expected);
        assert_eq!(names.last().map(String::as_str), Some("Telegram"));
    }

    #[test]
    fn test_generator_key_names() {
        let config = test_parse_config(SAMPLE_CONFIG);
        let json = export(&config, ExportTarget::Valaxy);

        assert_eq!(json["siteConfig"]["search"]["type"], "fuse");
        assert_eq!(json["siteConfig"]["license"]["type"], "by-nc-sa");
        assert!(json["themeConfig"]["post"]["wordCount"].is_boolean());
        assert_eq!(json["markdown"]["codeHighlight"]["theme"], "one-dark-pro");
    }

    #[test]
    fn test_pretty_output() {
        let config = BlogConfig::default();
        let compact = render(&config, ExportTarget::Site, false).unwrap();
        let pretty = render(&config, ExportTarget::Site, true).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.contains("\n  \"lang\": \"en\""));
    }
}
