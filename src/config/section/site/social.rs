//! `[[site.social]]` links shown in the author card icon row.

use crate::config::check::{check_absolute_url, check_color};
use crate::config::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// One social icon. List order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Display name, unique within the list (e.g. "Telegram").
    pub name: String,
    /// Absolute target URL.
    pub link: String,
    /// Icon identifier understood by the theme (e.g. "i-ri-telegram-fill").
    pub icon: String,
    /// Hex or named CSS color.
    pub color: String,
}

/// Validate every social link.
///
/// # Checks
/// - `name` is non-empty and unique
/// - `link` is an absolute URL (web, `mailto:`, `tel:`)
/// - `color` is a hex or named color
pub fn validate_social(links: &[SocialLink], diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();

    for (idx, link) in links.iter().enumerate() {
        let name = link.name.trim();
        if name.is_empty() {
            diag.error(FieldPath::index("site.social", idx, "name"), "name is empty");
        } else if !seen.insert(name) {
            diag.error_with_hint(
                FieldPath::index("site.social", idx, "name"),
                format!("duplicate social link '{name}'"),
                "each social link needs a distinct name",
            );
        }

        check_absolute_url(
            &link.link,
            FieldPath::index("site.social", idx, "link"),
            diag,
        );
        check_color(
            &link.color,
            FieldPath::index("site.social", idx, "color"),
            diag,
        );
    }
}
