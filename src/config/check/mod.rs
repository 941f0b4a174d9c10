//! Field-level checks shared by the config sections.
//!
//! - [`color`]: CSS hex / named color literals
//! - [`locale`]: BCP-47 shaped locale tags

mod color;
mod locale;

pub use color::is_color;
pub use locale::is_locale_tag;

use super::{ConfigDiagnostics, FieldPath};
use std::path::{Component, Path, PathBuf};

/// Schemes that run code instead of navigating.
const SCRIPT_SCHEMES: &[&str] = &["javascript", "vbscript", "data"];

/// Report a diagnostic unless `value` is an absolute http(s) URL with a host.
pub fn check_http_url(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            } else if parsed.host_str().is_none_or(str::is_empty) {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL '{value}': {e}"),
                "use format like https://example.com",
            );
        }
    }
}

/// Report a diagnostic unless `value` is an absolute URL of any navigable
/// scheme (`https://…`, `mailto:…`, `tel:…`). Web links still need a host.
pub fn check_absolute_url(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
            check_http_url(value, field, diag);
        }
        Ok(parsed) if SCRIPT_SCHEMES.contains(&parsed.scheme()) => {
            diag.error_with_hint(
                field,
                format!("scheme '{}' is not allowed in a link", parsed.scheme()),
                "use a web, mailto: or tel: link",
            );
        }
        Ok(parsed) if parsed.cannot_be_a_base() && parsed.path().trim().is_empty() => {
            diag.error(field, format!("link '{value}' has no target"));
        }
        Ok(_) => {}
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL '{value}': {e}"),
                "use an absolute link like https://example.com or mailto:me@example.com",
            );
        }
    }
}

/// Report a diagnostic unless `value` is a hex or named CSS color.
pub fn check_color(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if !is_color(value) {
        diag.error_with_hint(
            field,
            format!("'{value}' is not a valid color"),
            "use a hex color like #0088CC or a CSS color name",
        );
    }
}

/// Report a diagnostic unless `value` is a locale tag.
pub fn check_locale(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if !is_locale_tag(value) {
        diag.error_with_hint(
            field,
            format!("'{value}' is not a valid locale tag"),
            "use a tag like en, zh-CN or zh-Hans",
        );
    }
}

/// Whether an asset reference points off-site and cannot be checked locally.
pub fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://")
        || reference.starts_with("https://")
        || reference.starts_with("//")
        || reference.starts_with("data:")
}

/// Resolve a site-absolute asset reference (`/images/avatar.jpg`) to its
/// location inside the static-asset directory.
///
/// Query strings and fragments are dropped. Returns `None` for remote
/// references and empty strings.
pub fn asset_location(public_dir: &Path, reference: &str) -> Option<PathBuf> {
    let reference = reference.trim();
    if reference.is_empty() || is_remote(reference) {
        return None;
    }
    let path = reference
        .split(['?', '#'])
        .next()
        .unwrap_or(reference)
        .trim_start_matches('/');
    Some(public_dir.join(path))
}

/// Whether a local reference climbs out of its base with `..`.
fn escapes_base(reference: &str) -> bool {
    Path::new(reference)
        .components()
        .any(|c| matches!(c, Component::ParentDir))
}

/// Report a diagnostic if a local asset reference does not exist.
pub fn check_asset(
    public_dir: &Path,
    reference: &str,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    let Some(location) = asset_location(public_dir, reference) else {
        return;
    };
    if escapes_base(reference) {
        diag.error_with_hint(
            field,
            format!("asset '{reference}' points outside {}", public_dir.display()),
            "asset paths must not contain '..'",
        );
    } else if !location.is_file() {
        diag.error_with_hint(
            field,
            format!("asset '{reference}' not found"),
            format!("expected file at {}", location.display()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_http_url() {
        let mut diag = ConfigDiagnostics::new();
        check_http_url("https://mikotossd.net/", FieldPath::new("site.url"), &mut diag);
        check_http_url("https://t.me/+85vc8uK_ebUyM2E1", FieldPath::new("a"), &mut diag);
        assert!(diag.is_empty());

        check_http_url("ftp://example.com", FieldPath::new("b"), &mut diag);
        check_http_url("example.com", FieldPath::new("c"), &mut diag);
        check_http_url("mailto:me@example.com", FieldPath::new("d"), &mut diag);
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_check_absolute_url() {
        let mut diag = ConfigDiagnostics::new();
        check_absolute_url("https://t.me/+85vc8uK_ebUyM2E1", FieldPath::new("a"), &mut diag);
        check_absolute_url("mailto:me@example.com", FieldPath::new("b"), &mut diag);
        check_absolute_url("tel:+8613800000000", FieldPath::new("c"), &mut diag);
        assert!(diag.is_empty());

        check_absolute_url("javascript:alert(1)", FieldPath::new("d"), &mut diag);
        check_absolute_url("x.com/me", FieldPath::new("e"), &mut diag);
        check_absolute_url("https://", FieldPath::new("f"), &mut diag);
        check_absolute_url("mailto:", FieldPath::new("g"), &mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["d", "e", "f", "g"]);
    }

    #[test]
    fn test_asset_location() {
        let public = Path::new("/site/public");
        assert_eq!(
            asset_location(public, "/images/avatar.jpg"),
            Some(PathBuf::from("/site/public/images/avatar.jpg"))
        );
        assert_eq!(
            asset_location(public, "images/bg.jpg?v=2"),
            Some(PathBuf::from("/site/public/images/bg.jpg"))
        );
        assert_eq!(asset_location(public, "https://cdn.example.com/a.png"), None);
        assert_eq!(asset_location(public, "//cdn.example.com/a.png"), None);
        assert_eq!(asset_location(public, "  "), None);
    }

    #[test]
    fn test_check_asset() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("images")).unwrap();
        fs::write(temp.path().join("images/avatar.jpg"), b"jpg").unwrap();

        let mut diag = ConfigDiagnostics::new();
        check_asset(temp.path(), "/images/avatar.jpg", FieldPath::new("ok"), &mut diag);
        assert!(diag.is_empty());

        check_asset(temp.path(), "/images/bg.jpg", FieldPath::new("missing"), &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "missing");
    }

    #[test]
    fn test_check_asset_rejects_parent_dir() {
        let temp = TempDir::new().unwrap();
        let public = temp.path().join("public");
        fs::create_dir_all(&public).unwrap();
        fs::write(temp.path().join("secret.jpg"), b"jpg").unwrap();

        let mut diag = ConfigDiagnostics::new();
        check_asset(&public, "/../secret.jpg", FieldPath::new("site.author.avatar"), &mut diag);
        check_asset(&public, "images/../../secret.jpg", FieldPath::new("b"), &mut diag);
        assert_eq!(diag.len(), 2);
        assert!(diag.errors()[0].message.contains("outside"));
    }
}
