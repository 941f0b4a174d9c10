//! Locale tag shape check.

/// Check whether `tag` looks like a BCP-47 locale tag.
///
/// Accepts a 2-3 letter primary language followed by subtags of 1-8
/// alphanumerics, separated by `-` or `_` (`en`, `zh-CN`, `zh_Hans_CN`).
/// Single-character subtags are only valid as extension singletons and must
/// be followed by another subtag.
pub fn is_locale_tag(tag: &str) -> bool {
    let mut parts = tag.split(['-', '_']);

    let Some(primary) = parts.next() else {
        return false;
    };
    if !(2..=3).contains(&primary.len()) || !primary.bytes().all(|b| b.is_ascii_alphabetic()) {
        return false;
    }

    let rest: Vec<&str> = parts.collect();
    for (i, sub) in rest.iter().enumerate() {
        if sub.is_empty() || sub.len() > 8 || !sub.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return false;
        }
        if sub.len() == 1 && i + 1 == rest.len() {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_locales() {
        for tag in ["en", "zh-CN", "zh_CN", "zh-Hans", "zh-Hans-CN", "en-US-x-private", "yue"] {
            assert!(is_locale_tag(tag), "{tag} should be valid");
        }
    }

    #[test]
    fn test_invalid_locales() {
        for tag in ["", "e", "english", "zh-", "zh--CN", "zh-CN-", "12", "zh-CN-x", "zh-ÄÖ"] {
            assert!(!is_locale_tag(tag), "{tag} should be invalid");
        }
    }
}
