//! YAML front matter parsing and completion.
//!
//! Front matter is the block between two `---` fences at the very top of a
//! note. Key order is preserved when the block is rewritten.

use anyhow::Result;
use regex::Regex;
use serde_yaml_ng::{Mapping, Value};
use std::sync::LazyLock;

static FRONT_MATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n").expect("front matter pattern is a valid regex")
});

/// Split `content` into front matter and body.
///
/// Returns `None` when there is no front matter block. A block that is not
/// valid YAML, or not a mapping, yields an empty mapping.
pub fn parse(content: &str) -> (Option<Mapping>, &str) {
    let Some(caps) = FRONT_MATTER_RE.captures(content) else {
        return (None, content);
    };
    let body = &content[caps.get(0).map_or(0, |m| m.end())..];
    let raw = caps.get(1).map_or("", |m| m.as_str());

    let meta = match serde_yaml_ng::from_str::<Value>(raw) {
        Ok(Value::Mapping(map)) => map,
        _ => Mapping::new(),
    };
    (Some(meta), body)
}

/// Join front matter and body back into a document.
pub fn dump(meta: &Mapping, body: &str) -> Result<String> {
    let yaml = serde_yaml_ng::to_string(meta)?;
    Ok(format!("---\n{yaml}---\n{body}"))
}

/// Read a key as a plain string (numbers and booleans are stringified).
pub fn get_str(meta: &Mapping, key: &str) -> Option<String> {
    meta.get(key).and_then(scalar_to_string)
}

pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}

/// Missing, null, `false`, `0`, empty string and empty collections.
pub fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Sequence(seq)) => seq.is_empty(),
        Some(Value::Mapping(map)) => map.is_empty(),
        Some(Value::Tagged(tagged)) => is_falsy(Some(&tagged.value)),
    }
}

/// Answers needed while building front matter.
pub trait FrontMatterInput {
    /// Tags for the post; empty to skip.
    fn tags(&mut self) -> Result<Vec<String>>;

    /// Category for a newly generated block.
    fn category(&mut self) -> Result<Option<String>>;

    /// Excerpt for a newly generated block.
    fn excerpt(&mut self) -> Result<Option<String>>;
}

/// What [`ensure`] did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterChange {
    Generated,
    Completed,
    Unchanged,
}

/// Make sure `content` has complete front matter.
///
/// `now` is the `date`/`updated` stamp used for missing fields.
pub fn ensure(
    content: &str,
    title: &str,
    now: &str,
    input: &mut dyn FrontMatterInput,
) -> Result<(String, FrontMatterChange)> {
    let (meta, body) = parse(content);

    let Some(mut meta) = meta else {
        let mut meta = Mapping::new();
        meta.insert("title".into(), title.into());
        meta.insert("date".into(), now.into());
        meta.insert("updated".into(), now.into());

        let tags = input.tags()?;
        if !tags.is_empty() {
            meta.insert("tags".into(), string_list(tags));
        }
        if let Some(category) = non_empty(input.category()?) {
            meta.insert("categories".into(), string_list(vec![category]));
        }
        if let Some(excerpt) = non_empty(input.excerpt()?) {
            meta.insert("excerpt".into(), excerpt.into());
        }
        return Ok((dump(&meta, body)?, FrontMatterChange::Generated));
    };

    let mut changed = false;
    if is_falsy(meta.get("title")) {
        meta.insert("title".into(), title.into());
        changed = true;
    }
    if is_falsy(meta.get("date")) {
        meta.insert("date".into(), now.into());
        changed = true;
    }
    if !meta.contains_key("updated") {
        meta.insert("updated".into(), now.into());
        changed = true;
    }
    if is_falsy(meta.get("tags")) {
        let tags = input.tags()?;
        if !tags.is_empty() {
            meta.insert("tags".into(), string_list(tags));
            changed = true;
        }
    }

    if changed {
        Ok((dump(&meta, body)?, FrontMatterChange::Completed))
    } else {
        Ok((content.to_string(), FrontMatterChange::Unchanged))
    }
}

fn string_list(items: Vec<String>) -> Value {
    Value::Sequence(items.into_iter().map(Value::String).collect())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: &str = "2025-03-07 09:05:01";

    #[derive(Default)]
    struct Fixed {
        tags: Vec<String>,
        category: Option<String>,
        excerpt: Option<String>,
        tag_calls: usize,
    }

    impl FrontMatterInput for Fixed {
        fn tags(&mut self) -> Result<Vec<String>> {
            self.tag_calls += 1;
            Ok(self.tags.clone())
        }
        fn category(&mut self) -> Result<Option<String>> {
            Ok(self.category.clone())
        }
        fn excerpt(&mut self) -> Result<Option<String>> {
            Ok(self.excerpt.clone())
        }
    }

    fn keys(meta: &Mapping) -> Vec<String> {
        meta.keys().filter_map(scalar_to_string).collect()
    }

    #[test]
    fn test_parse_without_front_matter() {
        let (meta, body) = parse("# Title\n\ntext");
        assert!(meta.is_none());
        assert_eq!(body, "# Title\n\ntext");
    }

    #[test]
    fn test_parse_splits_body() {
        let (meta, body) = parse("---\ntitle: Hello\ntags: [a, b]\n---\nbody\n");
        let meta = meta.unwrap();
        assert_eq!(get_str(&meta, "title").as_deref(), Some("Hello"));
        assert_eq!(body, "body\n");
    }

    #[test]
    fn test_parse_invalid_or_scalar_yaml_is_empty_map() {
        let (meta, body) = parse("---\n: : [\n---\nbody");
        assert_eq!(meta, Some(Mapping::new()));
        assert_eq!(body, "body");

        let (meta, _) = parse("---\njust a string\n---\n");
        assert_eq!(meta, Some(Mapping::new()));
    }

    #[test]
    fn test_parse_requires_leading_fence() {
        let (meta, _) = parse("intro\n---\ntitle: x\n---\n");
        assert!(meta.is_none());
    }

    #[test]
    fn test_is_falsy() {
        let (meta, _) = parse("---\na: ''\nb: []\nc: 0\nd: false\ne: x\nf: ~\n---\n");
        let meta = meta.unwrap();
        for key in ["a", "b", "c", "d", "f", "missing"] {
            assert!(is_falsy(meta.get(key)), "{key}");
        }
        assert!(!is_falsy(meta.get("e")));
    }

    #[test]
    fn test_generate_front_matter() {
        let mut input = Fixed {
            tags: vec!["rust".into(), "blog".into()],
            category: Some("  notes ".into()),
            excerpt: Some(String::new()),
            ..Default::default()
        };
        let (out, change) = ensure("Hello body\n", "My Note", NOW, &mut input).unwrap();
        assert_eq!(change, FrontMatterChange::Generated);

        let (meta, body) = parse(&out);
        let meta = meta.unwrap();
        assert_eq!(body, "Hello body\n");
        assert_eq!(keys(&meta), ["title", "date", "updated", "tags", "categories"]);
        assert_eq!(get_str(&meta, "title").as_deref(), Some("My Note"));
        assert_eq!(get_str(&meta, "date").as_deref(), Some(NOW));
        assert_eq!(meta.get("categories"), Some(&string_list(vec!["notes".into()])));
    }

    #[test]
    fn test_generate_minimal() {
        let mut input = Fixed::default();
        let (out, _) = ensure("body", "T", NOW, &mut input).unwrap();
        let (meta, _) = parse(&out);
        assert_eq!(keys(&meta.unwrap()), ["title", "date", "updated"]);
    }

    #[test]
    fn test_complete_existing_front_matter() {
        let content = "---\ntitle: ''\nauthor: me\ntags: []\n---\nbody";
        let mut input = Fixed {
            tags: vec!["new".into()],
            ..Default::default()
        };
        let (out, change) = ensure(content, "Fallback", NOW, &mut input).unwrap();
        assert_eq!(change, FrontMatterChange::Completed);

        let (meta, body) = parse(&out);
        let meta = meta.unwrap();
        assert_eq!(body, "body");
        assert_eq!(keys(&meta), ["title", "author", "tags", "date", "updated"]);
        assert_eq!(get_str(&meta, "title").as_deref(), Some("Fallback"));
        assert_eq!(meta.get("tags"), Some(&string_list(vec!["new".into()])));
    }

    #[test]
    fn test_complete_keeps_existing_updated() {
        let content = "---\ntitle: A\ndate: x\nupdated: ''\ntags: [a]\n---\nbody";
        let mut input = Fixed::default();
        let (out, change) = ensure(content, "A", NOW, &mut input).unwrap();
        assert_eq!(change, FrontMatterChange::Unchanged);
        assert_eq!(out, content);
        assert_eq!(input.tag_calls, 0);
    }

    #[test]
    fn test_complete_without_tags_answer_is_unchanged() {
        let content = "---\ntitle: A\ndate: '2024-01-01'\nupdated: '2024-01-01'\n---\n  body";
        let mut input = Fixed::default();
        let (out, change) = ensure(content, "A", NOW, &mut input).unwrap();
        assert_eq!(change, FrontMatterChange::Unchanged);
        assert_eq!(out, content);
        assert_eq!(input.tag_calls, 1);
    }
}
