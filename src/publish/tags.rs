//! Tag suggestions from already published posts.

use super::frontmatter::{self, scalar_to_string};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde_yaml_ng::Value;
use std::{fs, path::Path};

/// Every tag used under `posts_dir`, most frequent first.
///
/// Ties keep the order in which tags are first seen, scanning files sorted
/// by name. Unreadable files are skipped.
pub fn collect_existing_tags(posts_dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(posts_dir) else {
        return Vec::new();
    };

    let mut files: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "md"))
        .collect();
    files.sort();

    let per_file: Vec<Vec<String>> = files
        .par_iter()
        .map(|path| {
            fs::read_to_string(path)
                .map(|content| tags_of(&content))
                .unwrap_or_default()
        })
        .collect();

    rank(per_file.into_iter().flatten())
}

/// Tags declared in a document's front matter.
///
/// `tags` may be a list or a single string.
pub fn tags_of(content: &str) -> Vec<String> {
    let (Some(meta), _) = frontmatter::parse(content) else {
        return Vec::new();
    };
    let values: Vec<&Value> = match meta.get("tags") {
        Some(Value::Sequence(seq)) => seq.iter().collect(),
        Some(value @ Value::String(_)) => vec![value],
        _ => Vec::new(),
    };
    values
        .into_iter()
        .filter_map(scalar_to_string)
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn rank(tags: impl Iterator<Item = String>) -> Vec<String> {
    let mut order = Vec::new();
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    for tag in tags {
        let count = counts.entry(tag.clone()).or_insert(0);
        if *count == 0 {
            order.push(tag);
        }
        *count += 1;
    }
    // stable: equal counts keep first-seen order
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order
}

/// Result of parsing a tag selection line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection {
    pub tags: Vec<String>,
    /// Indexes that did not refer to an existing tag.
    pub out_of_range: Vec<i64>,
}

/// Parse input such as `1,3,new tag`.
///
/// Numbers are 1-based indexes into `existing`; anything else is a new tag.
/// Duplicates are dropped, first occurrence wins.
pub fn parse_tag_selection(input: &str, existing: &[String]) -> TagSelection {
    fn push(tag: &str, tags: &mut Vec<String>) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    let mut selection = TagSelection::default();

    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.parse::<i64>() {
            Ok(index) => match usize::try_from(index)
                .ok()
                .and_then(|i| i.checked_sub(1))
                .and_then(|i| existing.get(i))
            {
                Some(tag) => push(tag, &mut selection.tags),
                None => selection.out_of_range.push(index),
            },
            Err(_) => push(part, &mut selection.tags),
        }
    }
    selection
}
