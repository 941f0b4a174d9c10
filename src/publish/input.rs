//! Sources of front matter answers.

use super::{
    frontmatter::FrontMatterInput,
    tags::{collect_existing_tags, parse_tag_selection},
};
use crate::{cli::prompt, logger};
use anyhow::Result;
use std::path::PathBuf;

/// Fixed answers, typically from command-line flags. Never prompts.
#[derive(Debug, Clone, Default)]
pub struct Presets {
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub excerpt: Option<String>,
}

impl FrontMatterInput for Presets {
    fn tags(&mut self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn category(&mut self) -> Result<Option<String>> {
        Ok(self.category.clone())
    }

    fn excerpt(&mut self) -> Result<Option<String>> {
        Ok(self.excerpt.clone())
    }
}

/// Terminal prompts, falling back to presets where they were given.
pub struct Interactive {
    presets: Presets,
    posts_dir: PathBuf,
}

impl Interactive {
    pub fn new(presets: Presets, posts_dir: PathBuf) -> Self {
        Self { presets, posts_dir }
    }
}

impl FrontMatterInput for Interactive {
    fn tags(&mut self) -> Result<Vec<String>> {
        if !self.presets.tags.is_empty() {
            return Ok(self.presets.tags.clone());
        }

        let existing = collect_existing_tags(&self.posts_dir);
        eprintln!();
        if existing.is_empty() {
            eprintln!("No tags yet. Enter new tags separated by commas.");
        } else {
            eprintln!("Existing tags:");
            for (i, tag) in existing.iter().enumerate() {
                eprintln!("  [{:2}] {tag}", i + 1);
            }
            eprintln!("Enter numbers or new tag names separated by commas, e.g. 1,3,new tag");
        }
        let answer = prompt::ask("Tags (empty to skip): ")?;

        let selection = parse_tag_selection(&answer, &existing);
        for index in &selection.out_of_range {
            logger::step_warn(&format!("tag number {index} is out of range, ignored"));
        }
        if !selection.tags.is_empty() {
            logger::step_ok(&format!("tags: {}", selection.tags.join(", ")));
        }
        Ok(selection.tags)
    }

    fn category(&mut self) -> Result<Option<String>> {
        if self.presets.category.is_some() {
            return Ok(self.presets.category.clone());
        }
        let answer = prompt::ask("Category (empty to skip): ")?;
        Ok(Some(answer).filter(|s| !s.is_empty()))
    }

    fn excerpt(&mut self) -> Result<Option<String>> {
        if self.presets.excerpt.is_some() {
            return Ok(self.presets.excerpt.clone());
        }
        let answer = prompt::ask("Excerpt (empty to skip): ")?;
        Ok(Some(answer).filter(|s| !s.is_empty()))
    }
}
