//! `blogkit publish`: send an Obsidian note to the blog.

use super::PublishArgs;
use crate::{
    config::BlogConfig,
    log,
    publish::{self, FrontMatterInput, GitOptions, Interactive, Presets},
};
use anyhow::Result;

pub fn publish_note(config: &BlogConfig, args: &PublishArgs) -> Result<()> {
    let presets = Presets {
        tags: args.tags.clone(),
        category: args.category.clone(),
        excerpt: args.excerpt.clone(),
    };
    let mut input: Box<dyn FrontMatterInput> = if args.non_interactive {
        Box::new(presets)
    } else {
        Box::new(Interactive::new(presets, config.publish.posts_dir.clone()))
    };

    let mut git = GitOptions::from_config(&config.publish);
    if args.no_git {
        git.enabled = false;
    }
    if args.no_push {
        git.push = false;
    }
    git.push &= git.enabled;

    let report = publish::publish(&config.publish, &args.note, input.as_mut(), git)?;

    match (report.committed, report.pushed) {
        (true, true) => log!("publish"; "\"{}\" published and pushed", report.title),
        (true, false) => log!("publish"; "\"{}\" committed, push skipped", report.title),
        _ => log!("publish"; "\"{}\" written to {}", report.title, report.destination.display()),
    }
    if !report.images.missing.is_empty() {
        log!("warning"; "{} image(s) not found, references kept", report.images.missing.len());
    }
    Ok(())
}
