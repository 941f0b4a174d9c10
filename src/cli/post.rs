//! `blogkit post`: manage the short-post store.

use super::{PostAction, PostAddArgs, prompt};
use crate::{
    config::BlogConfig,
    log, logger,
    post::{NewPost, PostStore},
};
use anyhow::{Context, Result};
use std::fs;

pub fn run_post(config: &BlogConfig, action: &PostAction) -> Result<()> {
    let store = PostStore::open(&config.store.data_dir, config.store.max_content_chars);
    match action {
        PostAction::Add { args } => add(&store, args),
        PostAction::Delete { index, yes } => delete(&store, *index, *yes),
        PostAction::List => list(&store),
    }
}

fn add(store: &PostStore, args: &PostAddArgs) -> Result<()> {
    let title = match &args.title {
        Some(title) => title.clone(),
        None => prompt::ask("Title: ")?,
    };
    // fail fast before asking for the rest
    if title.trim().is_empty() {
        return Err(crate::post::PostError::EmptyTitle.into());
    }

    let intro = match &args.intro {
        Some(intro) => intro.clone(),
        None => prompt::ask("Intro: ")?,
    };
    let content = match &args.content_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?,
        None => prompt::ask_multiline("Content:")?,
    };
    let image = match &args.image {
        Some(image) => image.clone(),
        None => prompt::ask("Image file under images/ (empty for none): ")?,
    };

    let entry = store.add(NewPost {
        title,
        intro,
        content,
        image,
    })?;
    log!("post"; "added {} ({})", entry.title, entry.id);
    log!("post"; "saved {}", store.article_path(&entry.id).display());
    Ok(())
}

fn delete(store: &PostStore, index: Option<usize>, yes: bool) -> Result<()> {
    let posts = store.list()?;
    if posts.is_empty() {
        log!("post"; "no posts");
        return Ok(());
    }

    let index = match index {
        Some(index) => index,
        None => {
            print_posts(store)?;
            let answer = prompt::ask("Number to delete (q to quit): ")?;
            if answer.eq_ignore_ascii_case("q") {
                return Ok(());
            }
            answer
                .parse()
                .with_context(|| format!("'{answer}' is not a post number"))?
        }
    };

    if let Some(post) = posts.get(index)
        && !yes
        && !prompt::confirm(&format!("Delete \"{}\"?", post.title))?
    {
        return Ok(());
    }

    let deleted = store.delete(index)?;
    if deleted.file_missing {
        logger::step_warn("article file was already gone, index entry removed");
    } else {
        logger::step_ok(&format!(
            "removed {}",
            store.article_path(&deleted.entry.id).display()
        ));
    }
    log!("post"; "deleted {}", deleted.entry.title);
    Ok(())
}

fn list(store: &PostStore) -> Result<()> {
    if store.list()?.is_empty() {
        log!("post"; "no posts");
        return Ok(());
    }
    print_posts(store)
}

fn print_posts(store: &PostStore) -> Result<()> {
    for (i, post) in store.list()?.iter().enumerate() {
        println!("[{i}] {} (ID: {})", post.title, post.id);
    }
    Ok(())
}
