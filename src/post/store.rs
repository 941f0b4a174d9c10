use super::{ARTICLES_DIR, Article, INDEX_FILE, NewPost, PostEntry, PostError};
use crate::{
    debug, log,
    utils::{hash, html},
};
use serde::Serialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Outcome of [`PostStore::delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deleted {
    pub entry: PostEntry,
    /// The article file was already gone; only the index entry was removed.
    pub file_missing: bool,
}

/// JSON-backed post store rooted at `data_dir`.
#[derive(Debug, Clone)]
pub struct PostStore {
    data_dir: PathBuf,
    max_content_chars: usize,
}

impl PostStore {
    pub fn open(data_dir: impl Into<PathBuf>, max_content_chars: usize) -> Self {
        Self {
            data_dir: data_dir.into(),
            max_content_chars,
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.data_dir.join(INDEX_FILE)
    }

    pub fn articles_dir(&self) -> PathBuf {
        self.data_dir.join(ARTICLES_DIR)
    }

    pub fn article_path(&self, id: &str) -> PathBuf {
        self.articles_dir().join(format!("{id}.json"))
    }

    /// Create the articles directory and an empty index when missing.
    pub fn ensure_structure(&self) -> Result<(), PostError> {
        let articles = self.articles_dir();
        if !articles.exists() {
            fs::create_dir_all(&articles).map_err(|e| PostError::Io(articles.clone(), e))?;
            log!("post"; "created {}", articles.display());
        }

        let index = self.index_path();
        if !index.exists() {
            write_json(&index, &Vec::<PostEntry>::new())?;
            log!("post"; "initialized empty index {}", index.display());
        }
        Ok(())
    }

    /// Read the index. A missing file is an empty store; a corrupt one is
    /// reported and treated as empty.
    pub fn load_index(&self) -> Result<Vec<PostEntry>, PostError> {
        let path = self.index_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(PostError::Io(path, e)),
        };

        match serde_json::from_str(&content) {
            Ok(posts) => Ok(posts),
            Err(e) => {
                log!("warning"; "index {} is corrupt ({e}), starting from an empty list", path.display());
                Ok(Vec::new())
            }
        }
    }

    pub fn save_index(&self, posts: &[PostEntry]) -> Result<(), PostError> {
        write_json(&self.index_path(), posts)
    }

    /// Index entries, newest first.
    pub fn list(&self) -> Result<Vec<PostEntry>, PostError> {
        self.load_index()
    }

    /// Read one article back.
    pub fn article(&self, id: &str) -> Result<Article, PostError> {
        let path = self.article_path(id);
        let content = fs::read_to_string(&path).map_err(|e| PostError::Io(path.clone(), e))?;
        serde_json::from_str(&content).map_err(|e| PostError::Json(path, e))
    }

    /// Store a new post at the front of the index.
    pub fn add(&self, post: NewPost) -> Result<PostEntry, PostError> {
        let title = post.title.trim();
        if title.is_empty() {
            return Err(PostError::EmptyTitle);
        }

        self.ensure_structure()?;
        let mut posts = self.load_index()?;

        let escaped_title = html::escape(title).into_owned();
        if posts.iter().any(|p| p.title == escaped_title) {
            return Err(PostError::Duplicate(title.to_string()));
        }

        let len = post.content.chars().count();
        if len > self.max_content_chars {
            return Err(PostError::TooLong {
                len,
                max: self.max_content_chars,
            });
        }

        let id = hash::post_id(title);
        let article = Article {
            id: id.clone(),
            title: escaped_title.clone(),
            content: html::escape_multiline(&post.content),
            image: post.image.trim().to_string(),
        };
        let article_path = self.article_path(&id);
        write_json(&article_path, &article)?;
        debug!("post"; "wrote {}", article_path.display());

        let entry = PostEntry {
            id,
            title: escaped_title,
            intro: html::escape(post.intro.trim()).into_owned(),
        };
        posts.insert(0, entry.clone());
        self.save_index(&posts)?;

        Ok(entry)
    }

    /// Remove the post at `index` (as shown by [`list`](Self::list)).
    pub fn delete(&self, index: usize) -> Result<Deleted, PostError> {
        let mut posts = self.load_index()?;
        if index >= posts.len() {
            return Err(PostError::NoSuchPost {
                index,
                count: posts.len(),
            });
        }

        let path = self.article_path(&posts[index].id);
        let file_missing = match fs::remove_file(&path) {
            Ok(()) => false,
            Err(e) if e.kind() == io::ErrorKind::NotFound => true,
            Err(e) => return Err(PostError::Io(path, e)),
        };

        let entry = posts.remove(index);
        self.save_index(&posts)?;
        Ok(Deleted {
            entry,
            file_missing,
        })
    }
}

/// Pretty JSON with 2-space indent and non-ASCII kept verbatim.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), PostError> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| PostError::Json(path.to_path_buf(), e))?;
    fs::write(path, json).map_err(|e| PostError::Io(path.to_path_buf(), e))
}
