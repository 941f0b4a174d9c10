//! Obsidian note → generator post.
//!
//! # Pipeline
//!
//! 1. Check the source note (exists, is a file, markdown extension)
//! 2. Ensure `posts_dir` and `assets_dir` exist
//! 3. Migrate local images into `assets_dir`
//! 4. Generate or complete the front matter
//! 5. Write `posts_dir/<stem>.md` (spaces become `-`)
//! 6. `git add .`, `git commit`, `git push`

pub mod frontmatter;
pub mod image;
mod input;
pub mod tags;

pub use frontmatter::{FrontMatterChange, FrontMatterInput};
pub use image::{ImageMigrator, MigrationReport};
pub use input::{Interactive, Presets};

use crate::{
    config::PublishConfig,
    debug, log,
    utils::{
        git::{self, GitError},
        time,
    },
};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("file does not exist: {0}")]
    NotFound(PathBuf),

    #[error("path is not a file: {0}")]
    NotAFile(PathBuf),

    #[error("not a markdown file ({ext}): {path}")]
    NotMarkdown { path: PathBuf, ext: String },

    #[error("{0} is not valid UTF-8")]
    NotUtf8(PathBuf),

    #[error("failed to access {0}")]
    Io(PathBuf, #[source] io::Error),

    #[error(transparent)]
    Step(#[from] anyhow::Error),

    #[error("post written, but publishing did not finish. Check the repository and finish by hand.\n{0}")]
    Git(#[from] GitError),
}

/// Which git steps to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GitOptions {
    pub enabled: bool,
    pub push: bool,
}

impl GitOptions {
    pub fn from_config(config: &PublishConfig) -> Self {
        Self {
            enabled: config.git,
            push: config.git && config.push,
        }
    }
}

/// Summary of a publish run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Title from the written front matter.
    pub title: String,
    pub images: MigrationReport,
    pub front_matter: FrontMatterChange,
    pub committed: bool,
    pub pushed: bool,
}

/// A validated source note.
#[derive(Debug, Clone)]
pub struct SourceNote {
    pub path: PathBuf,
    /// File stem, used as the default title.
    pub title: String,
}

impl SourceNote {
    pub fn open(path: &Path) -> Result<Self, PublishError> {
        let path = crate::utils::path::normalize_path(path);
        if !path.exists() {
            return Err(PublishError::NotFound(path));
        }
        if !path.is_file() {
            return Err(PublishError::NotAFile(path));
        }

        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if !MARKDOWN_EXTENSIONS.contains(&ext.as_str()) {
            return Err(PublishError::NotMarkdown { path, ext });
        }

        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { path, title })
    }

    fn read(&self) -> Result<String, PublishError> {
        let bytes = fs::read(&self.path).map_err(|e| PublishError::Io(self.path.clone(), e))?;
        String::from_utf8(bytes).map_err(|_| PublishError::NotUtf8(self.path.clone()))
    }

    /// Output file name: the stem with spaces replaced by `-`.
    pub fn output_name(&self) -> String {
        format!("{}.md", self.title.replace(' ', "-"))
    }
}

/// Publish `note` according to `config`.
pub fn publish(
    config: &PublishConfig,
    note: &Path,
    input: &mut dyn FrontMatterInput,
    git_options: GitOptions,
) -> Result<PublishReport, PublishError> {
    let source = SourceNote::open(note)?;
    log!("publish"; "source {}", source.path.display());
    debug!("publish"; "title {}", source.title);

    for dir in [&config.posts_dir, &config.assets_dir] {
        fs::create_dir_all(dir).map_err(|e| PublishError::Io(dir.clone(), e))?;
    }

    let content = source.read()?;

    log!("publish"; "migrating images");
    let now = time::now();
    let migrator = ImageMigrator::new(
        &source.path,
        &config.assets_dir,
        &config.attachment_dirs,
        &config.image_extensions,
        time::file_stamp(&now),
    );
    let (content, images) = migrator.migrate(&content)?;
    match images.migrated.len() {
        0 => debug!("publish"; "no local images"),
        n => log!("publish"; "migrated {n} image(s)"),
    }

    let (content, front_matter) = frontmatter::ensure(
        &content,
        &source.title,
        &time::front_matter_stamp(&now),
        input,
    )?;
    if front_matter == FrontMatterChange::Unchanged {
        debug!("publish"; "front matter already complete");
    }

    let destination = config.posts_dir.join(source.output_name());
    fs::write(&destination, &content).map_err(|e| PublishError::Io(destination.clone(), e))?;
    log!("publish"; "wrote {}", destination.display());

    let title = final_title(&content).unwrap_or_else(|| source.title.clone());

    if git_options.enabled {
        git::publish(
            &config.root,
            &config.commit_message_for(&title),
            git_options.push,
        )?;
    } else {
        debug!("git"; "skipped");
    }

    Ok(PublishReport {
        source: source.path,
        destination,
        title,
        images,
        front_matter,
        committed: git_options.enabled,
        pushed: git_options.enabled && git_options.push,
    })
}

fn final_title(content: &str) -> Option<String> {
    let (meta, _) = frontmatter::parse(content);
    meta.and_then(|meta| frontmatter::get_str(&meta, "title"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Site {
        dir: TempDir,
        config: PublishConfig,
    }

    fn site() -> Site {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("site");
        let config = PublishConfig {
            posts_dir: root.join("pages/posts"),
            assets_dir: root.join("public/assets"),
            root,
            ..Default::default()
        };
        Site { dir, config }
    }

    const NO_GIT: GitOptions = GitOptions {
        enabled: false,
        push: false,
    };

    fn note(site: &Site, rel: &str, content: &str) -> PathBuf {
        let path = site.dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_source_checks() {
        let s = site();
        assert!(matches!(
            SourceNote::open(&s.dir.path().join("missing.md")),
            Err(PublishError::NotFound(_))
        ));
        assert!(matches!(
            SourceNote::open(s.dir.path()),
            Err(PublishError::NotAFile(_))
        ));
        let txt = note(&s, "vault/a.txt", "x");
        assert!(matches!(
            SourceNote::open(&txt),
            Err(PublishError::NotMarkdown { ext, .. }) if ext == "txt"
        ));

        let md = note(&s, "vault/My Post.MARKDOWN", "x");
        let source = SourceNote::open(&md).unwrap();
        assert_eq!(source.title, "My Post");
        assert_eq!(source.output_name(), "My-Post.md");
    }

    #[test]
    fn test_non_utf8_rejected() {
        let s = site();
        let path = s.dir.path().join("bad.md");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let mut input = Presets::default();
        assert!(matches!(
            publish(&s.config, &path, &mut input, NO_GIT),
            Err(PublishError::NotUtf8(_))
        ));
    }

    #[test]
    fn test_publish_without_git() {
        let s = site();
        let path = note(&s, "vault/notes/Hello World.md", "Intro\n\n![[pic.png]]\n");
        fs::create_dir_all(s.dir.path().join("vault/notes/attachments")).unwrap();
        fs::write(s.dir.path().join("vault/notes/attachments/pic.png"), b"png").unwrap();

        let mut input = Presets {
            tags: vec!["rust".into()],
            category: Some("notes".into()),
            excerpt: None,
        };
        let report = publish(&s.config, &path, &mut input, NO_GIT).unwrap();

        assert_eq!(report.destination, s.config.posts_dir.join("Hello-World.md"));
        assert_eq!(report.title, "Hello World");
        assert_eq!(report.front_matter, FrontMatterChange::Generated);
        assert_eq!(report.images.migrated.len(), 1);
        assert!(!report.committed);
        assert!(s.config.assets_dir.join("pic.png").is_file());

        let written = fs::read_to_string(&report.destination).unwrap();
        assert!(written.starts_with("---\n"));
        assert!(written.ends_with("Intro\n\n![pic](/assets/pic.png)\n"));
        assert_eq!(tags::tags_of(&written), ["rust"]);
    }

    #[test]
    fn test_title_from_front_matter() {
        let s = site();
        let path = note(
            &s,
            "vault/draft.md",
            "---\ntitle: Real Title\ndate: 2024-01-01\nupdated: 2024-01-02\ntags: [a]\n---\nbody",
        );
        let mut input = Presets::default();
        let report = publish(&s.config, &path, &mut input, NO_GIT).unwrap();

        assert_eq!(report.title, "Real Title");
        assert_eq!(report.front_matter, FrontMatterChange::Unchanged);
        assert_eq!(
            fs::read_to_string(report.destination).unwrap(),
            fs::read_to_string(&path).unwrap()
        );
    }

    #[test]
    fn test_git_options_from_config() {
        let mut config = PublishConfig::default();
        assert_eq!(
            GitOptions::from_config(&config),
            GitOptions {
                enabled: true,
                push: true
            }
        );
        config.git = false;
        assert_eq!(GitOptions::from_config(&config), NO_GIT);
    }
}
