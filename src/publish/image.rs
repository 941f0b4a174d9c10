//! Image migration from an Obsidian vault into the generator's assets.
//!
//! Handles standard markdown images `![alt](path)` and wiki embeds
//! `![[file.png]]` / `![[file.png|alt]]`. Found files are copied into the
//! assets directory and the reference is rewritten to `/assets/<name>`.

use crate::{debug, logger};
use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

/// URL prefix the assets directory is served under.
pub const ASSETS_URL: &str = "/assets/";

/// References under these prefixes already point into the site.
const SITE_PREFIXES: [&str; 2] = [ASSETS_URL, "/images/"];

/// How many ancestor directories are searched for attachment folders.
const ANCESTOR_DEPTH: usize = 3;

static MARKDOWN_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("markdown image pattern is a valid regex")
});

static WIKI_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[\[([^\]|]+?)(\|[^\]]*)?\]\]").expect("wiki image pattern is a valid regex")
});

/// A copied image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigratedImage {
    pub source: PathBuf,
    /// File name inside the assets directory.
    pub dest_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub migrated: Vec<MigratedImage>,
    /// References that could not be resolved and were left as-is.
    pub missing: Vec<String>,
}

/// Resolves and copies the images of one note.
pub struct ImageMigrator<'a> {
    note_dir: PathBuf,
    assets_dir: &'a Path,
    attachment_dirs: &'a [String],
    image_extensions: &'a [String],
    /// Suffix for renamed copies, `YYYYmmddHHMMSS`.
    stamp: String,
}

impl<'a> ImageMigrator<'a> {
    pub fn new(
        note: &Path,
        assets_dir: &'a Path,
        attachment_dirs: &'a [String],
        image_extensions: &'a [String],
        stamp: String,
    ) -> Self {
        Self {
            note_dir: note.parent().map(Path::to_path_buf).unwrap_or_default(),
            assets_dir,
            attachment_dirs,
            image_extensions,
            stamp,
        }
    }

    /// Places a reference is looked for, in order.
    pub fn candidates(&self, reference: &str) -> Vec<PathBuf> {
        let dir = &self.note_dir;
        let name = Path::new(reference)
            .file_name()
            .map_or_else(|| PathBuf::from(reference), PathBuf::from);

        let mut out = vec![dir.join(reference), dir.join(&name)];
        out.extend(self.attachment_dirs.iter().map(|a| dir.join(a).join(&name)));

        let parent = dir.parent().unwrap_or(dir);
        out.extend(self.attachment_dirs.iter().map(|a| parent.join(a).join(&name)));

        let mut current = dir.as_path();
        for _ in 0..ANCESTOR_DEPTH {
            current = current.parent().unwrap_or(current);
            out.extend(self.attachment_dirs.iter().map(|a| current.join(a).join(&name)));
        }
        out
    }

    pub fn find(&self, reference: &str) -> Option<PathBuf> {
        self.candidates(reference).into_iter().find(|p| p.is_file())
    }

    /// Rewrite every local image reference in `content`.
    pub fn migrate(&self, content: &str) -> Result<(String, MigrationReport)> {
        let mut report = MigrationReport::default();

        let content = replace_all(&MARKDOWN_IMAGE_RE, content, |caps| {
            let raw = &caps[2];
            if raw.starts_with("http://") || raw.starts_with("https://") {
                return Ok(None);
            }
            let reference = raw.trim();
            if SITE_PREFIXES.iter().any(|p| reference.starts_with(p)) {
                return Ok(None);
            }
            self.migrate_one(reference, &caps[1], &mut report)
        })?;

        let content = replace_all(&WIKI_IMAGE_RE, &content, |caps| {
            let reference = caps[1].trim();
            if !self.is_image(reference) {
                return Ok(None);
            }
            let alt = match caps.get(2) {
                Some(alt) => alt.as_str()[1..].trim().to_string(),
                None => Path::new(reference)
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            };
            self.migrate_one(reference, &alt, &mut report)
        })?;

        Ok((content, report))
    }

    fn is_image(&self, reference: &str) -> bool {
        Path::new(reference)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.image_extensions.iter().any(|e| *e == ext))
    }

    fn migrate_one(
        &self,
        reference: &str,
        alt: &str,
        report: &mut MigrationReport,
    ) -> Result<Option<String>> {
        let Some(source) = self.find(reference) else {
            logger::step_warn(&format!("image not found: {reference}, reference kept"));
            report.missing.push(reference.to_string());
            return Ok(None);
        };

        let dest = self.destination(&source)?;
        fs::copy(&source, &dest).with_context(|| {
            format!("Failed to copy {} to {}", source.display(), dest.display())
        })?;

        let dest_name = dest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        logger::step_ok(&format!(
            "image {} -> {ASSETS_URL}{dest_name}",
            source.file_name().unwrap_or_default().to_string_lossy()
        ));
        debug!("publish"; "copied {}", source.display());

        let markdown = format!("![{alt}]({ASSETS_URL}{dest_name})");
        report.migrated.push(MigratedImage { source, dest_name });
        Ok(Some(markdown))
    }

    /// Target path in the assets directory.
    ///
    /// A same-named file of a different size gets a timestamp suffix; one of
    /// the same size is overwritten.
    fn destination(&self, source: &Path) -> Result<PathBuf> {
        let name = source.file_name().unwrap_or_default();
        let dest = self.assets_dir.join(name);

        let Ok(existing) = fs::metadata(&dest) else {
            return Ok(dest);
        };
        let size = fs::metadata(source)
            .with_context(|| format!("Failed to read {}", source.display()))?
            .len();
        if existing.len() == size {
            return Ok(dest);
        }

        let stem = source.file_stem().unwrap_or_default().to_string_lossy();
        let ext = source
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        Ok(self.assets_dir.join(format!("{stem}_{}{ext}", self.stamp)))
    }
}

/// `Regex::replace_all` with a fallible replacer. `Ok(None)` keeps the match.
fn replace_all(
    re: &Regex,
    text: &str,
    mut replace: impl FnMut(&Captures<'_>) -> Result<Option<String>>,
) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&text[last..whole.start()]);
        match replace(&caps)? {
            Some(replacement) => out.push_str(&replacement),
            None => out.push_str(whole.as_str()),
        }
        last = whole.end();
    }
    out.push_str(&text[last..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PublishConfig;
    use tempfile::TempDir;

    const STAMP: &str = "20250307090501";

    struct Vault {
        _dir: TempDir,
        root: PathBuf,
        note: PathBuf,
        assets: PathBuf,
        config: PublishConfig,
    }

    fn vault() -> Vault {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_path_buf();
        let note = root.join("vault/notes/post.md");
        fs::create_dir_all(note.parent().unwrap()).unwrap();
        let assets = root.join("site/public/assets");
        fs::create_dir_all(&assets).unwrap();
        Vault {
            _dir: dir,
            root,
            note,
            assets,
            config: PublishConfig::default(),
        }
    }

    impl Vault {
        fn migrator(&self) -> ImageMigrator<'_> {
            ImageMigrator::new(
                &self.note,
                &self.assets,
                &self.config.attachment_dirs,
                &self.config.image_extensions,
                STAMP.to_string(),
            )
        }

        fn put(&self, rel: &str, bytes: &[u8]) {
            let path = self.root.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, bytes).unwrap();
        }
    }

    #[test]
    fn test_candidate_order() {
        let v = vault();
        let m = v.migrator();
        let c = m.candidates("sub/a.png");
        let notes = v.root.join("vault/notes");

        assert_eq!(c[0], notes.join("sub/a.png"));
        assert_eq!(c[1], notes.join("a.png"));
        assert_eq!(c[2], notes.join("attachments/a.png"));
        let n = v.config.attachment_dirs.len();
        assert_eq!(c[2 + n], v.root.join("vault/attachments/a.png"));
        assert_eq!(c.len(), 2 + n * (2 + ANCESTOR_DEPTH));
    }

    #[test]
    fn test_migrate_standard_and_wiki() {
        let v = vault();
        v.put("vault/notes/local.png", b"one");
        v.put("vault/attachments/Pasted image.png", b"two");
        v.put("vault/notes/doc.pdf", b"pdf");

        let content = "\
![cat](local.png)
![remote](https://example.com/x.png)
![old](/images/keep.png)
![[Pasted image.png]]
![[Pasted image.png| Diagram ]]
![[doc.pdf]]
![gone](missing.png)
";
        let (out, report) = v.migrator().migrate(content).unwrap();

        assert_eq!(
            out,
            "\
![cat](/assets/local.png)
![remote](https://example.com/x.png)
![old](/images/keep.png)
![Pasted image](/assets/Pasted image.png)
![Diagram](/assets/Pasted image.png)
![[doc.pdf]]
![gone](missing.png)
"
        );
        assert_eq!(report.migrated.len(), 3);
        assert_eq!(report.missing, ["missing.png"]);
        assert_eq!(fs::read(v.assets.join("local.png")).unwrap(), b"one");
    }

    #[test]
    fn test_name_collision_gets_timestamp() {
        let v = vault();
        v.put("vault/notes/a.png", b"new content");
        fs::write(v.assets.join("a.png"), b"old").unwrap();
        v.put("vault/notes/b.png", b"same");
        fs::write(v.assets.join("b.png"), b"SAME").unwrap();

        let (out, _) = v.migrator().migrate("![](a.png) ![](b.png)").unwrap();

        assert_eq!(out, format!("![](/assets/a_{STAMP}.png) ![](/assets/b.png)"));
        assert_eq!(fs::read(v.assets.join("a.png")).unwrap(), b"old");
        assert_eq!(fs::read(v.assets.join("b.png")).unwrap(), b"same");
    }

    #[test]
    fn test_wiki_extension_case_insensitive() {
        let v = vault();
        v.put("vault/notes/images/Photo.JPG", b"jpg");
        let (out, report) = v.migrator().migrate("![[Photo.JPG|]]").unwrap();
        assert_eq!(out, "![](/assets/Photo.JPG)");
        assert_eq!(report.migrated[0].dest_name, "Photo.JPG");
    }

    #[test]
    fn test_no_images() {
        let v = vault();
        let (out, report) = v.migrator().migrate("plain text").unwrap();
        assert_eq!(out, "plain text");
        assert_eq!(report, MigrationReport::default());
    }
}
