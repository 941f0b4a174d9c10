//! Git steps for publishing.
//!
//! The repository is located with `gix`; staging, committing and pushing go
//! through the `git` binary so the user's hooks, signing setup and
//! credential helpers apply.

use crate::{debug, exec, log, logger};
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use super::exec::{Cmd, GIT_FILTER};

/// One step of the publish sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitStep {
    Add,
    Commit,
    Push,
}

impl GitStep {
    /// Message shown when the step fails.
    pub const fn failure_hint(self) -> &'static str {
        match self {
            Self::Add => "git add failed",
            Self::Commit => "git commit failed (maybe there is nothing to commit)",
            Self::Push => "git push failed (check the network and the remote configuration)",
        }
    }
}

impl std::fmt::Display for GitStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Add => "add",
            Self::Commit => "commit",
            Self::Push => "push",
        })
    }
}

/// Locate the `git` executable on `PATH`.
pub fn git_binary() -> Result<PathBuf> {
    which::which("git").context("git not found, make sure it is installed and on PATH")
}

/// Working tree root of the repository containing `dir`.
pub fn work_dir(dir: &Path) -> Result<PathBuf> {
    let repo = gix::discover(dir)
        .with_context(|| format!("{} is not inside a git repository", dir.display()))?;
    match repo.workdir() {
        Some(root) => Ok(root.to_path_buf()),
        None => bail!("repository at {} is bare", repo.path().display()),
    }
}

/// A failed git step.
#[derive(Debug, thiserror::Error)]
#[error("{}\n{detail}", step.failure_hint())]
pub struct GitError {
    pub step: GitStep,
    pub detail: String,
}

/// Stage everything, commit with `message`, then optionally push.
///
/// `root` must be inside a work tree; nothing runs otherwise.
pub fn publish(root: &Path, message: &str, push: bool) -> Result<(), GitError> {
    let repo_root = work_dir(root).map_err(|e| GitError {
        step: GitStep::Add,
        detail: format!("{e:#}\nhint: not a git repository, run `git init` or pass --no-git"),
    })?;
    debug!("git"; "repository at {}", repo_root.display());

    if message.trim().is_empty() {
        return Err(GitError {
            step: GitStep::Commit,
            detail: "commit message is empty".into(),
        });
    }
    let git = git_binary().map_err(|e| GitError {
        step: GitStep::Add,
        detail: format!("{e:#}"),
    })?;

    run_step(GitStep::Add, "git add .", || exec!(root; &git; "add", "."))?;
    run_step(GitStep::Commit, &format!("git commit -m \"{message}\""), || {
        Cmd::new(&git)
            .args(["commit", "-m", message])
            .cwd(root)
            .filter(&GIT_FILTER)
            .run()
    })?;

    if push {
        run_step(GitStep::Push, "git push", || {
            Cmd::new(&git)
                .arg("push")
                .cwd(root)
                .pty(true)
                .filter(&GIT_FILTER)
                .run()
        })?;
    } else {
        debug!("git"; "push skipped");
    }
    Ok(())
}

fn run_step<T>(step: GitStep, label: &str, f: impl FnOnce() -> Result<T>) -> Result<(), GitError> {
    log!("git"; "{label}");
    match f() {
        Ok(_) => {
            logger::step_ok(&format!("{step} done"));
            Ok(())
        }
        Err(e) => {
            logger::step_fail(step.failure_hint());
            Err(GitError {
                step,
                detail: format!("{e:#}"),
            })
        }
    }
}
