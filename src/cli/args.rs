//! Command-line interface definitions.

use crate::export::ExportTarget;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Companion CLI for a Valaxy blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: blog.toml, searched upward)
    #[arg(short = 'C', long, global = true, default_value = "blog.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new blog workspace with a default blog.toml
    #[command(visible_alias = "i")]
    Init {
        /// Directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Validate blog.toml and referenced assets
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },

    /// Export the site config as JSON for the generator
    #[command(visible_alias = "e")]
    Export {
        #[command(flatten)]
        args: ExportArgs,
    },

    /// Manage short posts in the JSON store
    #[command(visible_alias = "p")]
    Post {
        #[command(subcommand)]
        action: PostAction,
    },

    /// Publish an Obsidian note to the blog
    Publish {
        #[command(flatten)]
        args: PublishArgs,
    },
}

/// Validate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Check that avatar, favicon and background images exist
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false, default_value = "true")]
    pub assets: bool,

    /// Treat validation failures as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

/// Export command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    /// Which document to produce
    #[arg(short, long, value_enum, default_value_t = ExportTarget::Valaxy)]
    pub target: ExportTarget,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Post store actions.
#[derive(Subcommand, Debug, Clone)]
pub enum PostAction {
    /// Add a post (prompts for missing fields)
    Add {
        #[command(flatten)]
        args: PostAddArgs,
    },

    /// Delete a post by its list index
    Delete {
        /// Index shown by `post list` (prompts when omitted)
        index: Option<usize>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List posts, newest first
    List,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct PostAddArgs {
    /// Post title
    #[arg(short, long)]
    pub title: Option<String>,

    /// One-line introduction shown in the list
    #[arg(short, long)]
    pub intro: Option<String>,

    /// Read the body from a file instead of the terminal
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub content_file: Option<PathBuf>,

    /// Image file name under images/ (empty for none)
    #[arg(short = 'm', long)]
    pub image: Option<String>,
}

/// Publish command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PublishArgs {
    /// Markdown note to publish
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub note: PathBuf,

    /// Tags (repeatable). Skips the interactive tag prompt
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Category for a newly generated front matter
    #[arg(short, long)]
    pub category: Option<String>,

    /// Excerpt for a newly generated front matter
    #[arg(short, long)]
    pub excerpt: Option<String>,

    /// Never prompt; missing answers are left empty
    #[arg(short = 'y', long)]
    pub non_interactive: bool,

    /// Write the post without running git
    #[arg(long)]
    pub no_git: bool,

    /// Commit but do not push
    #[arg(long)]
    pub no_push: bool,
}
