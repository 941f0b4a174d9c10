//! blogkit - companion CLI for a Valaxy blog.

mod cli;
mod config;
mod embed;
mod export;
mod logger;
mod post;
mod publish;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, init::InitMode};
use config::BlogConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name, dry } => init(&cli, name.as_deref(), *dry),
        Commands::Validate { args } => {
            let config = BlogConfig::load_unchecked(&cli)?;
            cli::validate::validate_blog(&config, args)
        }
        Commands::Export { args } => cli::export::export_config(&BlogConfig::load(&cli)?, args),
        Commands::Post { action } => cli::post::run_post(&BlogConfig::load(&cli)?, action),
        Commands::Publish { args } => cli::publish::publish_note(&BlogConfig::load(&cli)?, args),
    }
}

fn init(cli: &Cli, name: Option<&std::path::Path>, dry: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let (root, mode) = match name {
        Some(name) => (cwd.join(name), InitMode::NewDir),
        None => (cwd, InitMode::CurrentDir),
    };
    let config_name = cli
        .config
        .file_name()
        .map_or_else(|| config::CONFIG_FILE.into(), |n| n.to_string_lossy());
    cli::init::new_blog(&root, &config_name, mode, dry)
}
