//! `blogkit export`: print or write the generator JSON.

use super::ExportArgs;
use crate::{config::BlogConfig, export, log};
use anyhow::{Context, Result};
use std::fs;

pub fn export_config(config: &BlogConfig, args: &ExportArgs) -> Result<()> {
    let json = export::render(config, args.target, args.pretty)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create '{}'", parent.display()))?;
            }
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("export"; "wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
