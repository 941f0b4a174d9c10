//! `blogkit validate`: structural and asset checks in one report.

use super::ValidateArgs;
use crate::{config::BlogConfig, log};
use anyhow::{Result, bail};

/// Validate `config`, optionally checking referenced assets on disk.
pub fn validate_blog(config: &BlogConfig, args: &ValidateArgs) -> Result<()> {
    let mut diag = config.diagnostics();
    if args.assets {
        config.check_assets(&mut diag);
    } else {
        log!("validate"; "asset checks skipped");
    }

    if args.warn_only {
        diag.demote_errors();
    }
    diag.print_warnings();

    if diag.has_errors() {
        eprintln!("{diag}");
        bail!("validation failed");
    }

    log!(
        "validate";
        "{} ok ({} social link(s), {} page link(s))",
        config.config_path.display(),
        config.site.social.len(),
        config.theme_config.pages.len()
    );
    Ok(())
}
