//! Init command implementation
//!
//! Handles the `bundle-banner init` command which writes a starter `banner.txt`
//! (and optionally a `.bundle-banner.toml`) into the project root.

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use super::project_root_or_cwd;
use crate::banner::CommentStyle;
use crate::config::{self, ConfigFile, ConfigLoader, DEFAULT_BANNER_FILE_NAME};
use crate::fmt::{icon, CHECKMARK, SPARKLES, WARNING};
use crate::infra::write_atomic;

/// Starter banner showing the available template variables
pub const STARTER_BANNER: &str = r#"<%= pkg.name || "my-package" %> v<%= pkg.version || "0.0.0" %>
<%= pkg.description %>

(c) <%= now.year %> <%= pkg.author.name || pkg.author %>
License: <%= pkg.license || "UNLICENSED" %>
"#;

/// Write a starter banner (and optionally a config file)
///
/// Existing files are left alone unless `force` is set.
///
/// # Examples
///
/// ```no_run
/// use bundle_banner::cmd::init::cmd_init;
///
/// // banner.txt only, in the current directory
/// cmd_init(None, false, false)?;
///
/// // Also write .bundle-banner.toml, replacing existing files
/// cmd_init(None, true, true)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init(project_root: Option<&Path>, force: bool, with_config: bool) -> Result<()> {
    let project_root = project_root_or_cwd(project_root)?;

    println!(
        "{} {} Initializing banner",
        icon(SPARKLES),
        style("bundle-banner init").bold()
    );
    println!();

    let banner_path = project_root.join(DEFAULT_BANNER_FILE_NAME);
    if banner_path.exists() && !force {
        println!(
            "{} Banner already exists: {}",
            style(icon(WARNING)).yellow(),
            style(DEFAULT_BANNER_FILE_NAME).cyan()
        );
        println!("   Pass --force to overwrite it.");
    } else {
        write_atomic(&banner_path, STARTER_BANNER.as_bytes())
            .with_context(|| format!("Failed to write {}", banner_path.display()))?;
        println!(
            "{} Created {}",
            icon(CHECKMARK),
            style(DEFAULT_BANNER_FILE_NAME).cyan().bold()
        );
    }

    if with_config {
        if ConfigLoader::exists(&project_root) && !force {
            println!(
                "{} Config file already exists: {}",
                style(icon(WARNING)).yellow(),
                style(config::CONFIG_FILE_NAME).cyan()
            );
        } else {
            let config = ConfigFile {
                file: Some(DEFAULT_BANNER_FILE_NAME.into()),
                comment_style: Some(CommentStyle::Block),
                ..Default::default()
            };
            ConfigLoader::save(&config, &project_root)?;
            println!(
                "{} Created {}",
                icon(CHECKMARK),
                style(config::CONFIG_FILE_NAME).cyan().bold()
            );
        }
    }

    println!();
    println!("{}  Next Steps:", style("💡").bold());
    println!("   1. Edit {} to taste", DEFAULT_BANNER_FILE_NAME);
    println!(
        "   2. Run {} to preview it",
        style("bundle-banner render").cyan()
    );
    println!(
        "   3. Run {} to prepend it",
        style("bundle-banner apply <BUNDLE>").cyan()
    );

    Ok(())
}
