//! Render command implementation
//!
//! Handles `bundle-banner render`, which prints the banner exactly as `apply` would
//! prepend it. Handy for previewing a template before wiring it into a build.

use anyhow::Result;
use std::path::Path;

use super::project_root_or_cwd;
use crate::banner::CommentStyle;
use crate::config::BannerOptions;
use crate::infra::RealFileSystem;
use crate::plugin::BannerPlugin;
use crate::timestamp::BuildTimestamp;

/// Print the rendered banner to stdout
///
/// # Examples
///
/// ```no_run
/// use bundle_banner::cmd::render::cmd_render;
/// use bundle_banner::config::BannerOptions;
///
/// let options = BannerOptions {
///     template: Some("This package was written by <%= pkg.author.name %>".to_string()),
///     ..Default::default()
/// };
/// cmd_render(&options, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_render(options: &BannerOptions, project_root: Option<&Path>) -> Result<()> {
    let project_root = project_root_or_cwd(project_root)?;
    let plugin = BannerPlugin::from_options_with(
        options,
        &project_root,
        &RealFileSystem,
        BuildTimestamp::from_env(),
        CommentStyle::default(),
    )?;

    if plugin.banner().is_empty() {
        log::warn!("banner is empty; nothing would be prepended");
    }
    print!("{}", plugin.banner());
    Ok(())
}
