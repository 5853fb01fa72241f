//! Command handlers for bundle-banner CLI
//!
//! Each submodule handles a specific CLI command.

pub mod apply;
pub mod check;
pub mod completions;
pub mod init;
pub mod render;

pub use apply::cmd_apply;
pub use check::cmd_check;
pub use completions::cmd_completions;
pub use init::cmd_init;
pub use render::cmd_render;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Path argument meaning stdin (as input) or stdout (as output)
pub const STDIO_PATH: &str = "-";

/// Use the given project root, or the current directory
pub(crate) fn project_root_or_cwd(project_root: Option<&Path>) -> Result<PathBuf> {
    match project_root {
        Some(root) => Ok(root.to_path_buf()),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}

pub(crate) fn is_stdio(path: &Path) -> bool {
    path == Path::new(STDIO_PATH)
}
