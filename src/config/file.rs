//! Project configuration file data structures

use crate::banner::CommentStyle;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".bundle-banner.toml";

/// Banner template file looked up when nothing else is configured
pub const DEFAULT_BANNER_FILE_NAME: &str = "banner.txt";

/// `.bundle-banner.toml` structure
///
/// Every key is optional. Relative paths resolve against the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    /// Banner template file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Package metadata file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pkg: Option<PathBuf>,

    /// Inline banner template (takes precedence over `file`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Comment syntax the banner is wrapped in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_style: Option<CommentStyle>,
}
