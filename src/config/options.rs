//! User-supplied banner overrides (CLI flags or plugin arguments)

use super::file::ConfigFile;
use crate::banner::CommentStyle;
use std::path::PathBuf;

/// Optional overrides for banner and metadata sources
///
/// All fields are optional; defaults apply for anything left unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, clap::Args)]
pub struct BannerOptions {
    /// Banner template file [default: banner.txt next to package.json]
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Package metadata file [default: nearest package.json]
    #[arg(long, value_name = "PATH")]
    pub pkg: Option<PathBuf>,

    /// Inline banner template; takes precedence over --file
    #[arg(long, value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Comment syntax for the banner [default: from output extension, else block]
    #[arg(long, value_enum, value_name = "STYLE")]
    pub comment_style: Option<CommentStyle>,
}

impl BannerOptions {
    /// Fill unset options from the project config file
    ///
    /// The banner source (`file`/`template`) is taken as a unit: if these options set
    /// either one, the config file's banner source is ignored entirely, so an explicit
    /// `--file` is never shadowed by a `template` from the config file.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_banner::config::{BannerOptions, ConfigFile};
    /// use std::path::PathBuf;
    ///
    /// let config = ConfigFile {
    ///     template: Some("from config".to_string()),
    ///     pkg: Some(PathBuf::from("config-package.json")),
    ///     ..Default::default()
    /// };
    /// let cli = BannerOptions {
    ///     file: Some(PathBuf::from("alt-banner.txt")),
    ///     ..Default::default()
    /// };
    ///
    /// let merged = cli.layered_over(&config);
    /// assert_eq!(merged.file, Some(PathBuf::from("alt-banner.txt")));
    /// assert_eq!(merged.template, None);
    /// assert_eq!(merged.pkg, Some(PathBuf::from("config-package.json")));
    /// ```
    pub fn layered_over(self, config: &ConfigFile) -> Self {
        let (file, template) = if self.file.is_some() || self.template.is_some() {
            (self.file, self.template)
        } else {
            (config.file.clone(), config.template.clone())
        };

        Self {
            file,
            template,
            pkg: self.pkg.or_else(|| config.pkg.clone()),
            comment_style: self.comment_style.or(config.comment_style),
        }
    }
}
