//! Banner configuration resolution
//!
//! Precedence, highest first:
//! - banner text: inline template, explicit banner file, default `banner.txt`
//! - metadata: explicit package file, nearest `package.json`
//!
//! The two chains are independent: an explicit package file never moves where the
//! default `banner.txt` is looked up. It sits next to the nearest `package.json`, or in
//! the project root when there is none.
//!
//! Explicit paths that do not exist are errors. Only missing *defaults* fall back
//! (to an empty banner / empty metadata).

use super::error::ConfigError;
use super::file::DEFAULT_BANNER_FILE_NAME;
use super::options::BannerOptions;
use super::source::{BannerSource, PackageSource};
use crate::infra::FileSystem;
use crate::metadata::find_package_file;
use std::path::{Path, PathBuf};

/// The single banner source and metadata source active for one build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerConfig {
    /// Where banner template text comes from
    pub banner_source: BannerSource,
    /// Where package metadata comes from
    pub package_source: PackageSource,
}

/// Turns user overrides plus project defaults into a [`BannerConfig`]
///
/// # Examples
///
/// ```no_run
/// use bundle_banner::config::{BannerOptions, BannerSource, ConfigResolver};
/// use bundle_banner::infra::RealFileSystem;
/// use std::path::Path;
///
/// let options = BannerOptions {
///     template: Some("<%= pkg.name %>".to_string()),
///     ..Default::default()
/// };
/// let config = ConfigResolver::new(Path::new("."), &RealFileSystem).resolve(&options)?;
/// assert!(matches!(config.banner_source, BannerSource::InlineTemplate(_)));
/// # Ok::<(), bundle_banner::config::ConfigError>(())
/// ```
pub struct ConfigResolver<'a, FS: FileSystem> {
    project_root: &'a Path,
    fs: &'a FS,
}

impl<'a, FS: FileSystem> ConfigResolver<'a, FS> {
    /// Create a resolver rooted at `project_root`
    pub fn new(project_root: &'a Path, fs: &'a FS) -> Self {
        Self { project_root, fs }
    }

    /// Resolve sources, validating that explicit paths exist
    pub fn resolve(&self, options: &BannerOptions) -> Result<BannerConfig, ConfigError> {
        let package_source = self.resolve_package(options.pkg.as_deref())?;
        let banner_source = self.resolve_banner(options)?;

        log::debug!("banner source: {}", banner_source);
        log::debug!("package source: {}", package_source);

        Ok(BannerConfig {
            banner_source,
            package_source,
        })
    }

    fn resolve_package(&self, explicit: Option<&Path>) -> Result<PackageSource, ConfigError> {
        if let Some(path) = explicit {
            let path = self.absolute(path);
            if !self.fs.is_file(&path) {
                return Err(ConfigError::PackageFileNotFound { path });
            }
            return Ok(PackageSource::ExplicitFile(path));
        }

        Ok(find_package_file(self.project_root, self.fs)
            .map_or(PackageSource::Empty, PackageSource::DefaultFile))
    }

    fn resolve_banner(&self, options: &BannerOptions) -> Result<BannerSource, ConfigError> {
        // Validated even when a template overrides it: a bad explicit path is always an error
        let explicit_file = match &options.file {
            Some(path) => {
                let path = self.absolute(path);
                if !self.fs.is_file(&path) {
                    return Err(ConfigError::BannerFileNotFound { path });
                }
                Some(path)
            }
            None => None,
        };

        if let Some(template) = &options.template {
            return Ok(BannerSource::InlineTemplate(template.clone()));
        }
        if let Some(path) = explicit_file {
            return Ok(BannerSource::ExplicitFile(path));
        }

        let default_package = find_package_file(self.project_root, self.fs);
        let default_dir = default_package
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(self.project_root);
        let default_file = default_dir.join(DEFAULT_BANNER_FILE_NAME);

        if self.fs.is_file(&default_file) {
            Ok(BannerSource::DefaultFile(default_file))
        } else {
            log::warn!(
                "no banner configured and {} does not exist; output will be unchanged",
                default_file.display()
            );
            Ok(BannerSource::Empty {
                searched: default_file,
            })
        }
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        self.project_root.join(path)
    }
}
