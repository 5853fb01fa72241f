//! Resolved banner and metadata sources

use super::error::ConfigError;
use crate::error::BannerError;
use crate::infra::{strip_bom, FileSystem};
use crate::metadata::PackageMetadata;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the banner template text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannerSource {
    /// Template string given directly
    InlineTemplate(String),
    /// File named by the user
    ExplicitFile(PathBuf),
    /// Conventional `banner.txt`
    DefaultFile(PathBuf),
    /// No default banner file exists; renders an empty banner
    Empty {
        /// Default location that was checked
        searched: PathBuf,
    },
}

impl BannerSource {
    /// Read the template text, without any leading byte order mark
    pub fn read<FS: FileSystem>(&self, fs: &FS) -> Result<String, ConfigError> {
        match self {
            Self::InlineTemplate(template) => Ok(template.clone()),
            Self::ExplicitFile(path) | Self::DefaultFile(path) => fs
                .read_to_string(path)
                .map(|text| strip_bom(&text).to_string())
                .map_err(|source| ConfigError::BannerFileUnreadable {
                    path: path.clone(),
                    source,
                }),
            Self::Empty { .. } => Ok(String::new()),
        }
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ExplicitFile(path) | Self::DefaultFile(path) => Some(path),
            Self::InlineTemplate(_) | Self::Empty { .. } => None,
        }
    }
}

impl fmt::Display for BannerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InlineTemplate(_) => write!(f, "inline template"),
            Self::ExplicitFile(path) => write!(f, "{}", path.display()),
            Self::DefaultFile(path) => write!(f, "{} (default)", path.display()),
            Self::Empty { searched } => write!(f, "none ({} not found)", searched.display()),
        }
    }
}

/// Where package metadata comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSource {
    /// File named by the user
    ExplicitFile(PathBuf),
    /// Nearest `package.json`
    DefaultFile(PathBuf),
    /// No package file found; templates see an empty `pkg`
    Empty,
}

impl PackageSource {
    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ExplicitFile(path) | Self::DefaultFile(path) => Some(path),
            Self::Empty => None,
        }
    }

    /// Read and parse the metadata
    pub fn read<FS: FileSystem>(&self, fs: &FS) -> Result<PackageMetadata, BannerError> {
        let Some(path) = self.path() else {
            return Ok(PackageMetadata::empty());
        };

        let contents =
            fs.read_to_string(path)
                .map_err(|source| ConfigError::PackageFileUnreadable {
                    path: path.to_path_buf(),
                    source,
                })?;

        Ok(PackageMetadata::parse(&contents, path)?)
    }
}

impl fmt::Display for PackageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitFile(path) => write!(f, "{}", path.display()),
            Self::DefaultFile(path) => write!(f, "{} (default)", path.display()),
            Self::Empty => write!(f, "none"),
        }
    }
}
