//! Configuration errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving where banner text and metadata come from
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Explicit banner file does not exist
    #[error("banner file not found: {path}")]
    BannerFileNotFound {
        /// Path as resolved against the project root
        path: PathBuf,
    },

    /// Banner file exists but could not be read
    #[error("failed to read banner file {path}")]
    BannerFileUnreadable {
        /// Banner file path
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Explicit package file does not exist
    #[error("package file not found: {path}")]
    PackageFileNotFound {
        /// Path as resolved against the project root
        path: PathBuf,
    },

    /// Package file exists but could not be read
    #[error("failed to read package file {path}")]
    PackageFileUnreadable {
        /// Package file path
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Project config file exists but could not be read
    #[error("failed to read config file {path}")]
    ConfigFileUnreadable {
        /// Config file path
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Project config file is not valid
    #[error("invalid config file {path}: {message}")]
    InvalidConfigFile {
        /// Config file path
        path: PathBuf,
        /// Parser message
        message: String,
    },
}

impl ConfigError {
    /// Path the error is about
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::BannerFileNotFound { path }
            | Self::BannerFileUnreadable { path, .. }
            | Self::PackageFileNotFound { path }
            | Self::PackageFileUnreadable { path, .. }
            | Self::ConfigFileUnreadable { path, .. }
            | Self::InvalidConfigFile { path, .. } => path,
        }
    }
}
