//! Banner configuration
//!
//! This module provides:
//! - [`BannerOptions`]: overrides from CLI flags or plugin arguments
//! - [`ConfigFile`]: the optional `.bundle-banner.toml` project file
//! - [`ConfigResolver`]: precedence rules producing one [`BannerConfig`] per build

pub mod error;
pub mod file;
pub mod loader;
pub mod options;
pub mod resolver;
pub mod source;

pub use error::ConfigError;
pub use file::{ConfigFile, CONFIG_FILE_NAME, DEFAULT_BANNER_FILE_NAME};
pub use loader::ConfigLoader;
pub use options::BannerOptions;
pub use resolver::{BannerConfig, ConfigResolver};
pub use source::{BannerSource, PackageSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_constants() {
        assert_eq!(CONFIG_FILE_NAME, ".bundle-banner.toml");
        assert_eq!(DEFAULT_BANNER_FILE_NAME, "banner.txt");
    }
}
