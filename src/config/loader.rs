//! Configuration file loading and saving

use super::error::ConfigError;
use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::infra::{strip_bom, FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::Path;

/// Handles loading and saving `.bundle-banner.toml`
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from `.bundle-banner.toml` in the given directory
    ///
    /// A missing file yields the default (empty) config.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bundle_banner::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Configured template: {:?}", config.template);
    /// # Ok::<(), bundle_banner::config::ConfigError>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile, ConfigError> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(
        project_root: &Path,
        fs: &FS,
    ) -> Result<ConfigFile, ConfigError> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        // Read directly; NotFound means "use defaults"
        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ConfigFile::default());
            }
            Err(source) => {
                return Err(ConfigError::ConfigFileUnreadable {
                    path: config_path,
                    source,
                });
            }
        };

        let config: ConfigFile = toml_edit::de::from_str(strip_bom(&contents)).map_err(|e| {
            ConfigError::InvalidConfigFile {
                path: config_path.clone(),
                message: e.to_string().trim().to_string(),
            }
        })?;

        log::debug!("loaded {}", config_path.display());
        Ok(config)
    }

    /// Save config to `.bundle-banner.toml` in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bundle_banner::config::{ConfigFile, ConfigLoader};
    /// use std::path::Path;
    ///
    /// let config = ConfigFile {
    ///     pkg: Some("package.json".into()),
    ///     ..Default::default()
    /// };
    /// ConfigLoader::save(&config, Path::new("."))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn save(config: &ConfigFile, project_root: &Path) -> Result<()> {
        Self::save_with_fs(config, project_root, &RealFileSystem)
    }

    /// Save config with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(
        config: &ConfigFile,
        project_root: &Path,
        fs: &FS,
    ) -> Result<()> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents =
            toml_edit::ser::to_string_pretty(config).context("Failed to serialize config")?;

        fs.write(&config_path, contents)
            .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

        Ok(())
    }

    /// Check if config file exists in project
    pub fn exists(project_root: &Path) -> bool {
        project_root.join(CONFIG_FILE_NAME).exists()
    }
}
