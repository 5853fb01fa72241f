//! Bundler plugin surface
//!
//! A host bundler drives the plugin in two steps: construct it once per build (which
//! resolves config, reads the banner and metadata, and renders), then hand it the
//! assembled output stream through [`OutputHook::on_output`] before write-out.
//!
//! # Examples
//!
//! ```no_run
//! use bundle_banner::bundle::BundleStream;
//! use bundle_banner::plugin::{run_hooks, BannerPlugin, OutputHook, PluginArgs};
//! use std::path::Path;
//!
//! // Host received `--plugin [ bundle-banner --file alt-banner.txt ]`
//! let args = PluginArgs::from_host_args(["[", "bundle-banner", "--file", "alt-banner.txt", "]"])?;
//! let plugin = BannerPlugin::from_options(&args.options, Path::new("."))?;
//!
//! let output = run_hooks(BundleStream::from("(function(){})();\n"), &[&plugin])?;
//! std::fs::write("dist/bundle.js", output.finalize())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::banner::{BannerRenderer, CommentStyle, RenderedBanner};
use crate::bundle::{splice, BundleStream};
use crate::config::{BannerConfig, BannerOptions, ConfigLoader, ConfigResolver};
use crate::error::BannerError;
use crate::infra::{FileSystem, RealFileSystem};
use crate::timestamp::BuildTimestamp;
use clap::Parser;
use std::path::Path;

/// Name the plugin registers under
pub const PLUGIN_NAME: &str = "bundle-banner";

/// Callback attached to a bundler's output pipeline
pub trait OutputHook {
    /// Name used in logs and host plugin lists
    fn name(&self) -> &str;

    /// Transform the assembled output before it is written
    fn on_output(&self, stream: BundleStream) -> Result<BundleStream, BannerError>;
}

/// Apply hooks in registration order
///
/// Stops at the first failure; the caller writes nothing in that case.
pub fn run_hooks(
    stream: BundleStream,
    hooks: &[&dyn OutputHook],
) -> Result<BundleStream, BannerError> {
    hooks.iter().try_fold(stream, |stream, hook| {
        log::debug!("running output hook {}", hook.name());
        hook.on_output(stream)
    })
}

/// Plugin arguments as a host bundler hands them over
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = PLUGIN_NAME, no_binary_name = true)]
pub struct PluginArgs {
    /// Banner overrides
    #[command(flatten)]
    pub options: BannerOptions,
}

impl PluginArgs {
    /// Parse a host sub-argument list
    ///
    /// Accepts the bracketed subarg form (`[ bundle-banner --file x ]`), the same
    /// without brackets, or bare flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_banner::plugin::PluginArgs;
    ///
    /// let args = PluginArgs::from_host_args(["[", "bundle-banner", "--pkg", "alt-package.json", "]"]).unwrap();
    /// assert_eq!(args.options.pkg.unwrap().to_str(), Some("alt-package.json"));
    ///
    /// assert!(PluginArgs::from_host_args(["--bogus"]).is_err());
    /// ```
    pub fn from_host_args<I, T>(args: I) -> Result<Self, BannerError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut args: Vec<String> = args.into_iter().map(Into::into).collect();

        if args.first().map(String::as_str) == Some("[") {
            if args.last().map(String::as_str) != Some("]") || args.len() < 2 {
                return Err(BannerError::PluginArgs(
                    "unterminated `[` in plugin arguments".to_string(),
                ));
            }
            args.pop();
            args.remove(0);
        }
        if args.first().map(String::as_str) == Some(PLUGIN_NAME) {
            args.remove(0);
        }

        Self::try_parse_from(args).map_err(|e| {
            let message = e.to_string();
            let first_line = message.lines().next().unwrap_or_default();
            BannerError::PluginArgs(first_line.trim_start_matches("error: ").to_string())
        })
    }
}

/// Banner plugin: renders once per build, prepends on output
#[derive(Debug, Clone)]
pub struct BannerPlugin {
    config: BannerConfig,
    banner: RenderedBanner,
}

impl BannerPlugin {
    /// Resolve, load and render using the real filesystem and build clock
    pub fn from_options(options: &BannerOptions, project_root: &Path) -> Result<Self, BannerError> {
        Self::from_options_with(
            options,
            project_root,
            &RealFileSystem,
            BuildTimestamp::from_env(),
            CommentStyle::default(),
        )
    }

    /// Resolve, load and render with explicit collaborators
    ///
    /// `fallback_style` applies when neither the options nor the project config file
    /// name a comment style.
    pub fn from_options_with<FS: FileSystem>(
        options: &BannerOptions,
        project_root: &Path,
        fs: &FS,
        timestamp: BuildTimestamp,
        fallback_style: CommentStyle,
    ) -> Result<Self, BannerError> {
        let project_config = ConfigLoader::load_with_fs(project_root, fs)?;
        let options = options.clone().layered_over(&project_config);

        let config = ConfigResolver::new(project_root, fs).resolve(&options)?;
        let banner_text = config.banner_source.read(fs)?;
        let metadata = config.package_source.read(fs)?;

        let style = options.comment_style.unwrap_or(fallback_style);
        let banner = BannerRenderer::new(style, timestamp).render(&banner_text, &metadata)?;

        log::info!(
            "banner from {} rendered to {} line(s)",
            config.banner_source,
            banner.line_count()
        );
        Ok(Self { config, banner })
    }

    /// The rendered banner
    pub fn banner(&self) -> &RenderedBanner {
        &self.banner
    }

    /// The resolved sources
    pub fn config(&self) -> &BannerConfig {
        &self.config
    }
}

impl OutputHook for BannerPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn on_output(&self, stream: BundleStream) -> Result<BundleStream, BannerError> {
        Ok(splice(stream, &self.banner))
    }
}
