//! Top-level error type with contextual suggestions
//!
//! Provides structured errors that include:
//! - A single descriptive message naming the offending path or template
//! - A suggested fix
//! - Exit codes following sysexits.h conventions
//!
//! # Examples
//!
//! ```no_run
//! use bundle_banner::config::BannerOptions;
//! use bundle_banner::plugin::BannerPlugin;
//! use std::path::Path;
//!
//! match BannerPlugin::from_options(&BannerOptions::default(), Path::new(".")) {
//!     Ok(plugin) => print!("{}", plugin.banner()),
//!     Err(e) => {
//!         eprintln!("banner failed: {}", e);
//!         std::process::exit(e.exit_code());
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::metadata::MetadataError;
use crate::template::TemplateError;

/// Errors surfaced to the host build
#[derive(Error, Debug)]
pub enum BannerError {
    /// Banner or metadata source could not be resolved or read
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Banner template is malformed or references an unknown variable
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Package metadata is not a JSON object
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// Arguments handed over by the host bundler did not parse
    #[error("invalid plugin arguments: {0}")]
    PluginArgs(String),

    /// A bundle was expected to start with a banner but does not
    #[error("no banner found at the start of {path}")]
    MissingBanner {
        /// Bundle path
        path: PathBuf,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl BannerError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_banner::config::ConfigError;
    /// use bundle_banner::error::BannerError;
    ///
    /// let error = BannerError::from(ConfigError::BannerFileNotFound {
    ///     path: "alt-banner.txt".into(),
    /// });
    ///
    /// let suggestion = error.suggestion().unwrap();
    /// assert!(suggestion.contains("--file"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Config(e) => Some(match e {
                ConfigError::BannerFileNotFound { .. } => {
                    "Check the --file path; relative paths resolve against the project root"
                        .to_string()
                }
                ConfigError::PackageFileNotFound { .. } => {
                    "Check the --pkg path; relative paths resolve against the project root"
                        .to_string()
                }
                ConfigError::BannerFileUnreadable { path, .. }
                | ConfigError::PackageFileUnreadable { path, .. }
                | ConfigError::ConfigFileUnreadable { path, .. } => format!(
                    "Check file permissions and that {} is readable",
                    path.display()
                ),
                ConfigError::InvalidConfigFile { .. } => {
                    "Valid keys: file, pkg, template, comment-style (block, line or hash)"
                        .to_string()
                }
            }),
            Self::Template(TemplateError::UnknownVariable { available, .. }) => Some(format!(
                "Available variables: {}. Package fields are under pkg, e.g. <%= pkg.name %>",
                available
            )),
            Self::Template(_) => Some(
                "Banner templates support only <%= expression %> tags with property paths, \
                 literals and || fallbacks"
                    .to_string(),
            ),
            Self::Metadata(MetadataError::Parse { path, .. })
            | Self::Metadata(MetadataError::NotAnObject { path, .. }) => Some(format!(
                "Ensure {} contains a single JSON object",
                path.display()
            )),
            Self::PluginArgs(_) => {
                Some("Supported arguments: --file <PATH>, --pkg <PATH>, --template <TEMPLATE>, --comment-style <STYLE>".to_string())
            }
            Self::MissingBanner { path } => Some(format!(
                "Run 'bundle-banner apply {}' to add one",
                path.display()
            )),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes based on the error type, following sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_banner::error::BannerError;
    /// use bundle_banner::template::TemplateError;
    ///
    /// let error = BannerError::from(TemplateError::UnclosedTag { line: 1, column: 1 });
    /// assert_eq!(error.exit_code(), 65); // EX_DATAERR
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(ConfigError::InvalidConfigFile { .. }) => 78, // EX_CONFIG
            Self::Config(_) => 66,       // EX_NOINPUT
            Self::Template(_) => 65,     // EX_DATAERR
            Self::Metadata(_) => 65,     // EX_DATAERR
            Self::PluginArgs(_) => 64,   // EX_USAGE
            Self::MissingBanner { .. } => 1, // Generic error (CI should fail)
            Self::Io { .. } => 74,       // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        // Main error message
        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(suggestion) = error
            .downcast_ref::<BannerError>()
            .and_then(BannerError::suggestion)
        {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                suggestion
            ));
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(banner_error) = error.downcast_ref::<BannerError>() {
            banner_error.exit_code()
        } else {
            1 // Generic error
        }
    }
}
