#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! bundle-banner library
//!
//! Renders a banner template against package metadata and prepends it to a
//! JavaScript bundle, ahead of any UMD wrapper, bundler prelude or module code.
//! It can be used programmatically (as a bundler output hook) in addition to the
//! CLI interface.
//!
//! # Basic Example
//!
//! Rendering a banner from inline metadata:
//!
//! ```
//! use bundle_banner::banner::{BannerRenderer, CommentStyle};
//! use bundle_banner::metadata::PackageMetadata;
//! use bundle_banner::timestamp::BuildTimestamp;
//! use std::path::Path;
//!
//! let pkg = PackageMetadata::parse(
//!     r#"{ "name": "fizz-buzz", "version": "1.0.0", "author": { "name": "John Doe" } }"#,
//!     Path::new("package.json"),
//! )?;
//! let renderer = BannerRenderer::new(CommentStyle::Block, BuildTimestamp::from_env());
//!
//! let banner = renderer.render("This package was written by <%= pkg.author.name %>", &pkg)?;
//! assert_eq!(banner.as_str(), "/*!\n * This package was written by John Doe\n */\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Advanced Example: Splicing a Bundle
//!
//! The banner lands ahead of everything else and the bundle bytes are untouched:
//!
//! ```
//! use bundle_banner::banner::CommentStyle;
//! use bundle_banner::bundle::{inspect, splice, BundleStream};
//!
//! let bundle = "(function(f){ /* umd */ })(function(){ /* prelude */ });\n\
//!               //# sourceMappingURL=bundle.js.map\n";
//! let banner = CommentStyle::Block.wrap("fizz-buzz v1.0.0");
//!
//! let out = splice(BundleStream::from(bundle), &banner);
//! let text = String::from_utf8(out.finalize()).unwrap();
//!
//! let layout = inspect(&text);
//! assert_eq!(layout.banner, Some(banner.as_str()));
//! assert_eq!(layout.part_names(), ["banner", "body", "source map"]);
//! ```

/// Banner rendering and comment wrapping
pub mod banner;
/// Bundle byte streams, splicing and layout inspection
pub mod bundle;
/// Command handlers for CLI operations
pub mod cmd;
/// Option layering and source resolution
pub mod config;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Package metadata loading
pub mod metadata;
/// Bundler output-hook integration
pub mod plugin;
/// `<%= expr %>` template parsing and evaluation
pub mod template;
/// Build timestamp exposed to templates
pub mod timestamp;
