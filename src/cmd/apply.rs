//! Apply command implementation
//!
//! Handles `bundle-banner apply`, which prepends the rendered banner to a finished
//! bundle. It runs the same output hook a bundler would run, then writes the result
//! atomically so a failed build never leaves a half-written file behind.

use anyhow::Result;
use std::io::{Read, Write};
use std::path::Path;

use super::{is_stdio, project_root_or_cwd};
use crate::banner::CommentStyle;
use crate::bundle::BundleStream;
use crate::config::BannerOptions;
use crate::error::BannerError;
use crate::infra::{FileSystem, RealFileSystem};
use crate::plugin::{run_hooks, BannerPlugin};
use crate::timestamp::BuildTimestamp;

/// Prepend the banner to `bundle`
///
/// Writes to `output` when given, otherwise back to `bundle`. A `-` path reads stdin
/// or writes stdout; reading stdin without `-o` writes stdout. Prints nothing on
/// success.
///
/// # Examples
///
/// ```no_run
/// use bundle_banner::cmd::apply::cmd_apply;
/// use bundle_banner::config::BannerOptions;
/// use std::path::Path;
///
/// // In place, using banner.txt and package.json from the current directory
/// cmd_apply(Path::new("dist/bundle.js"), None, &BannerOptions::default(), None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - An explicit `--file` or `--pkg` does not exist
/// - The banner template is malformed or names an unknown variable
/// - The package file is not a JSON object
/// - The bundle cannot be read or the output cannot be written
pub fn cmd_apply(
    bundle: &Path,
    output: Option<&Path>,
    options: &BannerOptions,
    project_root: Option<&Path>,
) -> Result<()> {
    let project_root = project_root_or_cwd(project_root)?;
    let target = output.unwrap_or(bundle);

    let fallback_style = CommentStyle::for_path(target).unwrap_or_default();
    let plugin = BannerPlugin::from_options_with(
        options,
        &project_root,
        &RealFileSystem,
        BuildTimestamp::from_env(),
        fallback_style,
    )?;

    let stream = read_bundle(bundle)?;
    let stream = run_hooks(stream, &[&plugin])?;
    write_bundle(target, stream)?;

    Ok(())
}

fn read_bundle(path: &Path) -> Result<BundleStream, BannerError> {
    let bytes = if is_stdio(path) {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes).map(|_| bytes)
    } else {
        RealFileSystem.read(path)
    };
    bytes.map(BundleStream::new).map_err(|source| BannerError::Io {
        context: format!("reading {}", path.display()),
        source,
    })
}

fn write_bundle(path: &Path, stream: BundleStream) -> Result<(), BannerError> {
    let bytes = stream.finalize();
    if is_stdio(path) {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(&bytes)
            .and_then(|()| stdout.flush())
            .map_err(|source| BannerError::Io {
                context: "writing bundle to stdout".to_string(),
                source,
            })
    } else {
        RealFileSystem.write(path, bytes).map_err(|source| BannerError::Io {
            context: format!("writing {}", path.display()),
            source,
        })
    }
}
