//! Check command implementation
//!
//! Handles `bundle-banner check`, which reports whether a bundle starts with a banner
//! comment and where its source-map annotation sits. Exits non-zero when the banner
//! is missing so CI can catch builds that skipped the plugin.

use anyhow::Result;
use console::style;
use std::io::Read;
use std::path::Path;

use super::is_stdio;
use crate::bundle::{inspect, BundleLayout};
use crate::error::BannerError;
use crate::fmt::{format_bytes, icon, CHECKMARK, CROSSMARK, MICROSCOPE, WARNING};

/// Inspect a bundle and print its layout
///
/// # Examples
///
/// ```no_run
/// use bundle_banner::cmd::check::cmd_check;
/// use std::path::Path;
///
/// cmd_check(Path::new("dist/bundle.js"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`BannerError::MissingBanner`] when the bundle does not start with a
/// banner comment, and [`BannerError::Io`] when it cannot be read.
pub fn cmd_check(bundle: &Path) -> Result<()> {
    let text = read_text(bundle)?;
    let layout = inspect(&text);

    println!(
        "{} {} {}",
        icon(MICROSCOPE),
        style("bundle-banner check").bold(),
        style(bundle.display()).cyan()
    );
    for line in describe(&layout) {
        println!("   {}", line);
    }

    if !layout.has_banner() {
        return Err(BannerError::MissingBanner {
            path: bundle.to_path_buf(),
        }
        .into());
    }
    Ok(())
}

fn read_text(path: &Path) -> Result<String, BannerError> {
    let text = if is_stdio(path) {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        std::fs::read_to_string(path)
    };
    text.map_err(|source| BannerError::Io {
        context: format!("reading {}", path.display()),
        source,
    })
}

/// One report line per part
fn describe(layout: &BundleLayout<'_>) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);

    match layout.banner {
        Some(banner) => lines.push(format!(
            "{} {:<11} {} line(s), {}",
            icon(CHECKMARK),
            "banner",
            banner.lines().count(),
            format_bytes(banner.len() as u64)
        )),
        None => lines.push(format!(
            "{} {:<11} {}",
            icon(CROSSMARK),
            "banner",
            style("missing").red()
        )),
    }

    lines.push(format!(
        "{} {:<11} {}",
        icon(CHECKMARK),
        "body",
        format_bytes(layout.body.len() as u64)
    ));

    match layout.source_map {
        Some(annotation) => lines.push(format!(
            "{} {:<11} {}",
            icon(CHECKMARK),
            "source map",
            style(annotation.trim_end()).dim()
        )),
        None => lines.push(format!(
            "{} {:<11} {}",
            icon(WARNING),
            "source map",
            style("none").dim()
        )),
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_full_layout() {
        let layout = inspect("/*!\n * fizz\n */\ncode();\n//# sourceMappingURL=b.js.map\n");
        let lines = describe(&layout);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("3 line(s)"));
        assert!(lines[1].contains("body"));
        assert!(lines[2].contains("sourceMappingURL=b.js.map"));
    }

    #[test]
    fn test_describe_missing_banner() {
        let layout = inspect("code();\n");
        let lines = describe(&layout);

        assert!(lines[0].contains("missing"));
        assert!(lines[2].contains("none"));
    }

    #[test]
    fn test_check_fails_without_banner() {
        let temp = tempfile::tempdir().unwrap();
        let bundle = temp.path().join("bundle.js");
        std::fs::write(&bundle, "code();\n").unwrap();

        let err = cmd_check(&bundle).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BannerError>(),
            Some(BannerError::MissingBanner { .. })
        ));
    }

    #[test]
    fn test_check_passes_with_banner() {
        let temp = tempfile::tempdir().unwrap();
        let bundle = temp.path().join("bundle.js");
        std::fs::write(&bundle, "// fizz\ncode();\n").unwrap();

        cmd_check(&bundle).unwrap();
    }
}
