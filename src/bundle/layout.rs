//! Coarse structural inspection of a finished bundle
//!
//! Splits a bundle into its leading banner comment, the bundler-generated body and a
//! trailing source-map annotation. Used by `bundle-banner check` and by tests that
//! verify the banner landed ahead of the wrapper code.

use regex::Regex;
use std::sync::OnceLock;

static SOURCE_MAP_RE: OnceLock<Regex> = OnceLock::new();

/// The three parts of a bundle this crate cares about
///
/// `banner`, `body` and `source_map` are contiguous: concatenated they reproduce the
/// inspected text exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleLayout<'a> {
    /// Leading comment block, including its trailing newline
    pub banner: Option<&'a str>,
    /// Everything between the banner and the source map
    pub body: &'a str,
    /// Trailing `sourceMappingURL` annotation, including trailing whitespace
    pub source_map: Option<&'a str>,
}

impl BundleLayout<'_> {
    /// Whether a banner comment leads the bundle
    pub fn has_banner(&self) -> bool {
        self.banner.is_some()
    }

    /// Names of the parts present, in order
    pub fn part_names(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(3);
        if self.banner.is_some() {
            names.push("banner");
        }
        if !self.body.is_empty() {
            names.push("body");
        }
        if self.source_map.is_some() {
            names.push("source map");
        }
        names
    }
}

/// Split `text` into banner, body and source map
///
/// # Examples
///
/// ```
/// use bundle_banner::bundle::inspect;
///
/// let layout = inspect("/*!\n * fizz\n */\n(function(){})();\n//# sourceMappingURL=b.js.map\n");
/// assert_eq!(layout.banner, Some("/*!\n * fizz\n */\n"));
/// assert_eq!(layout.body, "(function(){})();\n");
/// assert_eq!(layout.source_map, Some("//# sourceMappingURL=b.js.map\n"));
/// ```
pub fn inspect(text: &str) -> BundleLayout<'_> {
    let banner_len = leading_comment_len(text);
    let banner = (banner_len > 0).then(|| &text[..banner_len]);
    let rest = &text[banner_len..];

    let source_map_re = SOURCE_MAP_RE.get_or_init(|| {
        // SAFETY: constant pattern, covered by the tests below.
        Regex::new(
            r"(?:^|\n)((?://[#@][ \t]*sourceMappingURL=[^\r\n]*|/\*[#@][ \t]*sourceMappingURL=[^\r\n]*?\*/)[ \t\r\n]*)\z",
        )
        .expect("source map regex is valid")
    });

    let map_start = source_map_re
        .captures(rest)
        .and_then(|caps| caps.get(1))
        .map(|m| m.start());

    match map_start {
        Some(start) => BundleLayout {
            banner,
            body: &rest[..start],
            source_map: Some(&rest[start..]),
        },
        None => BundleLayout {
            banner,
            body: rest,
            source_map: None,
        },
    }
}

/// Byte length of the comment block at the very start of `text`, or 0
fn leading_comment_len(text: &str) -> usize {
    if let Some(after_open) = text.strip_prefix("/*") {
        if after_open.starts_with('#') || after_open.starts_with('@') {
            return 0;
        }
        return match after_open.find("*/") {
            Some(close) => {
                let end = 2 + close + 2;
                end + line_break_len(&text[end..])
            }
            None => 0,
        };
    }

    let is_comment_line = |line: &str| {
        if line.starts_with("//") {
            !(line.starts_with("//#") || line.starts_with("//@"))
        } else {
            line.starts_with('#') && !line.starts_with("#!")
        }
    };

    let mut len = 0;
    for line in text.split_inclusive('\n') {
        if !is_comment_line(line) {
            break;
        }
        len += line.len();
    }
    len
}

fn line_break_len(text: &str) -> usize {
    if text.starts_with("\r\n") {
        2
    } else if text.starts_with('\n') {
        1
    } else {
        0
    }
}
