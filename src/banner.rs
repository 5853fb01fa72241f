//! Banner rendering: template substitution plus comment wrapping

use crate::metadata::PackageMetadata;
use crate::template::{RenderContext, Template, TemplateError};
use crate::timestamp::BuildTimestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Comment syntax the banner body is wrapped in
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum CommentStyle {
    /// `/*! ... */` block, preserved by most minifiers
    #[default]
    Block,
    /// `// ...` line comments
    Line,
    /// `# ...` line comments
    Hash,
}

impl CommentStyle {
    /// Guess a style from an output file extension
    ///
    /// Returns `None` for unknown extensions so callers can keep their default.
    pub fn for_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "js" | "mjs" | "cjs" | "jsx" | "ts" | "mts" | "cts" | "tsx" | "css" | "scss"
            | "less" => Some(Self::Block),
            "sh" | "py" | "rb" | "toml" | "yml" | "yaml" => Some(Self::Hash),
            _ => None,
        }
    }

    /// Wrap rendered banner text in comment markers
    ///
    /// Leading and trailing blank lines are dropped and trailing whitespace on each
    /// line is trimmed. Text with no visible content yields an empty banner.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_banner::banner::CommentStyle;
    ///
    /// let banner = CommentStyle::Block.wrap("fizz-buzz v1.0.0\n\nMIT");
    /// assert_eq!(banner.as_str(), "/*!\n * fizz-buzz v1.0.0\n *\n * MIT\n */\n");
    ///
    /// let banner = CommentStyle::Line.wrap("fizz-buzz");
    /// assert_eq!(banner.as_str(), "// fizz-buzz\n");
    /// ```
    pub fn wrap(&self, text: &str) -> RenderedBanner {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let first = lines.iter().position(|l| !l.is_empty());
        let last = lines.iter().rposition(|l| !l.is_empty());
        let (Some(first), Some(last)) = (first, last) else {
            return RenderedBanner::empty();
        };
        let body = &lines[first..=last];

        let prefix = match self {
            Self::Block => " *",
            Self::Line => "//",
            Self::Hash => "#",
        };

        let mut out = String::new();
        if *self == Self::Block {
            out.push_str("/*!\n");
        }
        for line in body {
            out.push_str(prefix);
            if !line.is_empty() {
                out.push(' ');
                out.push_str(line);
            }
            out.push('\n');
        }
        if *self == Self::Block {
            out.push_str(" */\n");
        }

        RenderedBanner(out)
    }
}

impl fmt::Display for CommentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Block => "block",
            Self::Line => "line",
            Self::Hash => "hash",
        };
        f.write_str(name)
    }
}

/// Fully substituted banner, comment-wrapped and newline-terminated
///
/// May be empty, in which case splicing it is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RenderedBanner(String);

impl RenderedBanner {
    /// Banner with no content
    pub fn empty() -> Self {
        Self::default()
    }

    /// Banner text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Banner bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the banner has no content
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of lines the banner occupies
    pub fn line_count(&self) -> usize {
        self.0.lines().count()
    }
}

impl fmt::Display for RenderedBanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders banner templates against package metadata
///
/// Templates see two root variables: `pkg` (the package metadata) and `now`
/// (`now.year`, `now.date`, `now.iso` for the build timestamp).
#[derive(Debug, Clone, Copy)]
pub struct BannerRenderer {
    style: CommentStyle,
    timestamp: BuildTimestamp,
}

impl BannerRenderer {
    /// Create a renderer with a fixed comment style and build timestamp
    pub fn new(style: CommentStyle, timestamp: BuildTimestamp) -> Self {
        Self { style, timestamp }
    }

    /// Comment style in use
    pub fn style(&self) -> CommentStyle {
        self.style
    }

    /// Render `banner_text` and wrap it as a comment block
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_banner::banner::{BannerRenderer, CommentStyle};
    /// use bundle_banner::metadata::PackageMetadata;
    /// use bundle_banner::timestamp::BuildTimestamp;
    /// use std::path::Path;
    ///
    /// let pkg = PackageMetadata::parse(
    ///     r#"{ "author": { "name": "John Doe" } }"#,
    ///     Path::new("package.json"),
    /// )?;
    /// let renderer = BannerRenderer::new(CommentStyle::Block, BuildTimestamp::from_epoch_var(Some("0")));
    /// let banner = renderer.render("This package was written by <%= pkg.author.name %>", &pkg)?;
    ///
    /// assert_eq!(banner.as_str(), "/*!\n * This package was written by John Doe\n */\n");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn render(
        &self,
        banner_text: &str,
        metadata: &PackageMetadata,
    ) -> Result<RenderedBanner, TemplateError> {
        let template = Template::parse(banner_text)?;
        let ctx = RenderContext::new()
            .with_variable("pkg", metadata.to_value())
            .with_variable("now", self.timestamp.to_value());

        let body = template.render(&ctx)?;
        log::debug!(
            "rendered banner: {} expression(s), {} byte(s) of text",
            template.expression_count(),
            body.len()
        );

        Ok(self.style.wrap(&body))
    }
}
