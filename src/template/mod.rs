//! Banner template engine
//!
//! Templates are plain text with `<%= expression %>` tags. Expressions are a closed
//! grammar of property paths, literals and `||` fallbacks (see [`Expr`]); they cannot
//! execute code. Rendering is pure: the same template and context always produce the
//! same text.
//!
//! # Examples
//!
//! ```
//! use bundle_banner::template::{RenderContext, Template};
//! use serde_json::json;
//!
//! let template = Template::parse("<%= pkg.name %> v<%= pkg.version %>")?;
//! let ctx = RenderContext::new()
//!     .with_variable("pkg", json!({ "name": "Alternate World", "version": "9.87.654" }));
//!
//! assert_eq!(template.render(&ctx)?, "Alternate World v9.87.654");
//! # Ok::<(), bundle_banner::template::TemplateError>(())
//! ```

pub mod context;
pub mod error;
pub mod expr;

pub use context::RenderContext;
pub use error::TemplateError;
pub use expr::{display_value, Accessor, Expr, PropertyPath};

/// Opening delimiter of an interpolation tag
pub const OPEN_TAG: &str = "<%=";
/// Closing delimiter of an interpolation tag
pub const CLOSE_TAG: &str = "%>";

/// Any `<%` starts a tag; only `<%=` is accepted
const TAG_START: &str = "<%";

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Text(String),
    Expr {
        expr: Expr,
        line: usize,
        column: usize,
    },
}

/// A parsed banner template
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template source, validating delimiters and expressions
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut cursor = 0;

        while cursor < source.len() {
            let rest = &source[cursor..];
            let next_open = rest.find(TAG_START);
            let next_close = rest.find(CLOSE_TAG);

            if let Some(close) = next_close {
                if next_open.is_none_or(|open| close < open) {
                    let (line, column) = position(source, cursor + close);
                    return Err(TemplateError::StrayClose { line, column });
                }
            }

            let Some(open) = next_open else {
                segments.push(Segment::Text(rest.to_string()));
                break;
            };

            if open > 0 {
                segments.push(Segment::Text(rest[..open].to_string()));
            }

            let tag_offset = cursor + open;
            let (line, column) = position(source, tag_offset);
            let tagged = &rest[open..];

            if !tagged.starts_with(OPEN_TAG) {
                let tag: String = tagged.chars().take(3).collect();
                return Err(TemplateError::UnsupportedTag { tag, line, column });
            }

            let body_start = open + OPEN_TAG.len();
            let body_len = rest[body_start..]
                .find(CLOSE_TAG)
                .ok_or(TemplateError::UnclosedTag { line, column })?;
            let body = &rest[body_start..body_start + body_len];

            // A second opener before the closer means the first one was never closed
            if body.contains(TAG_START) {
                return Err(TemplateError::UnclosedTag { line, column });
            }

            let expr =
                Expr::parse(body).map_err(|reason| TemplateError::InvalidExpression {
                    expr: body.trim().to_string(),
                    reason,
                    line,
                    column,
                })?;
            segments.push(Segment::Expr { expr, line, column });

            cursor += body_start + body_len + CLOSE_TAG.len();
        }

        Ok(Self { segments })
    }

    /// Render against `ctx`
    ///
    /// Missing properties render as empty strings. Referencing a root variable that
    /// `ctx` does not define is an error.
    pub fn render(&self, ctx: &RenderContext) -> Result<String, TemplateError> {
        let mut output = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Expr { expr, line, column } => {
                    let value = expr.evaluate(ctx).map_err(|name| {
                        TemplateError::UnknownVariable {
                            name: name.to_string(),
                            available: ctx.names().collect::<Vec<_>>().join(", "),
                            line: *line,
                            column: *column,
                        }
                    })?;
                    output.push_str(&display_value(value));
                }
            }
        }

        Ok(output)
    }

    /// Number of interpolation tags in the template
    pub fn expression_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Expr { .. }))
            .count()
    }
}

impl std::str::FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// 1-based (line, column) of a byte offset, counting columns in chars
fn position(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
