//! Error types for template parsing and rendering

use thiserror::Error;

/// Errors raised while parsing or rendering a banner template
///
/// Line and column numbers are 1-based and point at the offending tag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// `<%=` opened but never closed
    #[error("unclosed `<%=` tag at line {line}, column {column}")]
    UnclosedTag {
        /// Line of the opening tag
        line: usize,
        /// Column of the opening tag
        column: usize,
    },

    /// `%>` with no matching `<%=`
    #[error("unexpected `%>` at line {line}, column {column} without a matching `<%=`")]
    StrayClose {
        /// Line of the stray delimiter
        line: usize,
        /// Column of the stray delimiter
        column: usize,
    },

    /// A `<%` tag other than `<%=`
    #[error("unsupported tag `{tag}` at line {line}, column {column}; only `<%= expression %>` is allowed")]
    UnsupportedTag {
        /// The tag as written
        tag: String,
        /// Line of the tag
        line: usize,
        /// Column of the tag
        column: usize,
    },

    /// Expression between the delimiters does not parse
    #[error("invalid expression `{expr}` at line {line}, column {column}: {reason}")]
    InvalidExpression {
        /// Expression source text
        expr: String,
        /// What the parser choked on
        reason: String,
        /// Line of the enclosing tag
        line: usize,
        /// Column of the enclosing tag
        column: usize,
    },

    /// Expression references a root variable that does not exist
    #[error("unknown template variable `{name}` at line {line}, column {column} (available: {available})")]
    UnknownVariable {
        /// Root identifier as written
        name: String,
        /// Comma-separated list of known roots
        available: String,
        /// Line of the enclosing tag
        line: usize,
        /// Column of the enclosing tag
        column: usize,
    },
}

impl TemplateError {
    /// Position (line, column) the error points at
    pub fn position(&self) -> (usize, usize) {
        match self {
            Self::UnclosedTag { line, column }
            | Self::StrayClose { line, column }
            | Self::UnsupportedTag { line, column, .. }
            | Self::InvalidExpression { line, column, .. }
            | Self::UnknownVariable { line, column, .. } => (*line, *column),
        }
    }
}
