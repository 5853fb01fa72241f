//! Closed expression grammar for `<%= ... %>` tags
//!
//! ```text
//! expr     := term ( "||" term )*
//! term     := string | number | path
//! path     := ident ( "." ident | "[" digits "]" | "[" string "]" )*
//! string   := '"' chars '"' | "'" chars "'"
//! number   := "-"? digits ( "." digits )?
//! ```
//!
//! `true`, `false` and `null` are recognized as bare identifiers with no accessors.
//! Nothing here can call functions or mutate the context.

use nom::{
    branch::alt,
    bytes::complete::{escaped_transform, is_not, tag, take_while},
    character::complete::{char, digit1, multispace0, satisfy},
    combinator::{all_consuming, map, map_res, opt, recognize, value},
    multi::{many0, separated_list1},
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};
use serde_json::Value;

use super::context::RenderContext;

/// A single step into a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
    /// `.name` or `["name"]`
    Key(String),
    /// `[0]`
    Index(usize),
}

/// Property access chain rooted at a context variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
    /// Root variable name (e.g. `pkg`)
    pub root: String,
    /// Accessors applied in order
    pub accessors: Vec<Accessor>,
}

/// Parsed template expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// String, number, boolean or null literal
    Literal(Value),
    /// Property lookup
    Path(PropertyPath),
    /// `a || b || c`: first truthy operand, else the last one
    Or(Vec<Expr>),
}

impl Expr {
    /// Parse expression source text (the part between the delimiters)
    ///
    /// On failure, returns a short human-readable reason.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_banner::template::{Accessor, Expr};
    ///
    /// let expr = Expr::parse("pkg.author.name").unwrap();
    /// match expr {
    ///     Expr::Path(path) => {
    ///         assert_eq!(path.root, "pkg");
    ///         assert_eq!(path.accessors.len(), 2);
    ///         assert_eq!(path.accessors[1], Accessor::Key("name".to_string()));
    ///     }
    ///     other => panic!("expected a path, got {:?}", other),
    /// }
    /// ```
    pub fn parse(source: &str) -> Result<Self, String> {
        if source.trim().is_empty() {
            return Err("empty expression".to_string());
        }

        let result: IResult<&str, Expr> =
            all_consuming(delimited(multispace0, or_expr, multispace0))(source);

        match result {
            Ok((_, expr)) => Ok(expr),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
                let rest = e.input.trim();
                if rest.is_empty() {
                    Err("unexpected end of expression".to_string())
                } else {
                    Err(format!("unexpected input `{}`", rest))
                }
            }
            Err(nom::Err::Incomplete(_)) => Err("unexpected end of expression".to_string()),
        }
    }

    /// Evaluate against a context
    ///
    /// `Ok(None)` means the path walked off the end of the data. `Err(name)` means the
    /// root variable itself does not exist.
    pub(crate) fn evaluate<'a>(
        &'a self,
        ctx: &'a RenderContext,
    ) -> Result<Option<&'a Value>, &'a str> {
        match self {
            Expr::Literal(value) => Ok(Some(value)),
            Expr::Path(path) => path.resolve(ctx),
            Expr::Or(operands) => {
                let mut last = None;
                for operand in operands {
                    last = operand.evaluate(ctx)?;
                    if is_truthy(last) {
                        break;
                    }
                }
                Ok(last)
            }
        }
    }
}

impl PropertyPath {
    fn resolve<'a>(&'a self, ctx: &'a RenderContext) -> Result<Option<&'a Value>, &'a str> {
        let root = ctx.variable(&self.root).ok_or(self.root.as_str())?;

        let mut current = Some(root);
        for accessor in &self.accessors {
            current = current.and_then(|value| match accessor {
                Accessor::Key(key) => value.get(key.as_str()),
                Accessor::Index(index) => value.get(*index),
            });
        }
        Ok(current)
    }
}

/// JavaScript-style truthiness, used by `||`
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Render a resolved value as banner text
///
/// Missing values and `null` become the empty string. Integral floats drop their
/// fraction. Arrays join their items with `,`. Objects render as compact JSON.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        // `1.0` renders as `1`
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| display_value(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(object @ Value::Object(_)) => object.to_string(),
    }
}

fn or_expr(input: &str) -> IResult<&str, Expr> {
    map(
        separated_list1(delimited(multispace0, tag("||"), multispace0), term),
        |mut terms| {
            if terms.len() == 1 {
                terms.remove(0)
            } else {
                Expr::Or(terms)
            }
        },
    )(input)
}

fn term(input: &str) -> IResult<&str, Expr> {
    alt((
        map(string_literal, |s| Expr::Literal(Value::String(s))),
        map(number_literal, Expr::Literal),
        path_or_keyword,
    ))(input)
}

fn path_or_keyword(input: &str) -> IResult<&str, Expr> {
    map(pair(identifier, many0(accessor)), |(root, accessors)| {
        if accessors.is_empty() {
            match root {
                "true" => return Expr::Literal(Value::Bool(true)),
                "false" => return Expr::Literal(Value::Bool(false)),
                "null" => return Expr::Literal(Value::Null),
                _ => {}
            }
        }
        Expr::Path(PropertyPath {
            root: root.to_string(),
            accessors,
        })
    })(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c: char| c.is_ascii_alphabetic() || c == '_' || c == '$'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$'),
    ))(input)
}

fn accessor(input: &str) -> IResult<&str, Accessor> {
    alt((
        map(preceded(char('.'), identifier), |key: &str| {
            Accessor::Key(key.to_string())
        }),
        delimited(
            pair(char('['), multispace0),
            alt((
                map_res(digit1, |digits: &str| {
                    digits.parse::<usize>().map(Accessor::Index)
                }),
                map(string_literal, Accessor::Key),
            )),
            pair(multispace0, char(']')),
        ),
    ))(input)
}

fn number_literal(input: &str) -> IResult<&str, Value> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        serde_json::from_str::<Value>,
    )(input)
}

fn string_literal(input: &str) -> IResult<&str, String> {
    alt((double_quoted, single_quoted))(input)
}

fn double_quoted(input: &str) -> IResult<&str, String> {
    delimited(
        char('"'),
        map(
            opt(escaped_transform(is_not("\\\""), '\\', escape_sequence)),
            Option::unwrap_or_default,
        ),
        char('"'),
    )(input)
}

fn single_quoted(input: &str) -> IResult<&str, String> {
    delimited(
        char('\''),
        map(
            opt(escaped_transform(is_not("\\'"), '\\', escape_sequence)),
            Option::unwrap_or_default,
        ),
        char('\''),
    )(input)
}

fn escape_sequence(input: &str) -> IResult<&str, &str> {
    alt((
        value("\\", char('\\')),
        value("\"", char('"')),
        value("'", char('\'')),
        value("\n", char('n')),
        value("\t", char('t')),
    ))(input)
}
