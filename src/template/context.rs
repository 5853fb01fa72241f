//! Variables visible to template expressions

use serde_json::Value;
use std::collections::BTreeMap;

/// Read-only set of named root variables a template renders against
///
/// # Examples
///
/// ```
/// use bundle_banner::template::RenderContext;
/// use serde_json::json;
///
/// let ctx = RenderContext::new().with_variable("pkg", json!({ "name": "fizz" }));
/// assert!(ctx.variable("pkg").is_some());
/// assert!(ctx.variable("author").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    variables: BTreeMap<String, Value>,
}

impl RenderContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a root variable
    pub fn with_variable(mut self, name: impl Into<String>, value: Value) -> Self {
        self.variables.insert(name.into(), value);
        self
    }

    /// Look up a root variable by name
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Root variable names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }
}
