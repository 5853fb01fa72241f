//! Package metadata (`package.json`) loading

use crate::infra::{strip_bom, FileSystem};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Conventional package metadata file name
pub const PACKAGE_FILE_NAME: &str = "package.json";

/// Errors raised while parsing package metadata
#[derive(Error, Debug)]
pub enum MetadataError {
    /// File content is not valid JSON
    #[error("failed to parse package metadata {path}: {source}")]
    Parse {
        /// Metadata file path
        path: PathBuf,
        #[source]
        /// JSON error source
        source: serde_json::Error,
    },

    /// File is valid JSON but not an object
    #[error("package metadata {path} must be a JSON object, found {found}")]
    NotAnObject {
        /// Metadata file path
        path: PathBuf,
        /// JSON type that was found instead
        found: &'static str,
    },
}

/// Arbitrary field mapping loaded from a package file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageMetadata {
    fields: Map<String, Value>,
}

impl PackageMetadata {
    /// Metadata with no fields, used when no package file exists
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse JSON metadata; `origin` is only used in error messages
    ///
    /// A leading byte order mark is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_banner::metadata::PackageMetadata;
    /// use std::path::Path;
    ///
    /// let pkg = PackageMetadata::parse(
    ///     r#"{ "name": "fizz-buzz", "version": "1.0.0" }"#,
    ///     Path::new("package.json"),
    /// )?;
    /// assert_eq!(pkg.name(), Some("fizz-buzz"));
    /// # Ok::<(), bundle_banner::metadata::MetadataError>(())
    /// ```
    pub fn parse(contents: &str, origin: &Path) -> Result<Self, MetadataError> {
        let value: Value =
            serde_json::from_str(strip_bom(contents)).map_err(|source| MetadataError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;

        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(MetadataError::NotAnObject {
                path: origin.to_path_buf(),
                found: json_type_name(&other),
            }),
        }
    }

    /// Top-level field by name
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// `name` field, if it is a string
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    /// `version` field, if it is a string
    pub fn version(&self) -> Option<&str> {
        self.get("version").and_then(Value::as_str)
    }

    /// Whether no fields are present
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Metadata as a JSON object value, for binding into a template context
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

impl From<Map<String, Value>> for PackageMetadata {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Find the nearest package file at or above `start`
pub fn find_package_file<FS: FileSystem>(start: &Path, fs: &FS) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(PACKAGE_FILE_NAME))
        .find(|candidate| fs.is_file(candidate))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
