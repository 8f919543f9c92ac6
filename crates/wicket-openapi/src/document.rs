//! # Spec Documents
//!
//! Loading and walking of OpenAPI-style documents.
//!
//! Documents are held as raw JSON values rather than a fully typed
//! model: Wicket only needs the `paths` → verb → `parameters` slice of
//! a spec, and a loosely typed walk keeps the crate total over
//! documents that carry vendor extensions or constructs Wicket does not
//! model.
//!
//! ## Extension Fields
//!
//! Keys prefixed with `x-` are vendor extensions. Every walk in this
//! module skips them via [`is_extension`]; collaborators walking other
//! parts of a spec are expected to apply the same prefix test.

use std::path::Path;

use serde_json::Value;

use crate::error::SpecError;
use crate::parameter::Parameter;

/// HTTP methods that may appear as operation keys under a path item.
///
/// Path items also carry non-operation keys (`summary`, `parameters`,
/// `servers`); restricting the walk to the method set keeps those from
/// being misread as operations.
const HTTP_VERBS: &[&str] = &[
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Returns true if a spec key is an OpenAPI vendor extension (`x-` prefix).
pub fn is_extension(key: &str) -> bool {
    key.starts_with("x-")
}

/// One operation discovered by walking a document's `paths`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// The path template (e.g. `/pets/{petId}`).
    pub path: String,
    /// The HTTP method, lowercase.
    pub verb: String,
    /// The operation's declared parameters, in document order.
    pub parameters: Vec<Parameter>,
}

/// A loaded OpenAPI-style document.
#[derive(Debug, Clone)]
pub struct SpecDocument {
    root: Value,
}

impl SpecDocument {
    /// Wrap an already-parsed JSON value.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Parse a document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `SpecError::DocumentParse` if the string is not valid JSON.
    pub fn from_json_str(content: &str) -> Result<Self, SpecError> {
        let root = serde_json::from_str(content).map_err(|e| SpecError::DocumentParse {
            reason: format!("invalid JSON: {e}"),
        })?;
        Ok(Self { root })
    }

    /// Parse a document from a YAML string.
    ///
    /// YAML has a richer type system than JSON, but spec documents use
    /// only the JSON-compatible subset, so the value tree deserializes
    /// directly into JSON values.
    ///
    /// # Errors
    ///
    /// Returns `SpecError::DocumentParse` if the string is not valid
    /// YAML or uses non-JSON-compatible constructs.
    pub fn from_yaml_str(content: &str) -> Result<Self, SpecError> {
        let root = serde_yaml::from_str(content).map_err(|e| SpecError::DocumentParse {
            reason: format!("invalid YAML: {e}"),
        })?;
        Ok(Self { root })
    }

    /// Load a document from a file, dispatching on the extension
    /// (`.yaml`/`.yml` for YAML, anything else parsed as JSON).
    ///
    /// # Errors
    ///
    /// Returns `SpecError::DocumentLoad` if the file cannot be read or
    /// parsed.
    pub fn from_file(path: &Path) -> Result<Self, SpecError> {
        let content = std::fs::read_to_string(path).map_err(|e| SpecError::DocumentLoad {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let parsed = match ext {
            "yaml" | "yml" => Self::from_yaml_str(&content),
            _ => Self::from_json_str(&content),
        };
        parsed.map_err(|e| SpecError::DocumentLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// The raw document root.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Walk `paths` and collect every operation with its declared
    /// parameters. Extension keys are skipped at both the path and the
    /// verb level; a document without `paths` yields no operations.
    ///
    /// # Errors
    ///
    /// Returns `SpecError::InvalidParameter` if a parameter object in
    /// the document does not deserialize.
    pub fn operations(&self) -> Result<Vec<Operation>, SpecError> {
        let mut operations = Vec::new();
        let Some(paths) = self.root.get("paths").and_then(Value::as_object) else {
            return Ok(operations);
        };

        for (path, item) in paths {
            if is_extension(path) {
                continue;
            }
            let Some(item) = item.as_object() else {
                continue;
            };
            for (verb, op) in item {
                if is_extension(verb) || !HTTP_VERBS.contains(&verb.as_str()) {
                    continue;
                }
                let parameters = match op.get("parameters").and_then(Value::as_array) {
                    Some(list) => list
                        .iter()
                        .map(|value| {
                            serde_json::from_value::<Parameter>(value.clone()).map_err(|e| {
                                SpecError::InvalidParameter(format!("{verb} {path}: {e}"))
                            })
                        })
                        .collect::<Result<Vec<_>, _>>()?,
                    None => Vec::new(),
                };
                operations.push(Operation {
                    path: path.clone(),
                    verb: verb.clone(),
                    parameters,
                });
            }
        }
        Ok(operations)
    }
}
