//! # Parameter Objects
//!
//! One declared request parameter, following the OpenAPI parameter
//! object shape: `name`, `in`, `required`, `schema`.
//!
//! The location is informational for the coercion engine — it does not
//! affect coercion rules — but the transport boundary uses it to pick
//! which part of the request to read the raw value from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::schema::{Reference, Schema, SchemaOrRef};

/// Where a parameter travels in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Query string component.
    Query,
    /// Path segment.
    Path,
    /// HTTP header.
    Header,
    /// Cookie value.
    Cookie,
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Query => "query",
            Self::Path => "path",
            Self::Header => "header",
            Self::Cookie => "cookie",
        };
        f.write_str(name)
    }
}

/// One declared request parameter.
///
/// Immutable once handed to the coercion engine; nothing downstream
/// mutates a received parameter or its schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Identifier, unique within the owning operation.
    pub name: String,

    /// Where the raw value is extracted from.
    #[serde(rename = "in")]
    pub location: ParameterLocation,

    /// Whether an empty raw value is a rejection.
    #[serde(default)]
    pub required: bool,

    /// Value shape: an inline schema, a reference marker, or absent.
    /// Reference markers and absent schemas both mean "pass the raw
    /// value through unchanged".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrRef>,
}

impl Parameter {
    /// Create an optional parameter with no schema.
    ///
    /// # Errors
    ///
    /// Returns `SpecError::InvalidParameter` if `name` is empty.
    pub fn new(name: impl Into<String>, location: ParameterLocation) -> Result<Self, SpecError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SpecError::InvalidParameter(
                "parameter name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            location,
            required: false,
            schema: None,
        })
    }

    /// Attach an inline schema.
    #[must_use]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(SchemaOrRef::Inline(schema));
        self
    }

    /// Attach a reference marker instead of an inline schema.
    #[must_use]
    pub fn with_reference(mut self, target: impl Into<String>) -> Self {
        self.schema = Some(SchemaOrRef::Ref(Reference::new(target)));
        self
    }

    /// Set the required flag.
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_rejects_empty_name() {
        assert!(Parameter::new("", ParameterLocation::Query).is_err());
    }

    #[test]
    fn test_builder_chain() {
        let param = Parameter::new("limit", ParameterLocation::Query)
            .unwrap()
            .with_schema(Schema::new("integer").unwrap())
            .with_required(true);
        assert!(param.required);
        assert!(param.schema.as_ref().unwrap().as_schema().is_some());
    }

    #[test]
    fn test_deserialize_openapi_shape() {
        let param: Parameter = serde_json::from_value(json!({
            "name": "petId",
            "in": "path",
            "required": true,
            "schema": {"type": "integer", "format": "int64"}
        }))
        .unwrap();
        assert_eq!(param.name, "petId");
        assert_eq!(param.location, ParameterLocation::Path);
        assert!(param.required);
    }

    #[test]
    fn test_required_defaults_false() {
        let param: Parameter = serde_json::from_value(json!({
            "name": "verbose",
            "in": "query",
            "schema": {"type": "boolean"}
        }))
        .unwrap();
        assert!(!param.required);
    }

    #[test]
    fn test_deserialize_reference_schema() {
        let param: Parameter = serde_json::from_value(json!({
            "name": "filter",
            "in": "query",
            "schema": {"$ref": "#/components/schemas/Filter"}
        }))
        .unwrap();
        assert!(param.schema.unwrap().is_reference());
    }

    #[test]
    fn test_location_display() {
        assert_eq!(ParameterLocation::Cookie.to_string(), "cookie");
        assert_eq!(ParameterLocation::Header.to_string(), "header");
    }
}
