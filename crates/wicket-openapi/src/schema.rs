//! # Schema Descriptors
//!
//! Primitive/composite type descriptors and `$ref` reference markers.
//!
//! A [`Schema`] carries the `type`/`format` pair that drives coercion.
//! A [`Reference`] points at a schema defined elsewhere in the document;
//! Wicket recognizes the marker but never dereferences it — a value
//! governed by a reference passes through coercion unchanged.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Primitive/composite type descriptor.
///
/// `type` is a free-form string so that consumers stay total over
/// documents written against newer or looser spec dialects. The
/// well-known values are `string`, `number`, `integer`, `boolean`,
/// `object`, and `array`. `format` only refines `string`, `number`,
/// and `integer`; meaningless combinations are ignored downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Declared type. Required, non-empty.
    #[serde(rename = "type")]
    pub ty: String,

    /// Optional format refinement (`byte`, `date-time`, `int64`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Schema {
    /// Create a schema with the given type and no format.
    ///
    /// # Errors
    ///
    /// Returns `SpecError::InvalidSchema` if `ty` is empty.
    pub fn new(ty: impl Into<String>) -> Result<Self, SpecError> {
        let ty = ty.into();
        if ty.is_empty() {
            return Err(SpecError::InvalidSchema(
                "schema type must not be empty".to_string(),
            ));
        }
        Ok(Self { ty, format: None })
    }

    /// Attach a format refinement.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// The format refinement, if any.
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }
}

/// A `$ref` marker pointing at a schema defined elsewhere.
///
/// The target is opaque to this workspace; dereferencing is a
/// collaborator concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// The reference target (e.g. `#/components/schemas/Pet`).
    #[serde(rename = "$ref")]
    pub target: String,
}

impl Reference {
    /// Create a reference marker.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

/// Either an inline schema or a reference marker.
///
/// Deserialization tries the reference arm first: an object carrying
/// `$ref` is a reference even if it also carries other keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    /// A `$ref` marker; never resolved by this workspace.
    Ref(Reference),
    /// A concrete inline schema.
    Inline(Schema),
}

impl SchemaOrRef {
    /// Returns true for the reference arm.
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Ref(_))
    }

    /// The inline schema, if this is not a reference.
    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            Self::Inline(schema) => Some(schema),
            Self::Ref(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_rejects_empty_type() {
        assert!(Schema::new("").is_err());
    }

    #[test]
    fn test_with_format() {
        let schema = Schema::new("string").unwrap().with_format("date-time");
        assert_eq!(schema.ty, "string");
        assert_eq!(schema.format(), Some("date-time"));
    }

    #[test]
    fn test_deserialize_inline_schema() {
        let parsed: SchemaOrRef =
            serde_json::from_value(json!({"type": "integer", "format": "int64"})).unwrap();
        let schema = parsed.as_schema().unwrap();
        assert_eq!(schema.ty, "integer");
        assert_eq!(schema.format(), Some("int64"));
    }

    #[test]
    fn test_deserialize_reference() {
        let parsed: SchemaOrRef =
            serde_json::from_value(json!({"$ref": "#/components/schemas/Pet"})).unwrap();
        assert!(parsed.is_reference());
        assert!(parsed.as_schema().is_none());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let schema = SchemaOrRef::Inline(Schema::new("number").unwrap().with_format("double"));
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json, json!({"type": "number", "format": "double"}));
        let back: SchemaOrRef = serde_json::from_value(json).unwrap();
        assert_eq!(back, schema);
    }

    #[test]
    fn test_format_absent_not_serialized() {
        let schema = Schema::new("boolean").unwrap();
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json, json!({"type": "boolean"}));
    }
}
