//! # Coercion Rejections
//!
//! The two rejection kinds the engine can produce. Both are returned
//! as explicit error values — no panic crosses the crate boundary —
//! so the transport collaborator can translate them into a
//! protocol-level response (conventionally HTTP 400).

use thiserror::Error;

/// A validation failure produced by the coercion engine.
///
/// The engine never retries (a malformed value will not become valid
/// on a second attempt) and has no internal fatal failure mode; every
/// call produces either a typed value or one of these rejections.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoercionError {
    /// A required parameter arrived with an empty raw value.
    #[error("missing required parameter {name:?}")]
    MissingRequired {
        /// Name of the missing parameter.
        name: String,
    },

    /// The raw value could not be converted to the declared type.
    ///
    /// Raised only for the plain `number` format when parsing yields
    /// NaN; all other parse failures are absorbed into typed sentinels.
    #[error("invalid value {value:?} for parameter {name:?}")]
    InvalidValue {
        /// The raw wire value that failed to parse.
        value: String,
        /// Name of the parameter that carried it.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_parameter_name() {
        let err = CoercionError::MissingRequired {
            name: "age".to_string(),
        };
        assert!(err.to_string().contains("age"));
    }

    #[test]
    fn test_display_includes_offending_value() {
        let err = CoercionError::InvalidValue {
            value: "oops".to_string(),
            name: "score".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("oops"));
        assert!(rendered.contains("score"));
    }
}
