//! # Spec Model Errors
//!
//! Construction-time and load-time failures for the OpenAPI model.
//! These are distinct from coercion rejections: a `SpecError` means the
//! specification itself is unusable, not that a wire value was bad.

use thiserror::Error;

/// Error constructing or loading part of an OpenAPI specification.
#[derive(Error, Debug)]
pub enum SpecError {
    /// The document file could not be read or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path to the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// A document string could not be parsed.
    #[error("document parse error: {reason}")]
    DocumentParse {
        /// Reason the document could not be parsed.
        reason: String,
    },

    /// A parameter object was structurally invalid.
    #[error("invalid parameter object: {0}")]
    InvalidParameter(String),

    /// A schema object was structurally invalid.
    #[error("invalid schema object: {0}")]
    InvalidSchema(String),
}
