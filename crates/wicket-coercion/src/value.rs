//! # Coerced Values
//!
//! The closed union of every value the engine can produce. Sentinel
//! arms (`None` payloads, NaN floats) encode the parse failures the
//! engine absorbs instead of rejecting; callers that care must check
//! validity through the typed accessors.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Typed result of a successful coercion call.
///
/// Serializes untagged: the payload renders directly, without a
/// variant wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CoercedValue {
    /// The untouched raw input: passthrough kinds, reference-marker
    /// schemas, and the absent-but-optional short-circuit.
    Raw(String),
    /// A base64-decoded byte sequence.
    Bytes(Vec<u8>),
    /// A 64-bit integer; `None` is the not-a-number sentinel for
    /// unparseable integer input.
    Integer(Option<i64>),
    /// A 64-bit float; NaN is representable and, for the
    /// `float`/`double` formats, a legal outcome.
    Float(f64),
    /// A tri-state boolean; `None` marks an unrecognized truthiness
    /// token.
    Boolean(Option<bool>),
    /// A parsed calendar timestamp; `None` represents "invalid date".
    Timestamp(Option<DateTime<Utc>>),
}

impl CoercedValue {
    /// The raw string, for passthrough results.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Raw(raw) => Some(raw),
            _ => None,
        }
    }

    /// The decoded byte sequence, for `byte`-format results.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// The integer payload, when present and valid.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => *value,
            _ => None,
        }
    }

    /// The float payload. NaN is returned as-is; use
    /// [`f64::is_nan`] to detect the absorbed-failure case.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// The boolean payload, when the token was recognized.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => *value,
            _ => None,
        }
    }

    /// The timestamp payload, when the input parsed as a date.
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(value) => *value,
            _ => None,
        }
    }
}
