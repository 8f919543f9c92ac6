//! # wicket-coercion — Parameter Coercion Engine
//!
//! Converts a single raw wire value (the string a transport extracted
//! from a query string, path segment, header, or cookie) into a typed
//! in-memory value according to the parameter's declared OpenAPI
//! schema, or rejects it with a well-defined validation failure.
//!
//! ## Pipeline
//!
//! caller → [`coerce_parameter`] → presence check
//! ([`validate::check_presence`]) → kind selection
//! ([`classify::classify`]) → conversion rule → [`CoercedValue`] or
//! [`CoercionError`].
//!
//! ## Rejection Taxonomy
//!
//! Exactly two rejection kinds exist:
//!
//! - [`CoercionError::MissingRequired`] — a required parameter arrived
//!   with an empty raw value.
//! - [`CoercionError::InvalidValue`] — the plain `number` format parsed
//!   to NaN.
//!
//! Every other malformed input is absorbed into a typed sentinel (see
//! the per-kind table in [`coerce`]) rather than rejected. That
//! asymmetry is part of the compatibility contract this crate encodes;
//! callers that want stricter behavior must layer it on top.
//!
//! ## Crate Policy
//!
//! - Stateless and pure per call: no I/O, no shared mutable state, no
//!   blocking points. Arbitrarily many coercions may run concurrently
//!   with zero coordination.
//! - Received schemas are read-only; the engine never mutates them.
//! - No `unsafe` code, no `panic!()` or `.unwrap()` outside tests.

pub mod classify;
pub mod coerce;
pub mod error;
pub mod validate;
pub mod value;

pub use classify::{classify, CoercionKind};
pub use coerce::coerce_parameter;
pub use error::CoercionError;
pub use validate::{check_presence, is_absent, is_required, CoercionOptions, Presence};
pub use value::CoercedValue;
