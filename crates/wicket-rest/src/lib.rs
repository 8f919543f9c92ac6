//! # wicket-rest — HTTP Boundary
//!
//! The transport-facing edge of the Wicket workspace. The coercion
//! engine itself never touches a request: this crate owns the seam
//! between wire values and the engine.
//!
//! ## Contract
//!
//! - The caller's extractors populate a [`RawParams`] with the raw
//!   string values found in the query string, path segments, headers,
//!   and cookies. A parameter that is missing from the request resolves
//!   to the empty string — exactly the engine's absence encoding.
//! - [`resolve_parameters`] invokes the engine once per declared
//!   parameter and collects the typed results into [`CoercedParams`].
//! - A rejection maps to an HTTP 400 response with a structured JSON
//!   error body via [`RestError`].
//!
//! ## Crate Policy
//!
//! - No routing, no server assembly, no business logic — callers wire
//!   these pieces into their own Axum applications.
//! - All errors map to structured HTTP responses.
//! - No `unsafe` code, no `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod params;

pub use error::RestError;
pub use params::{resolve_parameters, CoercedParams, RawParams};
