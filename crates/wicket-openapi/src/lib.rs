//! # wicket-openapi — OpenAPI Parameter & Schema Model
//!
//! The leaf crate of the Wicket workspace. Defines the OpenAPI-shaped
//! data model that the coercion engine consumes: parameter objects,
//! primitive schema descriptors, and reference markers — plus loading
//! and walking of spec documents.
//!
//! ## Model (`parameter`, `schema`)
//!
//! - [`Parameter`] — one declared request parameter (`name`, `in`,
//!   `required`, `schema`), with a validating constructor.
//! - [`Schema`] — primitive/composite type descriptor (`type` + optional
//!   `format`).
//! - [`Reference`] — a `$ref` marker. Wicket recognizes references but
//!   never resolves them; values governed by a reference pass through
//!   coercion unchanged.
//!
//! ## Documents (`document`)
//!
//! [`SpecDocument`] loads an OpenAPI-style document from JSON or YAML
//! (format chosen by file extension) and walks `paths` → HTTP verbs →
//! operation parameter lists. Keys carrying the `x-` extension prefix
//! are skipped generically via [`is_extension`].
//!
//! ## Crate Policy
//!
//! - Depends on nothing internal (leaf of the DAG).
//! - Schema objects are immutable once handed to a consumer; nothing in
//!   this workspace mutates a received schema.
//! - No `unsafe` code, no `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod parameter;
pub mod schema;

pub use document::{is_extension, Operation, SpecDocument};
pub use error::SpecError;
pub use parameter::{Parameter, ParameterLocation};
pub use schema::{Reference, Schema, SchemaOrRef};
