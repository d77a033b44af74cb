//! Validation of specification documents and trees
//!
//! Two layers are provided:
//!
//! - **Document**: the raw JSON document is checked against the embedded
//!   JSON Schema grammar before decoding
//! - **Names**: the decoded tree is checked for names repeated within a
//!   scope, with every violation reported under its full path
//!
//! # Message format
//!
//! A path is a space-separated list of `<label> "<name>"` segments, with the
//! labels `provider`, `resource`, `datasource`, `attribute`, `block` and
//! `object attribute type`. A violation reads `<path> <label> "<name>" is
//! duplicated`, without the path for top-level resources and data sources.
//!
//! Names are quoted and escaped the way Rust's `Debug` formats a `str`:
//! quotes and backslashes are escaped, as are control characters
//! (`\n`, `\t`, `\u{1b}`) and invisible ones such as `\u{200b}`. Other
//! Unicode is written as is.
//!
//! # Examples
//!
//! ```rust
//! use plugspec_schemas::schema::{
//!     Attribute, AttributeKind, AttributeOptions, ComputedOptionalRequired, Resource, Schema,
//!     Specification,
//! };
//! use plugspec_schemas::validation::SchemaValidator;
//!
//! let attribute = |name: &str| {
//!     Attribute::new(
//!         name,
//!         AttributeKind::Bool(AttributeOptions::new(ComputedOptionalRequired::Required)),
//!     )
//! };
//!
//! let spec = Specification {
//!     resources: vec![Resource::new(
//!         "example",
//!         Schema::with_attributes(vec![attribute("id"), attribute("id")]),
//!     )],
//!     ..Default::default()
//! };
//!
//! let errors = spec.validate().unwrap_err();
//! assert_eq!(errors.to_string(), "resource \"example\" attribute \"id\" is duplicated");
//! ```
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod document;
pub mod error;
pub mod names;

// Re-export commonly used types
pub use base::{SchemaValidator, ValidationContext, ValidationMode};
pub use document::{DocumentError, DocumentResult, DocumentValidator, SCHEMA_PATH_ENV};
pub use error::{NodeLabel, ValidationErrors, ValidationResult, Violation};
pub use names::{validate_object_attribute_types, validate_scope};

use crate::schema::Specification;

/// Check a whole specification for duplicate names
///
/// Returns every violation found, in a stable order, joined by newlines when
/// displayed.
pub fn validate_specification(specification: &Specification) -> ValidationResult<()> {
    specification.validate()
}
