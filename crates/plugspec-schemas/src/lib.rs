//! Plugspec Schemas - declarative plugin schema trees
//!
//! This crate models the schema of a provider plugin (the provider itself,
//! its resources and its data sources) as a tree of typed attributes and
//! nested blocks, and provides two operations over that tree:
//!
//! - **Name collision validation**: every scope must hold unique names.
//!   All violations are reported at once, each prefixed with the path of the
//!   scope it was found in.
//! - **Canonical equality**: two trees are equal when they describe the same
//!   schema. Validators and plan modifiers compare as sets, defaults compare
//!   by value, and floats compare bit for bit.
//!
//! Documents are loaded from YAML or JSON, checked against an embedded JSON
//! Schema (draft 2020-12) grammar and decoded with serde.
//!
//! ## Quick Start
//!
//! ```rust
//! use plugspec_schemas::{Format, SemanticEq, SpecLoader};
//!
//! let document = |first: &str, second: &str| {
//!     format!(
//!         r#"
//! resources:
//!   - name: thing
//!     schema:
//!       attributes:
//!         - name: enabled
//!           bool:
//!             computed_optional_required: optional
//!             validators:
//!               - custom: {{schema_definition: "{}"}}
//!               - custom: {{schema_definition: "{}"}}
//! "#,
//!         first, second
//!     )
//! };
//!
//! let loader = SpecLoader::new().unwrap();
//! let left = loader.load_str(&document("a()", "b()"), Format::Yaml).unwrap();
//! let right = loader.load_str(&document("b()", "a()"), Format::Yaml).unwrap();
//!
//! assert_ne!(left, right);
//! assert!(left.semantic_eq(&right));
//! ```
//!
//! ## Validation Modes
//!
//! - **Basic**: document grammar and decoding only
//! - **Strict**: also rejects duplicate names (default)
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod equality;
pub mod loader;
pub mod schema;
pub mod validation;

// Re-export commonly used types for convenience
pub use equality::{default_eq, ordered_eq, set_eq, DefaultValue, SemanticEq};
pub use loader::{Format, LoaderConfig, LoaderError, LoaderResult, SpecLoader};
pub use schema::{Attribute, Block, DataSource, Provider, Resource, Schema, Specification};
pub use validation::{
    validate_object_attribute_types, validate_scope, validate_specification, DocumentError,
    DocumentValidator, SchemaValidator, ValidationContext, ValidationErrors, ValidationMode,
    ValidationResult, Violation,
};
