//! Specification loading
//!
//! Documents are read from YAML or JSON, checked against the embedded
//! grammar, decoded into a [`Specification`](crate::schema::Specification)
//! and, in strict mode, checked for duplicate names.
//!
//! # Example Usage
//!
//! ```rust
//! use plugspec_schemas::loader::{Format, SpecLoader};
//!
//! let loader = SpecLoader::new()?;
//! let spec = loader.load_str(
//!     r#"{"resources": [{"name": "thing", "schema": {"attributes": [
//!         {"name": "id", "string": {"computed_optional_required": "computed"}}
//!     ]}}]}"#,
//!     Format::Json,
//! )?;
//! assert!(spec.resource("thing").is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod parser;
pub mod spec_loader;

pub use error::{LoaderError, LoaderResult};
pub use parser::{DocumentParser, Format};
pub use spec_loader::{LoaderConfig, SpecLoader, VALIDATION_MODE_ENV};
