//! Structural validation of raw specification documents
//!
//! The raw JSON document is checked against a JSON Schema (draft 2020-12)
//! grammar before it is decoded into the specification tree. The grammar is
//! embedded at compile time and can be replaced at runtime through the
//! `PLUGSPEC_SCHEMA_PATH` environment variable.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use jsonschema::{Draft, Validator};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

// Embed the schema at compile time for reliability
const SPECIFICATION_SCHEMA: &str = include_str!("../../schemas/plugspec.schema.json");

/// Environment variable overriding the embedded grammar
pub const SCHEMA_PATH_ENV: &str = "PLUGSPEC_SCHEMA_PATH";

/// Result type for document validation
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors raised while preparing or running the document grammar
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The grammar file could not be read
    #[error("Failed to read document schema '{path}': {source}")]
    SchemaIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The grammar is not valid JSON
    #[error("Document schema is not valid JSON: {0}")]
    SchemaParse(#[from] serde_json::Error),

    /// The grammar is not a valid JSON Schema
    #[error("Document schema failed to compile: {0}")]
    SchemaCompile(String),

    /// The document does not follow the grammar
    #[error("Document does not match the specification schema:\n{}", .errors.join("\n"))]
    Invalid { errors: Vec<String> },
}

impl DocumentError {
    /// Structural errors reported for an invalid document
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Invalid { errors } => errors,
            _ => &[],
        }
    }
}

/// Validates raw documents against the specification grammar
pub struct DocumentValidator {
    schema: Value,
    validator: Validator,
}

impl fmt::Debug for DocumentValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentValidator")
            .field("schema_id", &self.schema.get("$id"))
            .finish()
    }
}

impl DocumentValidator {
    /// Create a validator from the embedded grammar or the environment override
    pub fn new() -> DocumentResult<Self> {
        let schema_path = std::env::var(SCHEMA_PATH_ENV).ok().map(PathBuf::from);
        Self::with_override(schema_path.as_deref())
    }

    /// Use the grammar at `path` when it exists, the embedded one otherwise
    pub fn with_override(path: Option<&Path>) -> DocumentResult<Self> {
        match path {
            Some(path) if path.exists() => Self::from_path(path),
            Some(path) => {
                warn!(path = %path.display(), "document schema override not found, using embedded schema");
                Self::embedded()
            }
            None => Self::embedded(),
        }
    }

    /// Create a validator from the grammar compiled into the crate
    pub fn embedded() -> DocumentResult<Self> {
        Self::from_schema(serde_json::from_str(SPECIFICATION_SCHEMA)?)
    }

    /// Load the grammar from a specific path
    pub fn from_path(path: &Path) -> DocumentResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::SchemaIo {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading document schema");
        Self::from_schema(serde_json::from_str(&content)?)
    }

    /// Compile an in-memory grammar
    pub fn from_schema(schema: Value) -> DocumentResult<Self> {
        let validator = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .build(&schema)
            .map_err(|err| DocumentError::SchemaCompile(err.to_string()))?;

        Ok(Self { schema, validator })
    }

    /// The grammar this validator enforces
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Check a raw document against the grammar
    pub fn validate(&self, document: &Value) -> DocumentResult<()> {
        let errors = self.errors(document);
        if errors.is_empty() {
            Ok(())
        } else {
            debug!(count = errors.len(), "document failed schema validation");
            Err(DocumentError::Invalid { errors })
        }
    }

    /// Every structural error, as `<message> at <instance path>`
    pub fn errors(&self, document: &Value) -> Vec<String> {
        self.validator
            .iter_errors(document)
            .map(|err| format!("{} at {}", err, err.instance_path))
            .collect()
    }

    pub fn is_valid(&self, document: &Value) -> bool {
        self.validator.is_valid(document)
    }
}
