//! Error types for specification loading
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::validation::{DocumentError, ValidationErrors};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Everything that can stop a document from becoming a validated specification
///
/// Documents loaded from strings report the path `<memory>`.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// File I/O errors
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML file '{path}': {source}")]
    YamlParseError {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON file '{path}': {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Unsupported file format
    #[error("Unsupported file format for '{path}'. Expected .yaml, .yml, or .json")]
    UnsupportedFormat { path: PathBuf },

    /// The document grammar could not be prepared or rejected the document
    #[error("Document '{path}' failed schema validation: {source}")]
    DocumentError {
        path: PathBuf,
        source: DocumentError,
    },

    /// The document matched the grammar but could not be decoded
    #[error("Failed to decode specification '{path}': {source}")]
    DecodeError {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Duplicate names were found in the decoded specification
    #[error("Specification '{path}' has duplicate names:\n{source}")]
    ValidationError {
        path: PathBuf,
        source: ValidationErrors,
    },

    /// Serializing a specification back to text failed
    #[error("Failed to serialize specification: {reason}")]
    SerializeError { reason: String },
}

impl LoaderError {
    /// Create an I/O error with path context
    pub fn io_error(path: PathBuf, error: std::io::Error) -> Self {
        Self::IoError {
            path,
            source: error,
        }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml_parse_error(path: PathBuf, error: serde_yaml::Error) -> Self {
        Self::YamlParseError {
            path,
            source: error,
        }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse_error(path: PathBuf, error: serde_json::Error) -> Self {
        Self::JsonParseError {
            path,
            source: error,
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(path: PathBuf) -> Self {
        Self::UnsupportedFormat { path }
    }

    /// Create a document grammar error
    pub fn document_error(path: PathBuf, error: DocumentError) -> Self {
        Self::DocumentError {
            path,
            source: error,
        }
    }

    /// Create a decode error
    pub fn decode_error(path: PathBuf, error: serde_json::Error) -> Self {
        Self::DecodeError {
            path,
            source: error,
        }
    }

    /// Create a name validation error
    pub fn validation_error(path: PathBuf, errors: ValidationErrors) -> Self {
        Self::ValidationError {
            path,
            source: errors,
        }
    }

    /// Create a serialization error
    pub fn serialize_error<E: std::fmt::Display>(error: E) -> Self {
        Self::SerializeError {
            reason: error.to_string(),
        }
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::IoError { path, .. }
            | Self::YamlParseError { path, .. }
            | Self::JsonParseError { path, .. }
            | Self::UnsupportedFormat { path }
            | Self::DocumentError { path, .. }
            | Self::DecodeError { path, .. }
            | Self::ValidationError { path, .. } => Some(path),
            Self::SerializeError { .. } => None,
        }
    }

    /// Name collision violations, when that is what stopped the load
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::ValidationError { source, .. } => Some(source),
            _ => None,
        }
    }
}
