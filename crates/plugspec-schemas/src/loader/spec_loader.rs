//! Specification loader
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::loader::{
    error::{LoaderError, LoaderResult},
    parser::{DocumentParser, Format},
};
use crate::schema::{Attribute, AttributeKind, Block, Schema, Specification};
use crate::validation::{
    DocumentValidator, NodeLabel, SchemaValidator, ValidationContext, ValidationMode,
    SCHEMA_PATH_ENV,
};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable selecting the validation mode
pub const VALIDATION_MODE_ENV: &str = "PLUGSPEC_VALIDATION_MODE";

const MEMORY_PATH: &str = "<memory>";
const EMBEDDED_SCHEMA_PATH: &str = "<embedded schema>";

/// Configuration for loader behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Whether duplicate names are rejected after decoding
    pub mode: ValidationMode,
    /// Whether raw documents are checked against the grammar before decoding
    pub validate_document: bool,
    /// Grammar to use instead of the embedded one
    pub schema_path: Option<PathBuf>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::Strict,
            validate_document: true,
            schema_path: None,
        }
    }
}

impl LoaderConfig {
    /// Read `PLUGSPEC_SCHEMA_PATH` and `PLUGSPEC_VALIDATION_MODE`
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(SCHEMA_PATH_ENV).ok(),
            std::env::var(VALIDATION_MODE_ENV).ok(),
        )
    }

    /// Build a configuration from raw setting values
    ///
    /// An unknown mode is ignored and the default mode is kept.
    pub fn from_values(schema_path: Option<String>, mode: Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = schema_path.filter(|path| !path.trim().is_empty()) {
            config.schema_path = Some(PathBuf::from(path));
        }

        if let Some(mode) = mode {
            match mode.parse() {
                Ok(mode) => config.mode = mode,
                Err(reason) => warn!(%reason, "ignoring {}", VALIDATION_MODE_ENV),
            }
        }

        config
    }

    /// Configuration that skips the name collision check
    pub fn basic() -> Self {
        Self {
            mode: ValidationMode::Basic,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_schema_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.schema_path = Some(path.into());
        self
    }

    /// Skip the grammar check and rely on decoding alone
    pub fn without_document_validation(mut self) -> Self {
        self.validate_document = false;
        self
    }
}

/// Loads documents into validated [`Specification`] trees
///
/// Every load runs the same pipeline: parse, check the grammar (when
/// enabled), decode, then check for duplicate names (strict mode only).
#[derive(Debug)]
pub struct SpecLoader {
    config: LoaderConfig,
    parser: DocumentParser,
    document: Option<DocumentValidator>,
}

impl SpecLoader {
    /// Create a loader with default configuration
    pub fn new() -> LoaderResult<Self> {
        Self::with_config(LoaderConfig::default())
    }

    /// Create a loader with custom configuration
    pub fn with_config(config: LoaderConfig) -> LoaderResult<Self> {
        let document = if config.validate_document {
            let schema_path = config.schema_path.as_deref();
            let validator = DocumentValidator::with_override(schema_path).map_err(|e| {
                let path = schema_path.unwrap_or_else(|| Path::new(EMBEDDED_SCHEMA_PATH));
                LoaderError::document_error(path.to_path_buf(), e)
            })?;
            Some(validator)
        } else {
            None
        };

        Ok(Self {
            config,
            parser: DocumentParser::new(),
            document,
        })
    }

    /// Get current configuration
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load a specification from a `.json`, `.yaml` or `.yml` file
    pub fn load_file(&self, path: &Path) -> LoaderResult<Specification> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| LoaderError::io_error(path.to_path_buf(), e))?;

        debug!(path = %path.display(), ?format, "loading specification");
        let value = self.parser.parse_content(&content, format, path)?;
        self.load_document(value, path)
    }

    /// Load a specification from in-memory text
    pub fn load_str(&self, content: &str, format: Format) -> LoaderResult<Specification> {
        let path = Path::new(MEMORY_PATH);
        let value = self.parser.parse_content(content, format, path)?;
        self.load_document(value, path)
    }

    /// Load a specification from an already parsed document
    pub fn load_value(&self, value: Value) -> LoaderResult<Specification> {
        self.load_document(value, Path::new(MEMORY_PATH))
    }

    /// Serialize a specification in the given format
    ///
    /// Fails when a `float64` static default is NaN or infinite, since
    /// neither format can carry it as a number.
    pub fn to_string(&self, specification: &Specification, format: Format) -> LoaderResult<String> {
        check_finite_defaults(specification)?;
        self.parser.serialize(specification, format)
    }

    /// Write a specification to a file, choosing the format from its extension
    pub fn save_file(&self, specification: &Specification, path: &Path) -> LoaderResult<()> {
        let format = Format::from_path(path)?;
        let content = self.to_string(specification, format)?;
        std::fs::write(path, content).map_err(|e| LoaderError::io_error(path.to_path_buf(), e))
    }

    fn load_document(&self, value: Value, path: &Path) -> LoaderResult<Specification> {
        if let Some(document) = &self.document {
            document
                .validate(&value)
                .map_err(|e| LoaderError::document_error(path.to_path_buf(), e))?;
        }

        let specification: Specification = serde_json::from_value(value)
            .map_err(|e| LoaderError::decode_error(path.to_path_buf(), e))?;

        if self.config.mode == ValidationMode::Strict {
            specification
                .validate()
                .map_err(|errors| LoaderError::validation_error(path.to_path_buf(), errors))?;
        }

        debug!(
            path = %path.display(),
            resources = specification.resources.len(),
            datasources = specification.datasources.len(),
            "loaded specification"
        );
        Ok(specification)
    }
}

fn check_finite_defaults(specification: &Specification) -> LoaderResult<()> {
    let provider = specification
        .provider
        .iter()
        .map(|provider| (NodeLabel::Provider, provider.name.as_str(), provider.schema.as_ref()));
    let resources = specification
        .resources
        .iter()
        .map(|resource| (NodeLabel::Resource, resource.name.as_str(), resource.schema.as_ref()));
    let datasources = specification.datasources.iter().map(|datasource| {
        (NodeLabel::DataSource, datasource.name.as_str(), datasource.schema.as_ref())
    });

    for (label, name, schema) in provider.chain(resources).chain(datasources) {
        if let Some(Schema { attributes, blocks, .. }) = schema {
            let context = ValidationContext::new().child(label, name);
            check_scope_defaults(attributes, blocks, &context)?;
        }
    }
    Ok(())
}

fn check_scope_defaults(
    attributes: &[Attribute],
    blocks: &[Block],
    context: &ValidationContext,
) -> LoaderResult<()> {
    for attribute in attributes {
        let child = context.child(NodeLabel::Attribute, &attribute.name);
        if let AttributeKind::Float64(options) = &attribute.kind {
            let value = options.default.as_ref().and_then(|default| default.static_value);
            if let Some(value) = value.filter(|value| !value.is_finite()) {
                return Err(LoaderError::serialize_error(format!(
                    "{} has a non-finite float64 default ({})",
                    child.path, value
                )));
            }
        }
        check_scope_defaults(attribute.kind.nested_attributes(), &[], &child)?;
    }

    for block in blocks {
        let child = context.child(NodeLabel::Block, &block.name);
        let (attributes, blocks) = block.kind.children();
        check_scope_defaults(attributes, blocks, &child)?;
    }
    Ok(())
}
