//! Base validation trait and path context
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::validation::error::{NodeLabel, ValidationErrors, ValidationResult, Violation};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How much checking the loader performs after decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Document grammar, decoding and name collision checks
    Strict,
    /// Document grammar and decoding only
    Basic,
}

impl Default for ValidationMode {
    fn default() -> Self {
        Self::Strict
    }
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "basic" => Ok(Self::Basic),
            other => Err(format!("unknown validation mode '{}'", other)),
        }
    }
}

/// Human-readable path of the scope being validated
///
/// Paths read like `resource "example" attribute "settings"`. Each recursive
/// call receives its own child context, so no state is shared between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationContext {
    pub path: String,
}

impl ValidationContext {
    /// Context at the document root
    pub fn new() -> Self {
        Self::default()
    }

    /// Context at an explicit path, for validating a sub-scope on its own
    pub fn at<P: Into<String>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Child context for a named node below this one
    ///
    /// The segment is `<label> "<name>"`, with the name escaped by `Debug`.
    pub fn child(&self, label: NodeLabel, name: &str) -> Self {
        let segment = format!("{} {:?}", label, name);
        let path = if self.path.is_empty() {
            segment
        } else {
            format!("{} {}", self.path, segment)
        };

        Self { path }
    }

    /// Violation for a duplicate of `name` in the scope at this path
    pub fn duplicate(&self, label: NodeLabel, name: &str) -> Violation {
        Violation::duplicate(self.path.as_str(), label, name)
    }
}

/// Base trait for name collision validation over any part of the tree
pub trait SchemaValidator {
    /// Validate from the document root
    fn validate(&self) -> ValidationResult<()> {
        self.validate_with_context(&ValidationContext::new())
    }

    /// Validate with the node placed at the context's path
    fn validate_with_context(&self, context: &ValidationContext) -> ValidationResult<()> {
        self.collect_errors(context).into_result()
    }

    /// Collect every violation without failing
    fn collect_errors(&self, context: &ValidationContext) -> ValidationErrors {
        let mut violations = Vec::new();
        self.collect_violations(context, &mut violations);
        ValidationErrors::from(violations)
    }

    /// Append the violations of this node and everything below it
    fn collect_violations(&self, context: &ValidationContext, violations: &mut Vec<Violation>);
}
