//! Validation error types for specification trees
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Kind of node a path segment or violation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeLabel {
    Provider,
    Resource,
    DataSource,
    Attribute,
    Block,
    ObjectAttributeType,
}

impl NodeLabel {
    /// Text used in paths and messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Provider => "provider",
            Self::Resource => "resource",
            Self::DataSource => "datasource",
            Self::Attribute => "attribute",
            Self::Block => "block",
            Self::ObjectAttributeType => "object attribute type",
        }
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name that occurs more than once within one scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Path of the scope holding the duplicate, empty at the document root
    pub path: String,
    /// Kind of the duplicated node
    pub label: NodeLabel,
    /// The duplicated name
    pub name: String,
}

impl Violation {
    pub fn duplicate<P, N>(path: P, label: NodeLabel, name: N) -> Self
    where
        P: Into<String>,
        N: Into<String>,
    {
        Self {
            path: path.into(),
            label,
            name: name.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.path.is_empty() {
            write!(f, "{} ", self.path)?;
        }
        write!(f, "{} {:?} is duplicated", self.label, self.name)
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// Every violation found in one validation pass
///
/// Displayed as one violation per line, in the order they were found.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub violations: Vec<Violation>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    pub fn add(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Rendered messages, one per violation
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// Convert to result - Ok if no violations, Err otherwise
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Violation> for ValidationErrors {
    fn from(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

impl From<Vec<Violation>> for ValidationErrors {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}
