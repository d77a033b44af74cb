//! Facets shared by attributes, blocks and nested objects
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};

/// Author-supplied code snippet attached to a validator, plan modifier or default
///
/// The snippet itself is opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFacet {
    /// Import path required by the snippet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<String>,
    /// Code that builds the validator, plan modifier or default
    pub schema_definition: String,
}

impl CustomFacet {
    /// Create a custom facet without an import
    pub fn new<S: Into<String>>(schema_definition: S) -> Self {
        Self {
            import: None,
            schema_definition: schema_definition.into(),
        }
    }

    /// Attach an import path
    pub fn with_import<S: Into<String>>(mut self, import: S) -> Self {
        self.import = Some(import.into());
        self
    }
}

/// Externally defined type that implements a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<String>,
    #[serde(rename = "type")]
    pub type_name: String,
    pub value_type: String,
}

/// Externally defined type associated with a node for conversion helpers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatedExternalType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<String>,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Requiredness flavor of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputedOptionalRequired {
    Computed,
    ComputedOptional,
    Optional,
    Required,
}

impl ComputedOptionalRequired {
    /// Wire name of the flavor
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Computed => "computed",
            Self::ComputedOptional => "computed_optional",
            Self::Optional => "optional",
            Self::Required => "required",
        }
    }
}

/// Access to the custom facet of a set-like entry
///
/// Validators, plan modifiers and defaults are compared as sets keyed by the
/// custom facet, so they all expose it the same way.
pub trait HasCustom {
    fn custom_facet(&self) -> Option<&CustomFacet>;
}

/// A validator attached to any attribute, block or nested object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomFacet>,
}

impl Validator {
    pub fn from_custom(facet: CustomFacet) -> Self {
        Self {
            custom: Some(facet),
        }
    }
}

impl HasCustom for Validator {
    fn custom_facet(&self) -> Option<&CustomFacet> {
        self.custom.as_ref()
    }
}

/// A plan modifier attached to a resource attribute, block or nested object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanModifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomFacet>,
}

impl PlanModifier {
    pub fn from_custom(facet: CustomFacet) -> Self {
        Self {
            custom: Some(facet),
        }
    }
}

impl HasCustom for PlanModifier {
    fn custom_facet(&self) -> Option<&CustomFacet> {
        self.custom.as_ref()
    }
}

/// Default value for kinds that support a static literal
///
/// Instantiated as `StaticDefault<bool>`, `StaticDefault<f64>`,
/// `StaticDefault<i64>` and `StaticDefault<String>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticDefault<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomFacet>,
    #[serde(
        rename = "static",
        default = "Option::default",
        skip_serializing_if = "Option::is_none"
    )]
    pub static_value: Option<T>,
}

impl<T> StaticDefault<T> {
    /// Default backed by a literal value
    pub fn literal(value: T) -> Self {
        Self {
            custom: None,
            static_value: Some(value),
        }
    }

    /// Default backed by custom code
    pub fn from_custom(facet: CustomFacet) -> Self {
        Self {
            custom: Some(facet),
            static_value: None,
        }
    }
}

impl<T> Default for StaticDefault<T> {
    fn default() -> Self {
        Self {
            custom: None,
            static_value: None,
        }
    }
}

impl<T> HasCustom for StaticDefault<T> {
    fn custom_facet(&self) -> Option<&CustomFacet> {
        self.custom.as_ref()
    }
}

/// Default value for kinds that only support custom code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDefault {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomFacet>,
}

impl CustomDefault {
    pub fn from_custom(facet: CustomFacet) -> Self {
        Self {
            custom: Some(facet),
        }
    }
}

impl HasCustom for CustomDefault {
    fn custom_facet(&self) -> Option<&CustomFacet> {
        self.custom.as_ref()
    }
}
