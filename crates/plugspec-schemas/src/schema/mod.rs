//! In-memory specification tree
//!
//! A [`Specification`] names a provider, resources and data sources. Each of
//! them optionally carries a [`Schema`]: an ordered list of attributes and an
//! ordered list of blocks. Nested attribute and block kinds own further
//! attributes and blocks, so the tree has no fixed depth.
//!
//! The tree is built once, by decoding a document or programmatically, and is
//! never mutated by the validators or the equality comparer.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod attribute;
pub mod block;
pub mod element;
pub mod facets;

pub use attribute::{
    Attribute, AttributeKind, AttributeOptions, BoolAttribute, CollectionAttribute,
    DynamicAttribute, Float64Attribute, Int64Attribute, NestedAttribute, NestedAttributeObject,
    NumberAttribute, ObjectAttribute, SingleNestedAttribute, StringAttribute,
};
pub use block::{Block, BlockKind, BlockOptions, NestedBlock, NestedBlockObject, SingleNestedBlock};
pub use element::{CollectionElement, ElementType, ObjectAttributeType, ScalarElement};
pub use facets::{
    AssociatedExternalType, ComputedOptionalRequired, CustomDefault, CustomFacet, CustomType,
    HasCustom, PlanModifier, StaticDefault, Validator,
};

use serde::{Deserialize, Serialize};

/// Root of a decoded specification document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub datasources: Vec<DataSource>,
}

impl Specification {
    /// First resource with the given name
    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|resource| resource.name == name)
    }

    /// First data source with the given name
    pub fn datasource(&self, name: &str) -> Option<&DataSource> {
        self.datasources.iter().find(|datasource| datasource.name == name)
    }
}

/// Provider-level configuration schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

/// A managed resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

/// A read-only data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl Provider {
    pub fn new<S: Into<String>>(name: S, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema: Some(schema),
        }
    }
}

impl Resource {
    pub fn new<S: Into<String>>(name: S, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema: Some(schema),
        }
    }
}

impl DataSource {
    pub fn new<S: Into<String>>(name: S, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema: Some(schema),
        }
    }
}

/// Top-level attributes and blocks of a provider, resource or data source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
}

impl Schema {
    pub fn new(attributes: Vec<Attribute>, blocks: Vec<Block>) -> Self {
        Self {
            attributes,
            blocks,
            ..Self::default()
        }
    }

    pub fn with_attributes(attributes: Vec<Attribute>) -> Self {
        Self::new(attributes, Vec::new())
    }
}
