//! Block nodes and their kinds
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::schema::attribute::Attribute;
use crate::schema::facets::{AssociatedExternalType, CustomType, PlanModifier, Validator};
use serde::{Deserialize, Serialize};

/// A named block in a schema or nested block object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub name: String,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl Block {
    pub fn new<S: Into<String>>(name: S, kind: BlockKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.kind_name()
    }
}

/// Blocks only come in nested flavors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    ListNested(NestedBlock),
    SetNested(NestedBlock),
    SingleNested(SingleNestedBlock),
}

impl BlockKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::ListNested(_) => "list_nested",
            Self::SetNested(_) => "set_nested",
            Self::SingleNested(_) => "single_nested",
        }
    }

    /// Child attributes and child blocks, in declaration order
    pub fn children(&self) -> (&[Attribute], &[Block]) {
        match self {
            Self::ListNested(nested) | Self::SetNested(nested) => (
                nested.nested_object.attributes.as_slice(),
                nested.nested_object.blocks.as_slice(),
            ),
            Self::SingleNested(single) => (single.attributes.as_slice(), single.blocks.as_slice()),
        }
    }
}

/// Facets shared by every block kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_modifiers: Option<Vec<PlanModifier>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validators: Option<Vec<Validator>>,
}

/// List or set of nested block objects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedBlock {
    pub nested_object: NestedBlockObject,
    #[serde(flatten)]
    pub options: BlockOptions,
}

impl NestedBlock {
    pub fn new(nested_object: NestedBlockObject) -> Self {
        Self {
            nested_object,
            options: BlockOptions::default(),
        }
    }
}

/// A single nested block carrying its children directly
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SingleNestedBlock {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(flatten)]
    pub options: BlockOptions,
}

/// Payload of the `*_nested` block kinds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedBlockObject {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_modifiers: Option<Vec<PlanModifier>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validators: Option<Vec<Validator>>,
}

impl NestedBlockObject {
    pub fn new(attributes: Vec<Attribute>, blocks: Vec<Block>) -> Self {
        Self {
            attributes,
            blocks,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_block_wire_shape() {
        let block: Block = serde_json::from_value(json!({
            "name": "network",
            "set_nested": {
                "nested_object": {
                    "attributes": [
                        {"name": "cidr", "string": {"computed_optional_required": "required"}}
                    ],
                    "blocks": [
                        {"name": "route", "single_nested": {}}
                    ]
                },
                "description": "network settings"
            }
        }))
        .unwrap();

        assert_eq!(block.kind_name(), "set_nested");
        let (attributes, blocks) = block.kind.children();
        assert_eq!(attributes[0].name, "cidr");
        assert_eq!(blocks[0].name, "route");
        assert_eq!(blocks[0].kind_name(), "single_nested");
    }

    #[test]
    fn test_attribute_only_kind_is_rejected_for_blocks() {
        let result: Result<Block, _> = serde_json::from_value(json!({
            "name": "flag",
            "bool": {"computed_optional_required": "optional"}
        }));
        assert!(result.is_err());
    }
}
