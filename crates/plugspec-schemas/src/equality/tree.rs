//! Semantic equality for the specification tree
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use super::{default_eq, ordered_eq, set_eq, DefaultValue, SemanticEq};
use crate::schema::{
    AssociatedExternalType, Attribute, AttributeKind, AttributeOptions, Block, BlockKind,
    BlockOptions, CollectionAttribute, CollectionElement, ComputedOptionalRequired, CustomDefault,
    CustomType, DataSource, ElementType, NestedAttribute, NestedAttributeObject, NestedBlock,
    NestedBlockObject, ObjectAttribute, ObjectAttributeType, PlanModifier, Provider, Resource,
    ScalarElement, Schema, SingleNestedAttribute, SingleNestedBlock, Specification,
    StaticDefault, Validator,
};

impl SemanticEq for CustomType {
    fn semantic_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl SemanticEq for AssociatedExternalType {
    fn semantic_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl SemanticEq for ComputedOptionalRequired {
    fn semantic_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl SemanticEq for Validator {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.custom.semantic_eq(&other.custom)
    }
}

impl SemanticEq for PlanModifier {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.custom.semantic_eq(&other.custom)
    }
}

impl<T: SemanticEq> SemanticEq for StaticDefault<T> {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.custom.semantic_eq(&other.custom) && self.static_value.semantic_eq(&other.static_value)
    }
}

impl<T: SemanticEq> DefaultValue for StaticDefault<T> {
    fn is_unset(&self) -> bool {
        self.custom.is_none() && self.static_value.is_none()
    }
}

impl SemanticEq for CustomDefault {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.custom.semantic_eq(&other.custom)
    }
}

impl DefaultValue for CustomDefault {
    fn is_unset(&self) -> bool {
        self.custom.is_none()
    }
}

// Element types

impl SemanticEq for ElementType {
    fn semantic_eq(&self, other: &Self) -> bool {
        use ElementType::*;

        match (self, other) {
            (Bool(left), Bool(right))
            | (Float64(left), Float64(right))
            | (Int64(left), Int64(right))
            | (Number(left), Number(right))
            | (String(left), String(right))
            | (Dynamic(left), Dynamic(right)) => left.semantic_eq(right),
            (List(left), List(right)) | (Set(left), Set(right)) | (Map(left), Map(right)) => {
                left.semantic_eq(right)
            }
            (Object(left), Object(right)) => ordered_eq(left, right),
            _ => false,
        }
    }
}

impl SemanticEq for ScalarElement {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.custom_type.semantic_eq(&other.custom_type)
    }
}

impl SemanticEq for CollectionElement {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.element_type.semantic_eq(&other.element_type)
            && self.custom_type.semantic_eq(&other.custom_type)
    }
}

/// Declaration order of object attribute types is significant.
impl SemanticEq for ObjectAttributeType {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.name == other.name && self.element_type.semantic_eq(&other.element_type)
    }
}

// Attributes

impl SemanticEq for Attribute {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind.semantic_eq(&other.kind)
    }
}

impl SemanticEq for AttributeKind {
    fn semantic_eq(&self, other: &Self) -> bool {
        use AttributeKind::*;

        match (self, other) {
            (Bool(left), Bool(right)) => left.semantic_eq(right),
            (Float64(left), Float64(right)) => left.semantic_eq(right),
            (Int64(left), Int64(right)) => left.semantic_eq(right),
            (String(left), String(right)) => left.semantic_eq(right),
            (Number(left), Number(right)) | (Dynamic(left), Dynamic(right)) => {
                left.semantic_eq(right)
            }
            (List(left), List(right)) | (Set(left), Set(right)) | (Map(left), Map(right)) => {
                left.semantic_eq(right)
            }
            (Object(left), Object(right)) => left.semantic_eq(right),
            (ListNested(left), ListNested(right))
            | (SetNested(left), SetNested(right))
            | (MapNested(left), MapNested(right)) => left.semantic_eq(right),
            (SingleNested(left), SingleNested(right)) => left.semantic_eq(right),
            _ => false,
        }
    }
}

impl<D: DefaultValue> SemanticEq for AttributeOptions<D> {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.computed_optional_required == other.computed_optional_required
            && self
                .associated_external_type
                .semantic_eq(&other.associated_external_type)
            && self.custom_type.semantic_eq(&other.custom_type)
            && default_eq(self.default.as_ref(), other.default.as_ref())
            && self.deprecation_message == other.deprecation_message
            && self.description == other.description
            && set_eq(self.plan_modifiers.as_deref(), other.plan_modifiers.as_deref())
            && self.sensitive == other.sensitive
            && set_eq(self.validators.as_deref(), other.validators.as_deref())
    }
}

impl SemanticEq for CollectionAttribute {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.element_type.semantic_eq(&other.element_type) && self.options.semantic_eq(&other.options)
    }
}

impl SemanticEq for ObjectAttribute {
    fn semantic_eq(&self, other: &Self) -> bool {
        ordered_eq(&self.attribute_types, &other.attribute_types)
            && self.options.semantic_eq(&other.options)
    }
}

impl SemanticEq for NestedAttribute {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.nested_object.semantic_eq(&other.nested_object)
            && self.options.semantic_eq(&other.options)
    }
}

impl SemanticEq for SingleNestedAttribute {
    fn semantic_eq(&self, other: &Self) -> bool {
        ordered_eq(&self.attributes, &other.attributes) && self.options.semantic_eq(&other.options)
    }
}

impl SemanticEq for NestedAttributeObject {
    fn semantic_eq(&self, other: &Self) -> bool {
        ordered_eq(&self.attributes, &other.attributes)
            && self
                .associated_external_type
                .semantic_eq(&other.associated_external_type)
            && self.custom_type.semantic_eq(&other.custom_type)
            && set_eq(self.plan_modifiers.as_deref(), other.plan_modifiers.as_deref())
            && set_eq(self.validators.as_deref(), other.validators.as_deref())
    }
}

// Blocks

impl SemanticEq for Block {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind.semantic_eq(&other.kind)
    }
}

impl SemanticEq for BlockKind {
    fn semantic_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (BlockKind::ListNested(left), BlockKind::ListNested(right))
            | (BlockKind::SetNested(left), BlockKind::SetNested(right)) => left.semantic_eq(right),
            (BlockKind::SingleNested(left), BlockKind::SingleNested(right)) => {
                left.semantic_eq(right)
            }
            _ => false,
        }
    }
}

impl SemanticEq for BlockOptions {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.associated_external_type
            .semantic_eq(&other.associated_external_type)
            && self.custom_type.semantic_eq(&other.custom_type)
            && self.deprecation_message == other.deprecation_message
            && self.description == other.description
            && set_eq(self.plan_modifiers.as_deref(), other.plan_modifiers.as_deref())
            && set_eq(self.validators.as_deref(), other.validators.as_deref())
    }
}

impl SemanticEq for NestedBlock {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.nested_object.semantic_eq(&other.nested_object)
            && self.options.semantic_eq(&other.options)
    }
}

impl SemanticEq for SingleNestedBlock {
    fn semantic_eq(&self, other: &Self) -> bool {
        ordered_eq(&self.attributes, &other.attributes)
            && ordered_eq(&self.blocks, &other.blocks)
            && self.options.semantic_eq(&other.options)
    }
}

impl SemanticEq for NestedBlockObject {
    fn semantic_eq(&self, other: &Self) -> bool {
        ordered_eq(&self.attributes, &other.attributes)
            && ordered_eq(&self.blocks, &other.blocks)
            && self
                .associated_external_type
                .semantic_eq(&other.associated_external_type)
            && self.custom_type.semantic_eq(&other.custom_type)
            && set_eq(self.plan_modifiers.as_deref(), other.plan_modifiers.as_deref())
            && set_eq(self.validators.as_deref(), other.validators.as_deref())
    }
}

// Schemas

impl SemanticEq for Schema {
    fn semantic_eq(&self, other: &Self) -> bool {
        ordered_eq(&self.attributes, &other.attributes)
            && ordered_eq(&self.blocks, &other.blocks)
            && self.description == other.description
            && self.markdown_description == other.markdown_description
            && self.deprecation_message == other.deprecation_message
    }
}

impl SemanticEq for Provider {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.name == other.name && self.schema.semantic_eq(&other.schema)
    }
}

impl SemanticEq for Resource {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.name == other.name && self.schema.semantic_eq(&other.schema)
    }
}

impl SemanticEq for DataSource {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.name == other.name && self.schema.semantic_eq(&other.schema)
    }
}

impl SemanticEq for Specification {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.provider.semantic_eq(&other.provider)
            && ordered_eq(&self.resources, &other.resources)
            && ordered_eq(&self.datasources, &other.datasources)
    }
}
