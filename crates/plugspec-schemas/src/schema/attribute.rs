//! Attribute nodes and their kinds
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::schema::element::{ElementType, ObjectAttributeType};
use crate::schema::facets::{
    AssociatedExternalType, ComputedOptionalRequired, CustomDefault, CustomType, PlanModifier,
    StaticDefault, Validator,
};
use serde::{Deserialize, Serialize};

/// A named attribute in a schema or nested object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(flatten)]
    pub kind: AttributeKind,
}

impl Attribute {
    pub fn new<S: Into<String>>(name: S, kind: AttributeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Wire tag of the attribute kind
    pub fn kind_name(&self) -> &'static str {
        self.kind.kind_name()
    }
}

/// The closed set of attribute kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Bool(BoolAttribute),
    Float64(Float64Attribute),
    Int64(Int64Attribute),
    Number(NumberAttribute),
    String(StringAttribute),
    Dynamic(DynamicAttribute),
    List(CollectionAttribute),
    Set(CollectionAttribute),
    Map(CollectionAttribute),
    Object(ObjectAttribute),
    ListNested(NestedAttribute),
    SetNested(NestedAttribute),
    MapNested(NestedAttribute),
    SingleNested(SingleNestedAttribute),
}

impl AttributeKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Float64(_) => "float64",
            Self::Int64(_) => "int64",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Dynamic(_) => "dynamic",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
            Self::Object(_) => "object",
            Self::ListNested(_) => "list_nested",
            Self::SetNested(_) => "set_nested",
            Self::MapNested(_) => "map_nested",
            Self::SingleNested(_) => "single_nested",
        }
    }

    /// Child attributes of nested kinds
    pub fn nested_attributes(&self) -> &[Attribute] {
        match self {
            Self::ListNested(nested) | Self::SetNested(nested) | Self::MapNested(nested) => {
                nested.nested_object.attributes.as_slice()
            }
            Self::SingleNested(single) => single.attributes.as_slice(),
            _ => &[],
        }
    }

    /// Object attribute types directly owned by this kind
    ///
    /// For collection kinds these are the attribute types of an `object`
    /// element type, looking through nested collection element types.
    pub fn object_attribute_types(&self) -> Option<&[ObjectAttributeType]> {
        match self {
            Self::Object(object) => Some(object.attribute_types.as_slice()),
            Self::List(collection) | Self::Set(collection) | Self::Map(collection) => {
                collection.element_type.object_attribute_types()
            }
            _ => None,
        }
    }
}

/// Facets shared by every attribute kind
///
/// `D` is the default value shape of the kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeOptions<D> {
    pub computed_optional_required: ComputedOptionalRequired,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub default: Option<D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_modifiers: Option<Vec<PlanModifier>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validators: Option<Vec<Validator>>,
}

impl<D> AttributeOptions<D> {
    /// Options with only the requiredness flavor set
    pub fn new(computed_optional_required: ComputedOptionalRequired) -> Self {
        Self {
            computed_optional_required,
            associated_external_type: None,
            custom_type: None,
            default: None,
            deprecation_message: None,
            description: None,
            plan_modifiers: None,
            sensitive: None,
            validators: None,
        }
    }

    pub fn with_default(mut self, default: D) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_validators(mut self, validators: Vec<Validator>) -> Self {
        self.validators = Some(validators);
        self
    }

    pub fn with_plan_modifiers(mut self, plan_modifiers: Vec<PlanModifier>) -> Self {
        self.plan_modifiers = Some(plan_modifiers);
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = Some(true);
        self
    }
}

pub type BoolAttribute = AttributeOptions<StaticDefault<bool>>;
pub type Float64Attribute = AttributeOptions<StaticDefault<f64>>;
pub type Int64Attribute = AttributeOptions<StaticDefault<i64>>;
pub type StringAttribute = AttributeOptions<StaticDefault<String>>;
pub type NumberAttribute = AttributeOptions<CustomDefault>;
pub type DynamicAttribute = AttributeOptions<CustomDefault>;

/// List, set or map attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionAttribute {
    pub element_type: ElementType,
    #[serde(flatten)]
    pub options: AttributeOptions<CustomDefault>,
}

/// Attribute with a fixed-shape object type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectAttribute {
    pub attribute_types: Vec<ObjectAttributeType>,
    #[serde(flatten)]
    pub options: AttributeOptions<CustomDefault>,
}

/// List, set or map of nested objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedAttribute {
    pub nested_object: NestedAttributeObject,
    #[serde(flatten)]
    pub options: AttributeOptions<CustomDefault>,
}

/// A single nested object carrying its attributes directly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleNestedAttribute {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(flatten)]
    pub options: AttributeOptions<CustomDefault>,
}

/// Payload of the `*_nested` attribute kinds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedAttributeObject {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_modifiers: Option<Vec<PlanModifier>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validators: Option<Vec<Validator>>,
}

impl NestedAttributeObject {
    pub fn with_attributes(attributes: Vec<Attribute>) -> Self {
        Self {
            attributes,
            ..Self::default()
        }
    }
}
