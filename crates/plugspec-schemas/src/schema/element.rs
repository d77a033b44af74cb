//! Element types of collection attributes and fixed-shape object types
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::schema::facets::CustomType;
use serde::{Deserialize, Serialize};

/// Type of the elements of a list, set or map, or of one object attribute type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Bool(ScalarElement),
    Float64(ScalarElement),
    Int64(ScalarElement),
    Number(ScalarElement),
    String(ScalarElement),
    Dynamic(ScalarElement),
    List(CollectionElement),
    Set(CollectionElement),
    Map(CollectionElement),
    Object(Vec<ObjectAttributeType>),
}

impl ElementType {
    /// Wire tag of the populated variant
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
        }
    }

    /// Object attribute types reachable without crossing another object
    ///
    /// A `list` of `object` yields the object's attribute types; scalars yield
    /// nothing.
    pub fn object_attribute_types(&self) -> Option<&[ObjectAttributeType]> {
        match self {
            Self::Object(types) => Some(types.as_slice()),
            Self::List(collection) | Self::Set(collection) | Self::Map(collection) => {
                collection.element_type.object_attribute_types()
            }
            _ => None,
        }
    }
}

/// Scalar element type with an optional custom type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalarElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
}

/// Nested collection element type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionElement {
    pub element_type: Box<ElementType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
}

impl CollectionElement {
    pub fn of(element_type: ElementType) -> Self {
        Self {
            element_type: Box::new(element_type),
            custom_type: None,
        }
    }
}

/// One named field of a fixed-shape object type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectAttributeType {
    pub name: String,
    #[serde(flatten)]
    pub element_type: ElementType,
}

impl ObjectAttributeType {
    pub fn new<S: Into<String>>(name: S, element_type: ElementType) -> Self {
        Self {
            name: name.into(),
            element_type,
        }
    }
}
