//! Duplicate name detection
//!
//! Every scope keeps its own set of seen names. Each repeated occurrence of a
//! name produces one violation. Violations of a scope are reported before the
//! violations of its children, and children are visited in declaration order,
//! so the combined message is stable for a given tree.
//!
//! Attributes and blocks of the same scope share one name space. Object
//! attribute types form their own scopes below the attribute that owns them.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::schema::{
    Attribute, Block, DataSource, ObjectAttributeType, Provider, Resource, Schema, Specification,
};
use crate::validation::base::{SchemaValidator, ValidationContext};
use crate::validation::error::{NodeLabel, ValidationErrors, ValidationResult, Violation};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Validate one scope of attributes and blocks found at `path`
pub fn validate_scope(attributes: &[Attribute], blocks: &[Block], path: &str) -> ValidationResult<()> {
    let context = ValidationContext::at(path);
    let mut violations = Vec::new();
    check_scope(attributes, blocks, &context, &mut violations);
    ValidationErrors::from(violations).into_result()
}

/// Validate the object attribute types of one fixed-shape object found at `path`
pub fn validate_object_attribute_types(
    attribute_types: &[ObjectAttributeType],
    path: &str,
) -> ValidationResult<()> {
    attribute_types.validate_with_context(&ValidationContext::at(path))
}

/// Record `name` in `seen`, reporting it when it was already there
fn record<'a>(
    seen: &mut HashSet<&'a str>,
    label: NodeLabel,
    name: &'a str,
    context: &ValidationContext,
    violations: &mut Vec<Violation>,
) {
    if !seen.insert(name) {
        violations.push(context.duplicate(label, name));
    }
}

fn check_scope(
    attributes: &[Attribute],
    blocks: &[Block],
    context: &ValidationContext,
    violations: &mut Vec<Violation>,
) {
    trace!(
        path = %context.path,
        attributes = attributes.len(),
        blocks = blocks.len(),
        "checking scope"
    );

    let mut seen = HashSet::with_capacity(attributes.len() + blocks.len());
    for attribute in attributes {
        record(&mut seen, NodeLabel::Attribute, &attribute.name, context, violations);
    }
    for block in blocks {
        record(&mut seen, NodeLabel::Block, &block.name, context, violations);
    }

    for attribute in attributes {
        check_attribute(attribute, &context.child(NodeLabel::Attribute, &attribute.name), violations);
    }
    for block in blocks {
        let (attributes, blocks) = block.kind.children();
        check_scope(
            attributes,
            blocks,
            &context.child(NodeLabel::Block, &block.name),
            violations,
        );
    }
}

fn check_attribute(attribute: &Attribute, context: &ValidationContext, violations: &mut Vec<Violation>) {
    let nested = attribute.kind.nested_attributes();
    if !nested.is_empty() {
        check_scope(nested, &[], context, violations);
    }

    if let Some(attribute_types) = attribute.kind.object_attribute_types() {
        check_object_attribute_types(attribute_types, context, violations);
    }
}

fn check_object_attribute_types(
    attribute_types: &[ObjectAttributeType],
    context: &ValidationContext,
    violations: &mut Vec<Violation>,
) {
    let mut seen = HashSet::with_capacity(attribute_types.len());
    for attribute_type in attribute_types {
        record(
            &mut seen,
            NodeLabel::ObjectAttributeType,
            &attribute_type.name,
            context,
            violations,
        );
    }

    for attribute_type in attribute_types {
        if let Some(nested) = attribute_type.element_type.object_attribute_types() {
            check_object_attribute_types(
                nested,
                &context.child(NodeLabel::ObjectAttributeType, &attribute_type.name),
                violations,
            );
        }
    }
}

impl SchemaValidator for Specification {
    fn collect_violations(&self, context: &ValidationContext, violations: &mut Vec<Violation>) {
        debug!(
            provider = self.provider.is_some(),
            resources = self.resources.len(),
            datasources = self.datasources.len(),
            "validating specification names"
        );

        let mut seen = HashSet::with_capacity(self.resources.len());
        for resource in &self.resources {
            record(&mut seen, NodeLabel::Resource, &resource.name, context, violations);
        }

        let mut seen = HashSet::with_capacity(self.datasources.len());
        for datasource in &self.datasources {
            record(&mut seen, NodeLabel::DataSource, &datasource.name, context, violations);
        }

        if let Some(provider) = &self.provider {
            provider.collect_violations(context, violations);
        }
        for resource in &self.resources {
            resource.collect_violations(context, violations);
        }
        for datasource in &self.datasources {
            datasource.collect_violations(context, violations);
        }
    }
}

impl SchemaValidator for Provider {
    fn collect_violations(&self, context: &ValidationContext, violations: &mut Vec<Violation>) {
        if let Some(schema) = &self.schema {
            schema.collect_violations(&context.child(NodeLabel::Provider, &self.name), violations);
        }
    }
}

impl SchemaValidator for Resource {
    fn collect_violations(&self, context: &ValidationContext, violations: &mut Vec<Violation>) {
        if let Some(schema) = &self.schema {
            schema.collect_violations(&context.child(NodeLabel::Resource, &self.name), violations);
        }
    }
}

impl SchemaValidator for DataSource {
    fn collect_violations(&self, context: &ValidationContext, violations: &mut Vec<Violation>) {
        if let Some(schema) = &self.schema {
            schema.collect_violations(&context.child(NodeLabel::DataSource, &self.name), violations);
        }
    }
}

/// The schema's own path must already be in the context.
impl SchemaValidator for Schema {
    fn collect_violations(&self, context: &ValidationContext, violations: &mut Vec<Violation>) {
        check_scope(&self.attributes, &self.blocks, context, violations);
    }
}

/// The attribute's own segment is appended to the context.
impl SchemaValidator for Attribute {
    fn collect_violations(&self, context: &ValidationContext, violations: &mut Vec<Violation>) {
        check_attribute(self, &context.child(NodeLabel::Attribute, &self.name), violations);
    }
}

/// The block's own segment is appended to the context.
impl SchemaValidator for Block {
    fn collect_violations(&self, context: &ValidationContext, violations: &mut Vec<Violation>) {
        let (attributes, blocks) = self.kind.children();
        check_scope(
            attributes,
            blocks,
            &context.child(NodeLabel::Block, &self.name),
            violations,
        );
    }
}

impl SchemaValidator for [Attribute] {
    fn collect_violations(&self, context: &ValidationContext, violations: &mut Vec<Violation>) {
        check_scope(self, &[], context, violations);
    }
}

impl SchemaValidator for [ObjectAttributeType] {
    fn collect_violations(&self, context: &ValidationContext, violations: &mut Vec<Violation>) {
        check_object_attribute_types(self, context, violations);
    }
}
