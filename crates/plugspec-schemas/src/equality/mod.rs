//! Semantic equality between specification fragments
//!
//! Most fields are compared by plain value equality. Validators and plan
//! modifiers are logically sets even though they are stored as sequences, so
//! they are put into a canonical order before comparison. Defaults that carry
//! neither custom code nor a static literal are decode artifacts and count as
//! absent.
//!
//! Comparison never fails and never mutates its arguments.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

mod tree;

use crate::schema::facets::{CustomFacet, HasCustom};
use std::cmp::Ordering;

/// Equality of two specifications as seen by code generation
pub trait SemanticEq {
    fn semantic_eq(&self, other: &Self) -> bool;
}

/// Default values that may decode as an empty placeholder
pub trait DefaultValue: SemanticEq {
    /// True when neither custom code nor a static literal is present
    fn is_unset(&self) -> bool;
}

impl SemanticEq for bool {
    fn semantic_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl SemanticEq for i64 {
    fn semantic_eq(&self, other: &Self) -> bool {
        self == other
    }
}

/// Bit-for-bit, so `NaN` equals itself and `0.0` differs from `-0.0`.
impl SemanticEq for f64 {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl SemanticEq for String {
    fn semantic_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: SemanticEq + ?Sized> SemanticEq for &T {
    fn semantic_eq(&self, other: &Self) -> bool {
        (**self).semantic_eq(*other)
    }
}

impl<T: SemanticEq + ?Sized> SemanticEq for Box<T> {
    fn semantic_eq(&self, other: &Self) -> bool {
        (**self).semantic_eq(&**other)
    }
}

impl<T: SemanticEq> SemanticEq for Option<T> {
    fn semantic_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(left), Some(right)) => left.semantic_eq(right),
            _ => false,
        }
    }
}

impl SemanticEq for CustomFacet {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.import == other.import && self.schema_definition == other.schema_definition
    }
}

/// Positional comparison of two ordered sequences
pub fn ordered_eq<T: SemanticEq>(left: &[T], right: &[T]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(left, right)| left.semantic_eq(right))
}

/// Order-insensitive comparison of validator or plan modifier collections
///
/// Absent and present collections never compare equal. Entries without a
/// custom facet are ignored once the raw lengths agree.
pub fn set_eq<T: HasCustom>(left: Option<&[T]>, right: Option<&[T]>) -> bool {
    let (left, right) = match (left, right) {
        (None, None) => return true,
        (Some(left), Some(right)) => (left, right),
        _ => return false,
    };

    if left.len() != right.len() {
        return false;
    }

    let left = canonical_order(left);
    let right = canonical_order(right);

    ordered_eq(&left, &right)
}

/// Comparison of optional defaults where an unset default counts as absent
pub fn default_eq<D: DefaultValue>(left: Option<&D>, right: Option<&D>) -> bool {
    let left = left.filter(|default| !default.is_unset());
    let right = right.filter(|default| !default.is_unset());

    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => left.semantic_eq(right),
        _ => false,
    }
}

/// Custom facets of the entries that carry one, sorted by schema definition
///
/// Works on references so the caller's collection keeps its order.
fn canonical_order<T: HasCustom>(entries: &[T]) -> Vec<&CustomFacet> {
    let mut facets: Vec<&CustomFacet> = entries.iter().filter_map(HasCustom::custom_facet).collect();
    facets.sort_by(|left, right| canonical_cmp(left, right));
    facets
}

fn canonical_cmp(left: &CustomFacet, right: &CustomFacet) -> Ordering {
    left.schema_definition
        .cmp(&right.schema_definition)
        .then_with(|| left.import.cmp(&right.import))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::facets::{PlanModifier, StaticDefault, Validator};

    fn validator(definition: &str) -> Validator {
        Validator::from_custom(CustomFacet::new(definition))
    }

    #[test]
    fn test_float_bitwise_equality() {
        assert!(1.234_f64.semantic_eq(&1.234));
        assert!(!1.234_f64.semantic_eq(&1.2340000001));
        assert!(f64::NAN.semantic_eq(&f64::NAN));
        assert!(!0.0_f64.semantic_eq(&-0.0));
    }

    #[test]
    fn test_option_equality() {
        let none: Option<String> = None;
        assert!(none.semantic_eq(&None));
        assert!(!none.semantic_eq(&Some(String::new())));
        assert!(!Some(String::new()).semantic_eq(&none));
        assert!(Some("a".to_string()).semantic_eq(&Some("a".to_string())));
    }

    #[test]
    fn test_set_eq_absent_and_present() {
        let empty: Vec<Validator> = Vec::new();
        assert!(set_eq::<Validator>(None, None));
        assert!(!set_eq(None, Some(empty.as_slice())));
        assert!(!set_eq(Some(empty.as_slice()), None));
        assert!(set_eq(Some(empty.as_slice()), Some(empty.as_slice())));
    }

    #[test]
    fn test_set_eq_ignores_order() {
        let left = vec![validator("two"), validator("one")];
        let right = vec![validator("one"), validator("two")];
        assert!(set_eq(Some(left.as_slice()), Some(right.as_slice())));
        assert!(set_eq(Some(right.as_slice()), Some(left.as_slice())));

        // Inputs keep their order
        assert_eq!(left[0], validator("two"));
    }

    #[test]
    fn test_set_eq_detects_content_and_length() {
        let left = vec![validator("one"), validator("two")];
        let right = vec![validator("one"), validator("three")];
        assert!(!set_eq(Some(left.as_slice()), Some(right.as_slice())));

        let shorter = vec![validator("one")];
        assert!(!set_eq(Some(left.as_slice()), Some(shorter.as_slice())));
    }

    #[test]
    fn test_set_eq_filters_entries_without_custom() {
        let left = vec![Validator::default(), validator("one")];
        let right = vec![validator("one"), Validator::default()];
        assert!(set_eq(Some(left.as_slice()), Some(right.as_slice())));

        let mismatch = vec![validator("one"), validator("two")];
        assert!(!set_eq(Some(left.as_slice()), Some(mismatch.as_slice())));
    }

    #[test]
    fn test_set_eq_compares_imports() {
        let left = vec![PlanModifier::from_custom(
            CustomFacet::new("one").with_import("example.com/a"),
        )];
        let right = vec![PlanModifier::from_custom(
            CustomFacet::new("one").with_import("example.com/b"),
        )];
        assert!(!set_eq(Some(left.as_slice()), Some(right.as_slice())));
    }

    #[test]
    fn test_default_eq_treats_unset_as_absent() {
        let unset = StaticDefault::<f64>::default();
        assert!(default_eq(Some(&unset), None));
        assert!(default_eq(None, Some(&unset)));
        assert!(!default_eq(Some(&StaticDefault::literal(1.0)), Some(&unset)));
        assert!(default_eq(
            Some(&StaticDefault::literal(1.234)),
            Some(&StaticDefault::literal(1.234))
        ));
        assert!(!default_eq(
            Some(&StaticDefault::literal(1.234)),
            Some(&StaticDefault::literal(1.2340000001))
        ));
    }
}
