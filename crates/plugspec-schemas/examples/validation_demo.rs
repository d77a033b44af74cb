//! Validation demonstration example
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use plugspec_schemas::{Format, LoaderConfig, SemanticEq, SpecLoader};

const DOCUMENT: &str = r#"
resources:
  - name: example_thing
    schema:
      attributes:
        - name: id
          string:
            computed_optional_required: computed
        - name: id
          bool:
            computed_optional_required: optional
        - name: settings
          list_nested:
            computed_optional_required: optional
            nested_object:
              attributes:
                - name: level
                  int64:
                    computed_optional_required: required
                    validators:
                      - custom: {schema_definition: "AtLeast(1)"}
                      - custom: {schema_definition: "AtMost(9)"}
                - name: level
                  int64:
                    computed_optional_required: required
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Plugspec Validation Demo ===\n");

    demo_name_collisions()?;

    println!();

    demo_semantic_equality()?;

    Ok(())
}

fn demo_name_collisions() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Name Collision Demo ---");

    let strict = SpecLoader::new()?;
    println!("Loading in strict mode:");
    match strict.load_str(DOCUMENT, Format::Yaml) {
        Ok(_) => println!("   Unexpectedly valid!"),
        Err(e) => println!("   Error: {}", e),
    }

    let basic = SpecLoader::with_config(LoaderConfig::basic())?;
    println!("\nLoading in basic mode:");
    let spec = basic.load_str(DOCUMENT, Format::Yaml)?;
    println!("   Loaded {} resource(s)", spec.resources.len());

    Ok(())
}

fn demo_semantic_equality() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Semantic Equality Demo ---");

    let loader = SpecLoader::with_config(LoaderConfig::basic())?;
    let left = loader.load_str(DOCUMENT, Format::Yaml)?;
    let reordered = DOCUMENT
        .replace("AtLeast(1)", "PLACEHOLDER")
        .replace("AtMost(9)", "AtLeast(1)")
        .replace("PLACEHOLDER", "AtMost(9)");
    let right = loader.load_str(&reordered, Format::Yaml)?;

    println!("Validators listed in a different order:");
    println!("   Structurally equal: {}", left == right);
    println!("   Semantically equal: {}", left.semantic_eq(&right));

    Ok(())
}
