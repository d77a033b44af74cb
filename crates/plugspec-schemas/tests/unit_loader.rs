//! Unit tests for loading specification documents
//!
//! Covers JSON and YAML files, grammar violations, decode failures, the
//! validation modes and serializing specifications back to text.

use plugspec_schemas::loader::{Format, LoaderConfig, LoaderError, SpecLoader};
use plugspec_schemas::schema::{
    Attribute, AttributeKind, AttributeOptions, ComputedOptionalRequired, CustomFacet, Resource,
    Schema, StaticDefault,
};
use plugspec_schemas::Specification;
use plugspec_schemas::{SemanticEq, ValidationMode};
use std::fs;
use tempfile::TempDir;

const JSON_SPEC: &str = r#"{
    "provider": {
        "name": "example",
        "schema": {
            "attributes": [
                {"name": "endpoint", "string": {"computed_optional_required": "optional"}}
            ]
        }
    },
    "resources": [{
        "name": "example_thing",
        "schema": {
            "attributes": [
                {
                    "name": "ratio",
                    "float64": {
                        "computed_optional_required": "computed_optional",
                        "default": {"static": 1.234},
                        "validators": [
                            {"custom": {"import": "example.com/validators", "schema_definition": "AtLeast(0)"}}
                        ]
                    }
                },
                {
                    "name": "tags",
                    "list": {
                        "computed_optional_required": "optional",
                        "element_type": {"string": {}}
                    }
                },
                {
                    "name": "settings",
                    "single_nested": {
                        "computed_optional_required": "optional",
                        "attributes": [
                            {"name": "enabled", "bool": {"computed_optional_required": "required"}}
                        ]
                    }
                }
            ],
            "blocks": [
                {
                    "name": "rule",
                    "list_nested": {
                        "nested_object": {
                            "attributes": [
                                {"name": "priority", "int64": {"computed_optional_required": "required"}}
                            ]
                        }
                    }
                }
            ]
        }
    }],
    "datasources": [{"name": "example_things"}]
}"#;

const YAML_SPEC: &str = r#"
provider:
  name: example
  schema:
    attributes:
      - name: endpoint
        string:
          computed_optional_required: optional
resources:
  - name: example_thing
    schema:
      attributes:
        - name: ratio
          float64:
            computed_optional_required: computed_optional
            default:
              static: 1.234
            validators:
              - custom:
                  import: example.com/validators
                  schema_definition: AtLeast(0)
        - name: tags
          list:
            computed_optional_required: optional
            element_type:
              string: {}
        - name: settings
          single_nested:
            computed_optional_required: optional
            attributes:
              - name: enabled
                bool:
                  computed_optional_required: required
      blocks:
        - name: rule
          list_nested:
            nested_object:
              attributes:
                - name: priority
                  int64:
                    computed_optional_required: required
datasources:
  - name: example_things
"#;

const DUPLICATED_SPEC: &str = r#"{
    "resources": [{
        "name": "r",
        "schema": {
            "attributes": [
                {"name": "x", "bool": {"computed_optional_required": "optional"}},
                {"name": "x", "bool": {"computed_optional_required": "optional"}}
            ]
        }
    }]
}"#;

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[cfg(test)]
mod file_loading {
    use super::*;

    #[test]
    fn test_load_json_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "spec.json", JSON_SPEC);

        let spec = SpecLoader::new().unwrap().load_file(&path).unwrap();
        let resource = spec.resource("example_thing").unwrap();
        let schema = resource.schema.as_ref().unwrap();

        assert_eq!(schema.attributes.len(), 3);
        assert_eq!(schema.blocks.len(), 1);
        assert_eq!(schema.attributes[0].kind_name(), "float64");
        assert_eq!(schema.blocks[0].kind_name(), "list_nested");
        assert!(spec.datasource("example_things").unwrap().schema.is_none());

        match &schema.attributes[0].kind {
            AttributeKind::Float64(options) => {
                assert_eq!(
                    options.computed_optional_required,
                    ComputedOptionalRequired::ComputedOptional
                );
                assert_eq!(options.default, Some(StaticDefault::literal(1.234)));
                let validators = options.validators.as_ref().unwrap();
                assert_eq!(
                    validators[0].custom,
                    Some(CustomFacet::new("AtLeast(0)").with_import("example.com/validators"))
                );
            }
            other => panic!("unexpected kind {}", other.kind_name()),
        }
    }

    #[test]
    fn test_yaml_and_json_files_agree() {
        let dir = TempDir::new().unwrap();
        let json_path = write_file(&dir, "spec.json", JSON_SPEC);
        let yaml_path = write_file(&dir, "spec.yml", YAML_SPEC);

        let loader = SpecLoader::new().unwrap();
        let from_json = loader.load_file(&json_path).unwrap();
        let from_yaml = loader.load_file(&yaml_path).unwrap();

        assert_eq!(from_json, from_yaml);
        assert!(from_json.semantic_eq(&from_yaml));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");

        let err = SpecLoader::new().unwrap().load_file(&path).unwrap_err();
        assert!(matches!(err, LoaderError::IoError { .. }));
        assert_eq!(err.path(), Some(path.as_path()));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "spec.toml", "resources = []");

        let err = SpecLoader::new().unwrap().load_file(&path).unwrap_err();
        assert!(matches!(err, LoaderError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "spec.yaml", "resources: [unclosed");

        let err = SpecLoader::new().unwrap().load_file(&path).unwrap_err();
        assert!(matches!(err, LoaderError::YamlParseError { .. }));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let loader = SpecLoader::new().unwrap();
        let original = loader.load_str(JSON_SPEC, Format::Json).unwrap();

        for name in ["saved.json", "saved.yaml"] {
            let path = dir.path().join(name);
            loader.save_file(&original, &path).unwrap();
            let reloaded = loader.load_file(&path).unwrap();
            assert!(original.semantic_eq(&reloaded), "round trip through {}", name);
        }
    }
}

#[cfg(test)]
mod pipeline {
    use super::*;

    #[test]
    fn test_grammar_rejects_two_kinds() {
        let document = r#"{
            "resources": [{
                "name": "r",
                "schema": {
                    "attributes": [{
                        "name": "x",
                        "bool": {"computed_optional_required": "optional"},
                        "string": {"computed_optional_required": "optional"}
                    }]
                }
            }]
        }"#;

        let err = SpecLoader::new()
            .unwrap()
            .load_str(document, Format::Json)
            .unwrap_err();
        match err {
            LoaderError::DocumentError { source, .. } => {
                assert!(!source.errors().is_empty());
                assert!(source.errors().iter().all(|e| e.contains(" at ")));
            }
            other => panic!("expected a document error, got {}", other),
        }
    }

    #[test]
    fn test_grammar_rejects_misspelled_option_keys() {
        let loader = SpecLoader::new().unwrap();
        let documents = [
            r#"{"resources": [{"name": "r", "schema": {"attributes": [{
                "name": "x",
                "bool": {"computed_optional_required": "optional", "validatorz": []}
            }]}}]}"#,
            r#"{"resources": [{"name": "r", "schema": {"attributes": [{
                "name": "x",
                "list": {"computed_optional_required": "optional", "element_type": {"string": {}}, "nested_object": {}}
            }]}}]}"#,
            r#"{"resources": [{"name": "r", "schema": {"blocks": [{
                "name": "b",
                "single_nested": {"bogus": 1}
            }]}}]}"#,
            r#"{"resources": [{"name": "r", "schema": {"blocks": [{
                "name": "b",
                "list_nested": {"nested_object": {}, "descripton": "typo"}
            }]}}]}"#,
        ];

        for document in documents {
            let err = loader.load_str(document, Format::Json).unwrap_err();
            assert!(
                matches!(err, LoaderError::DocumentError { .. }),
                "expected a document error for {}, got {}",
                document,
                err
            );
        }
    }

    #[test]
    fn test_grammar_accepts_every_option_key() {
        let document = r#"{"resources": [{"name": "r", "schema": {
            "attributes": [{
                "name": "tags",
                "set": {
                    "computed_optional_required": "computed_optional",
                    "element_type": {"string": {}},
                    "default": {"custom": {"schema_definition": "empty()"}},
                    "description": "tags",
                    "sensitive": false,
                    "plan_modifiers": [{"custom": {"schema_definition": "keep()"}}],
                    "validators": [{"custom": {"schema_definition": "size(1)"}}]
                }
            }],
            "blocks": [{
                "name": "b",
                "single_nested": {
                    "description": "block",
                    "attributes": [{"name": "a", "int64": {"computed_optional_required": "required", "default": {"static": 3}}}]
                }
            }]
        }}]}"#;

        assert!(SpecLoader::new().unwrap().load_str(document, Format::Json).is_ok());
    }

    #[test]
    fn test_grammar_rejects_missing_requiredness() {
        let document = r#"{"resources": [{"name": "r", "schema": {"attributes": [{"name": "x", "bool": {}}]}}]}"#;
        let err = SpecLoader::new()
            .unwrap()
            .load_str(document, Format::Json)
            .unwrap_err();
        assert!(matches!(err, LoaderError::DocumentError { .. }));
    }

    #[test]
    fn test_missing_kind_is_a_decode_error() {
        let document = r#"{"resources": [{"name": "r", "schema": {"attributes": [{"name": "x"}]}}]}"#;
        let loader =
            SpecLoader::with_config(LoaderConfig::default().without_document_validation()).unwrap();

        let err = loader.load_str(document, Format::Json).unwrap_err();
        assert!(matches!(err, LoaderError::DecodeError { .. }));
    }

    #[test]
    fn test_wrong_field_type_is_a_decode_error() {
        let document = r#"{"resources": [{"name": 42}]}"#;
        let loader =
            SpecLoader::with_config(LoaderConfig::default().without_document_validation()).unwrap();

        let err = loader.load_str(document, Format::Json).unwrap_err();
        assert!(matches!(err, LoaderError::DecodeError { .. }));
    }

    #[test]
    fn test_strict_mode_reports_duplicates() {
        let loader = SpecLoader::with_config(LoaderConfig::default().with_mode(ValidationMode::Strict))
            .unwrap();
        let err = loader.load_str(DUPLICATED_SPEC, Format::Json).unwrap_err();

        assert_eq!(
            err.validation_errors().unwrap().to_string(),
            "resource \"r\" attribute \"x\" is duplicated"
        );
    }

    #[test]
    fn test_basic_mode_skips_duplicate_check() {
        let loader = SpecLoader::with_config(LoaderConfig::basic()).unwrap();
        assert!(loader.load_str(DUPLICATED_SPEC, Format::Json).is_ok());
    }

    #[test]
    fn test_schema_override_from_file() {
        let dir = TempDir::new().unwrap();
        // Grammar that only accepts documents without resources
        let path = write_file(
            &dir,
            "grammar.json",
            r#"{
                "$schema": "https://json-schema.org/draft/2020-12/schema",
                "type": "object",
                "properties": {"resources": {"type": "array", "maxItems": 0}}
            }"#,
        );

        let loader = SpecLoader::with_config(LoaderConfig::default().with_schema_path(&path)).unwrap();
        assert!(loader.load_str("{}", Format::Json).is_ok());
        assert!(matches!(
            loader.load_str(DUPLICATED_SPEC, Format::Json),
            Err(LoaderError::DocumentError { .. })
        ));
    }

    #[test]
    fn test_unparseable_schema_override() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "grammar.json", "not json");

        let err = SpecLoader::with_config(LoaderConfig::default().with_schema_path(&path))
            .unwrap_err();
        assert!(matches!(err, LoaderError::DocumentError { .. }));
        assert_eq!(err.path(), Some(path.as_path()));
    }
}

#[cfg(test)]
mod serialization {
    use super::*;

    #[test]
    fn test_json_output_uses_wire_names() {
        let loader = SpecLoader::new().unwrap();
        let spec = loader.load_str(JSON_SPEC, Format::Json).unwrap();

        let text = loader.to_string(&spec, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let ratio = &value["resources"][0]["schema"]["attributes"][0];

        assert_eq!(ratio["name"], "ratio");
        assert_eq!(ratio["float64"]["default"]["static"], 1.234);
        assert_eq!(
            ratio["float64"]["validators"][0]["custom"]["schema_definition"],
            "AtLeast(0)"
        );
    }

    #[test]
    fn test_object_types_survive_yaml() {
        let document = r#"{"resources": [{"name": "r", "schema": {"attributes": [
            {
                "name": "shape",
                "object": {
                    "computed_optional_required": "required",
                    "attribute_types": [
                        {"name": "label", "string": {}},
                        {"name": "rows", "list": {"element_type": {"object": [{"name": "cell", "int64": {}}]}}}
                    ]
                }
            },
            {
                "name": "points",
                "map": {"computed_optional_required": "optional", "element_type": {"object": [{"name": "x", "float64": {}}]}}
            }
        ]}}]}"#;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("objects.yml");
        let loader = SpecLoader::new().unwrap();
        let original = loader.load_str(document, Format::Json).unwrap();

        loader.save_file(&original, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains('!'), "unexpected YAML tag in:\n{}", text);
        assert_eq!(loader.load_file(&path).unwrap(), original);
    }

    #[test]
    fn test_non_finite_default_is_rejected_before_writing() {
        let spec = Specification {
            resources: vec![Resource::new(
                "r",
                Schema::with_attributes(vec![Attribute::new(
                    "ratio",
                    AttributeKind::Float64(
                        AttributeOptions::new(ComputedOptionalRequired::Optional)
                            .with_default(StaticDefault::literal(f64::NAN)),
                    ),
                )]),
            )],
            ..Default::default()
        };

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nan.json");
        let err = SpecLoader::new().unwrap().save_file(&spec, &path).unwrap_err();

        assert!(matches!(err, LoaderError::SerializeError { .. }));
        assert!(err.to_string().contains("resource \"r\" attribute \"ratio\""));
        assert!(!path.exists());
    }

    #[test]
    fn test_yaml_output_loads_back() {
        let loader = SpecLoader::new().unwrap();
        let spec = loader.load_str(YAML_SPEC, Format::Yaml).unwrap();

        let text = loader.to_string(&spec, Format::Yaml).unwrap();
        let reloaded = loader.load_str(&text, Format::Yaml).unwrap();
        assert_eq!(spec, reloaded);
    }
}
