use crate::compile::CompileOptions;
use crate::compose::SchemaValidator;
use crate::compose::validate_sync;
use crate::dialect::Dialect;
use crate::direction::Direction;
use crate::document_schemas::OperationSchemas;
use crate::operation::DocumentBuildError;
use crate::operation::ExecutableDocument;
use crate::test_utils::pets_scalars;
use crate::test_utils::pets_schema;
use crate::walk_error::WalkError;
use rayon::prelude::*;
use serde_json::json;
use serde_json::Map;
use serde_json::Value;
use std::sync::Arc;

const DOCUMENT: &str = concat!(
    "query GetUser($id: ID!, $withName: Boolean = false) {\n",
    "  user(id: $id) { id createdAt name @include(if: $withName) }\n",
    "}\n",
    "query Now { now }\n",
);

fn operation_schemas(
    operation_name: Option<&str>,
    direction: Direction,
) -> Result<OperationSchemas, DocumentBuildError> {
    OperationSchemas::new(
        Arc::new(pets_schema()),
        Arc::new(ExecutableDocument::parse(DOCUMENT).unwrap()),
        operation_name,
        Arc::new(pets_scalars()),
        direction,
    )
}

fn get_user() -> OperationSchemas {
    operation_schemas(Some("GetUser"), Direction::Normalize).unwrap()
}

fn user_property_names(schema: &Value) -> Vec<&str> {
    schema.pointer("/properties/user/properties")
        .unwrap()
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect()
}

mod construction {
    use super::*;

    #[test]
    fn resolves_the_named_operation() {
        let schemas = get_user();
        assert_eq!(schemas.operation_name(), Some("GetUser"));
        assert_eq!(schemas.direction(), Direction::Normalize);
    }

    #[test]
    fn ambiguous_or_unknown_operations_fail() {
        assert!(matches!(
            operation_schemas(None, Direction::Normalize),
            Err(DocumentBuildError::AmbiguousOperation { .. }),
        ));
        assert_eq!(
            operation_schemas(Some("Nope"), Direction::Normalize).unwrap_err(),
            DocumentBuildError::UnknownOperation("Nope".to_string()),
        );
    }
}

mod schemas {
    use super::*;

    #[test]
    fn data_schema_is_stamped() {
        let schema = get_user().data()
            .json_schema(Dialect::Draft2020_12, &CompileOptions::default())
            .unwrap();
        let first_key = schema.as_object().unwrap().keys().next().unwrap();
        assert_eq!(first_key, "$schema");
        assert_eq!(
            schema.get("$schema").unwrap(),
            &json!("https://json-schema.org/draft/2020-12/schema"),
        );
        assert_eq!(user_property_names(&schema), vec!["id", "createdAt"]);
    }

    #[test]
    fn supplied_variables_drive_directives() {
        let schemas = get_user().with_variable_values({
            let mut variables = Map::new();
            variables.insert("id".to_string(), json!("u1"));
            variables.insert("withName".to_string(), json!(true));
            variables
        });
        let schema = schemas.data()
            .json_schema(Dialect::Draft2020_12, &CompileOptions::default())
            .unwrap();
        assert_eq!(user_property_names(&schema), vec!["id", "createdAt", "name"]);
    }

    #[test]
    fn variables_schema() {
        let schema = get_user().variables()
            .json_schema(Dialect::Draft07, &CompileOptions::default())
            .unwrap();
        assert_eq!(schema, json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "id": {"type": "string"},
                "withName": {"type": ["boolean", "null"]},
            },
            "required": ["id"],
        }));
    }

    #[test]
    fn response_schema_nests_nullable_data() {
        let schema = get_user().response()
            .json_schema(Dialect::Draft2020_12, &CompileOptions::default())
            .unwrap();
        let properties: Vec<&String> = schema.get("properties").unwrap()
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(properties, vec!["errors", "extensions", "data"]);
        assert_eq!(
            schema.pointer("/properties/data/type").unwrap(),
            &json!(["object", "null"]),
        );
        assert!(schema.pointer("/properties/data/$schema").is_none());
        assert_eq!(
            schema.pointer("/$defs/scalar/Timestamp").unwrap(),
            &json!({"type": "string", "pattern": "^[0-9]+$"}),
        );
    }

    #[test]
    fn response_schema_accepts_valid_responses() {
        let schema = get_user().response()
            .json_schema(Dialect::Draft2020_12, &CompileOptions::default())
            .unwrap();
        let validator = jsonschema::validator_for(&schema).unwrap();
        assert!(validator.is_valid(&json!({
            "data": {"user": {"id": "u1", "createdAt": "1"}},
        })));
        assert!(validator.is_valid(&json!({"data": null, "errors": [{"message": "no"}]})));
        assert!(!validator.is_valid(&json!({"data": {"user": {"id": "u1"}}})));
        assert!(!validator.is_valid(&json!({"data": null, "bogus": 1})));
    }
}

mod validation {
    use super::*;

    fn issue_lines(validator: &dyn SchemaValidator, value: Value) -> Vec<String> {
        validate_sync(validator, &value)
            .unwrap()
            .unwrap_err()
            .into_iter()
            .map(|issue| issue.to_string())
            .collect()
    }

    #[test]
    fn response_issues_are_located_under_data() {
        assert_eq!(
            issue_lines(
                &get_user().response(),
                json!({"data": {"user": {"id": "u1", "createdAt": "soon"}}, "errors": {}}),
            ),
            vec![
                "$.errors: Expected `errors` to be null or a list, got an object",
                "$.data.user.createdAt: Invalid value for scalar `Timestamp`: expected a numeric string",
            ],
        );
    }

    #[test]
    fn response_accepts_null_data() {
        let response = json!({"data": null, "errors": [{"message": "boom"}]});
        assert_eq!(validate_sync(&get_user().response(), &response), Ok(Ok(response.clone())));
    }

    #[test]
    fn data_validator_returns_transcoded_data() {
        let schemas = operation_schemas(Some("Now"), Direction::Deserialize).unwrap();
        assert_eq!(
            validate_sync(&schemas.data(), &json!({"now": "0042"})),
            Ok(Ok(json!({"now": 42}))),
        );
    }

    #[test]
    fn variables_are_validated() {
        let schemas = get_user();
        assert_eq!(
            issue_lines(&schemas.variables(), json!({"withName": "yes"})),
            vec![
                "$.id: Missing value for required variable `$id` of type `ID!`",
                "$.withName: Expected a Boolean, got a string",
            ],
        );
        assert_eq!(
            validate_sync(&schemas.variables(), &json!({"id": 3})),
            Ok(Ok(json!({"id": "3"}))),
        );
    }

    #[test]
    fn missing_codec_is_a_walk_error() {
        let schemas = OperationSchemas::new(
            Arc::new(pets_schema()),
            Arc::new(ExecutableDocument::parse("{ now }").unwrap()),
            None,
            Arc::new(crate::scalar::ScalarRegistry::new()),
            Direction::Normalize,
        ).unwrap();
        assert_eq!(
            schemas.data().json_schema(Dialect::Draft07, &CompileOptions::default()),
            Err(WalkError::MissingScalarCodec("Timestamp".to_string())),
        );
    }

    #[test]
    fn validators_are_shareable_across_threads() {
        let response = get_user().response();
        let results: Vec<bool> = (0..16u64)
            .into_par_iter()
            .map(|n| {
                let value = json!({"data": {"user": {"id": n, "createdAt": n.to_string()}}});
                validate_sync(&response, &value).unwrap().is_ok()
            })
            .collect();
        assert!(results.into_iter().all(|ok| ok));
    }
}
