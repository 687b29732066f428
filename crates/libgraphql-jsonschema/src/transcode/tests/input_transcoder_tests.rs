use super::issue_lines;
use crate::direction::Direction;
use crate::test_utils::document;
use crate::test_utils::pets_scalars;
use crate::test_utils::pets_schema;
use crate::transcode::ValidationResult;
use crate::transcode::transcode_variables;
use crate::walk::WalkContext;
use crate::walk_error::WalkError;
use serde_json::json;
use serde_json::Value;

const VARS_QUERY: &str =
    "query ($filter: UserFilter, $id: ID!, $at: Timestamp!, $n: Int = 3) { now }";

fn transcode_vars(
    src: &str,
    direction: Direction,
    variables: Value,
) -> Result<ValidationResult<Value>, WalkError> {
    let schema = pets_schema();
    let scalars = pets_scalars();
    let doc = document(src);
    let op = doc.operation(None).unwrap();
    let ctx = WalkContext::new(&schema, doc.fragment_registry(), &scalars, direction);
    transcode_variables(&ctx, op.variable_definitions(), &variables)
}

#[test]
fn declared_variables_are_transcoded() {
    let transcoded = transcode_vars(VARS_QUERY, Direction::Deserialize, json!({
        "at": "0012",
        "id": 5,
        "filter": {"nested": {"kind": "CAT"}, "kind": "DOG"},
        "undeclared": true,
    })).unwrap().unwrap();

    assert_eq!(transcoded, json!({
        "filter": {"kind": "DOG", "nested": {"kind": "CAT"}},
        "id": "5",
        "at": 12,
    }));
    let keys: Vec<&String> = transcoded.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["filter", "id", "at"]);
}

#[test]
fn missing_required_variables() {
    assert_eq!(
        issue_lines(transcode_vars(VARS_QUERY, Direction::Normalize, json!({})).unwrap()),
        vec![
            "$.id: Missing value for required variable `$id` of type `ID!`",
            "$.at: Missing value for required variable `$at` of type `Timestamp!`",
        ],
    );
}

#[test]
fn explicit_null_for_non_null_variable() {
    assert_eq!(
        issue_lines(
            transcode_vars(VARS_QUERY, Direction::Normalize, json!({"id": null, "at": "1"}))
                .unwrap(),
        ),
        vec!["$.id: Expected a non-null value of type `ID!`"],
    );
}

#[test]
fn explicit_null_for_nullable_variable_is_kept() {
    assert_eq!(
        transcode_vars(
            VARS_QUERY,
            Direction::Normalize,
            json!({"id": "1", "at": "1", "filter": null, "n": null}),
        ).unwrap(),
        Ok(json!({"filter": null, "id": "1", "at": "1", "n": null})),
    );
}

#[test]
fn input_object_issues() {
    assert_eq!(
        issue_lines(transcode_vars(VARS_QUERY, Direction::Normalize, json!({
            "id": "1",
            "at": "1",
            "filter": {"color": "red", "limit": "ten", "nested": {}},
        })).unwrap()),
        vec![
            "$.filter.color: Unknown field `color` on input type `UserFilter`",
            "$.filter.kind: Missing value for required input field `UserFilter.kind`",
            "$.filter.limit: Expected an Int, got a string",
            "$.filter.nested.kind: Missing value for required input field `UserFilter.kind`",
        ],
    );
}

#[test]
fn list_variables() {
    let src = "query ($kinds: [PetKind!]!) { now }";
    assert_eq!(
        transcode_vars(src, Direction::Normalize, json!({"kinds": ["CAT", "DOG"]})).unwrap(),
        Ok(json!({"kinds": ["CAT", "DOG"]})),
    );
    assert_eq!(
        issue_lines(
            transcode_vars(src, Direction::Normalize, json!({"kinds": ["CAT", "FISH"]}))
                .unwrap(),
        ),
        vec!["$.kinds[1]: Expected a value of enum `PetKind`, got \"FISH\""],
    );
}

#[test]
fn variables_must_be_an_object() {
    assert_eq!(
        issue_lines(transcode_vars(VARS_QUERY, Direction::Normalize, json!([1])).unwrap()),
        vec!["$: Expected an object of variables, got an array"],
    );
}

#[test]
fn output_type_variable_aborts() {
    assert_eq!(
        transcode_vars("query ($u: User) { now }", Direction::Normalize, json!({"u": {}})),
        Err(WalkError::InputTypeExpected {
            type_name: "User".to_string(),
            variable_name: "u".to_string(),
        }),
    );
}
