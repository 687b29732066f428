use super::issue_lines;
use crate::direction::Direction;
use crate::test_utils::document;
use crate::test_utils::pets_scalars;
use crate::test_utils::pets_schema;
use crate::test_utils::transcode_pets_data;
use crate::transcode::transcode_fragment_data;
use crate::walk::WalkContext;
use crate::walk_error::WalkError;
use proptest::prelude::*;
use serde_json::json;
use serde_json::Map;
use serde_json::Value;

fn normalize(src: &str, data: Value) -> Result<Value, Vec<String>> {
    transcode_pets_data(src, None, Direction::Normalize, &data)
        .unwrap()
        .map_err(|issues| issues.into_iter().map(|issue| issue.to_string()).collect())
}

fn normalize_issues(src: &str, data: Value) -> Vec<String> {
    issue_lines(transcode_pets_data(src, None, Direction::Normalize, &data).unwrap())
}

mod objects {
    use super::*;

    #[test]
    fn valid_data_passes_through() {
        let data = json!({
            "user": {"id": "u1", "name": "Ada", "nickname": null, "createdAt": "12"},
        });
        assert_eq!(
            normalize("{ user(id: 1) { id name nickname createdAt } }", data.clone()),
            Ok(data),
        );
    }

    #[test]
    fn output_follows_selection_order_and_drops_unselected_keys() {
        let transcoded = normalize(
            "{ user(id: 1) { id name } }",
            json!({"user": {"name": "Ada", "extra": true, "id": "u1"}}),
        ).unwrap();
        let user_keys: Vec<&String> = transcoded["user"].as_object().unwrap().keys().collect();
        assert_eq!(user_keys, vec!["id", "name"]);
    }

    #[test]
    fn aliases_are_response_keys() {
        let data = json!({"me": {"handle": "Ada"}});
        assert_eq!(normalize("{ me: user(id: 1) { handle: name } }", data.clone()), Ok(data));
    }

    #[test]
    fn missing_nullable_field_is_omitted() {
        assert_eq!(
            normalize("{ user(id: 1) { id nickname } }", json!({"user": {"id": "u1"}})),
            Ok(json!({"user": {"id": "u1"}})),
        );
    }

    #[test]
    fn missing_non_null_field() {
        assert_eq!(
            normalize_issues("{ user(id: 1) { id name } }", json!({"user": {"id": "u1"}})),
            vec!["$.user.name: Missing value for non-null field `User.name`"],
        );
    }

    #[test]
    fn null_in_non_null_position_reports_one_issue() {
        assert_eq!(
            normalize_issues(
                "{ user(id: 1) { id name } }",
                json!({"user": {"id": "u1", "name": null}}),
            ),
            vec!["$.user.name: Expected a non-null value of type `String!`"],
        );
    }

    #[test]
    fn root_must_be_an_object() {
        assert_eq!(
            normalize_issues("{ now }", json!([])),
            vec!["$: Expected an object for `Query`, got an array"],
        );
    }

    #[test]
    fn typename_must_match_the_object() {
        assert_eq!(
            normalize_issues(
                "{ user(id: 1) { __typename } }",
                json!({"user": {"__typename": "Cat"}}),
            ),
            vec!["$.user.__typename: Expected `__typename` to be \"User\", got \"Cat\""],
        );
    }

    #[test]
    fn sibling_issues_are_all_reported_in_walk_order() {
        assert_eq!(
            normalize_issues(
                "{ user(id: 1) { id name createdAt } now }",
                json!({"user": {"id": true, "createdAt": "soon"}, "now": "x"}),
            ),
            vec![
                "$.user.id: Expected an ID, got a boolean",
                "$.user.name: Missing value for non-null field `User.name`",
                "$.user.createdAt: Invalid value for scalar `Timestamp`: expected a numeric string",
                "$.now: Invalid value for scalar `Timestamp`: expected a numeric string",
            ],
        );
    }
}

mod lists {
    use super::*;

    #[test]
    fn every_failing_element_is_reported() {
        assert_eq!(
            normalize_issues(
                "{ user(id: 1) { tags } }",
                json!({"user": {"tags": ["a", 1, "b", false]}}),
            ),
            vec![
                "$.user.tags[1]: Expected a String, got a number",
                "$.user.tags[3]: Expected a String, got a boolean",
            ],
        );
    }

    #[test]
    fn nullable_items_accept_null() {
        let data = json!({"user": {"scores": [1, null, 3]}});
        assert_eq!(normalize("{ user(id: 1) { scores } }", data.clone()), Ok(data));
    }

    #[test]
    fn non_array_value() {
        assert_eq!(
            normalize_issues("{ user(id: 1) { tags } }", json!({"user": {"tags": "a"}})),
            vec!["$.user.tags: Expected a list of type `[String!]!`, got a string"],
        );
    }

    #[test]
    fn object_lists_track_indices() {
        assert_eq!(
            normalize_issues(
                "{ user(id: 1) { friends { name } } }",
                json!({"user": {"friends": [{"name": "Bob"}, {}]}}),
            ),
            vec!["$.user.friends[1].name: Missing value for non-null field `User.name`"],
        );
    }
}

mod abstract_types {
    use super::*;

    const PETS_QUERY: &str =
        "{ pets { __typename ... on Cat { kind lives } ... on Dog { barks } } }";

    #[test]
    fn typename_selects_the_concrete_type() {
        let data = json!({"pets": [
            {"__typename": "Cat", "kind": "CAT", "lives": 9},
            {"__typename": "Dog", "barks": true},
        ]});
        assert_eq!(normalize(PETS_QUERY, data.clone()), Ok(data));
    }

    #[test]
    fn fields_of_other_branches_are_not_expected() {
        assert_eq!(
            normalize_issues(PETS_QUERY, json!({"pets": [{"__typename": "Dog", "kind": "DOG"}]})),
            vec!["$.pets[0].barks: Missing value for non-null field `Dog.barks`"],
        );
    }

    #[test]
    fn missing_typename() {
        assert_eq!(
            normalize_issues(PETS_QUERY, json!({"pets": [{"kind": "CAT"}]})),
            vec![
                "$.pets[0]: Missing `__typename`, which is needed to resolve abstract type `Pet`",
            ],
        );
    }

    #[test]
    fn impossible_typename() {
        assert_eq!(
            normalize_issues(PETS_QUERY, json!({"pets": [{"__typename": "User"}]})),
            vec!["$.pets[0]: `User` is not a possible type of `Pet`"],
        );
    }

    #[test]
    fn unknown_typename() {
        assert_eq!(
            normalize_issues(PETS_QUERY, json!({"pets": [{"__typename": "Fish"}]})),
            vec!["$.pets[0]: `__typename` names unknown type `Fish`"],
        );
    }

    #[test]
    fn interface_with_shared_fields() {
        let data = json!({"named": {"__typename": "User", "name": "Ada", "id": "u1"}});
        assert_eq!(
            normalize("{ named { __typename name ... on User { id } } }", data.clone()),
            Ok(data),
        );
    }
}

mod leaves {
    use super::*;

    #[test]
    fn unknown_enum_value() {
        assert_eq!(
            normalize_issues(
                "{ pets { __typename ... on Cat { kind } } }",
                json!({"pets": [{"__typename": "Cat", "kind": "LION"}]}),
            ),
            vec!["$.pets[0].kind: Expected a value of enum `PetKind`, got \"LION\""],
        );
    }

    #[test]
    fn numeric_ids_become_strings() {
        assert_eq!(
            normalize("{ user(id: 1) { id } }", json!({"user": {"id": 7}})),
            Ok(json!({"user": {"id": "7"}})),
        );
    }

    #[test]
    fn custom_scalars_follow_direction() {
        let src = "{ now }";
        assert_eq!(
            transcode_pets_data(src, None, Direction::Deserialize, &json!({"now": "0042"}))
                .unwrap(),
            Ok(json!({"now": 42})),
        );
        assert_eq!(
            transcode_pets_data(src, None, Direction::Normalize, &json!({"now": "0042"}))
                .unwrap(),
            Ok(json!({"now": "42"})),
        );
        assert_eq!(
            transcode_pets_data(src, None, Direction::Serialize, &json!({"now": 42}))
                .unwrap(),
            Ok(json!({"now": "42"})),
        );
        assert_eq!(
            issue_lines(
                transcode_pets_data(src, None, Direction::Serialize, &json!({"now": -1}))
                    .unwrap(),
            ),
            vec!["$.now: Invalid value for scalar `Timestamp`: expected a non-negative integer"],
        );
    }
}

mod walk_errors {
    use super::*;

    #[test]
    fn unknown_field_aborts() {
        assert_eq!(
            transcode_pets_data(
                "{ user(id: 1) { email } }",
                None,
                Direction::Normalize,
                &json!({"user": {"email": "a@b.c"}}),
            ),
            Err(WalkError::UnknownField {
                field_name: "email".to_string(),
                type_name: "User".to_string(),
            }),
        );
    }

    #[test]
    fn fragment_on_scalar_aborts() {
        let schema = pets_schema();
        let scalars = pets_scalars();
        let doc = document("fragment Bad on Int { x }");
        let ctx = WalkContext::for_fragment(&schema, &doc, &scalars, None, Direction::Normalize);
        assert_eq!(
            transcode_fragment_data(&ctx, doc.fragment("Bad").unwrap(), &json!({})),
            Err(WalkError::FragmentOnNonCompositeType {
                fragment_name: "Bad".to_string(),
                type_name: "Int".to_string(),
            }),
        );
    }
}

#[test]
fn skipped_fields_are_not_expected() {
    let src = "query ($s: Boolean!) { user(id: 1) { id name @skip(if: $s) } }";
    let mut variables = Map::new();
    variables.insert("s".to_string(), json!(true));
    assert_eq!(
        transcode_pets_data(
            src,
            Some(&variables),
            Direction::Normalize,
            &json!({"user": {"id": "u1", "name": "Ada"}}),
        ).unwrap(),
        Ok(json!({"user": {"id": "u1"}})),
    );
}

mod fragment_reuse {
    use super::*;

    const DIAMOND_QUERY: &str = concat!(
        "query { user(id: 1) { ...A ...B } }\n",
        "fragment A on User { ...C name }\n",
        "fragment B on User { ...C }\n",
        "fragment C on User { id }",
    );

    const NESTED_REUSE_QUERY: &str = concat!(
        "query { user(id: 1) { ...F friends { ...F } } }\n",
        "fragment F on User { id name }",
    );

    #[test]
    fn diamond_spreads_resolve_each_key_once() {
        let transcoded = normalize(
            DIAMOND_QUERY,
            json!({"user": {"name": "Ada", "id": "u1", "extra": 1}}),
        ).unwrap();
        assert_eq!(transcoded, json!({"user": {"id": "u1", "name": "Ada"}}));
        let user_keys: Vec<&String> = transcoded["user"].as_object().unwrap().keys().collect();
        assert_eq!(user_keys, vec!["id", "name"]);
    }

    #[test]
    fn diamond_reports_a_shared_field_once() {
        assert_eq!(
            normalize_issues(DIAMOND_QUERY, json!({"user": {"name": "Ada"}})),
            vec!["$.user.id: Missing value for non-null field `User.id`"],
        );
    }

    #[test]
    fn fragment_reused_at_unrelated_depths() {
        let data = json!({
            "user": {
                "id": "u1",
                "name": "Ada",
                "friends": [{"id": "u2", "name": "Bob"}],
            },
        });
        assert_eq!(normalize(NESTED_REUSE_QUERY, data.clone()), Ok(data));
        assert_eq!(
            normalize_issues(
                NESTED_REUSE_QUERY,
                json!({"user": {"id": "u1", "name": "Ada", "friends": [{"id": "u2"}]}}),
            ),
            vec!["$.user.friends[0].name: Missing value for non-null field `User.name`"],
        );
    }
}

#[test]
fn fragment_data() {
    let schema = pets_schema();
    let scalars = pets_scalars();
    let doc = document("fragment CatBits on Cat { name lives }");
    let ctx = WalkContext::for_fragment(&schema, &doc, &scalars, None, Direction::Normalize);
    let data = json!({"name": "Tom", "lives": null});
    assert_eq!(
        transcode_fragment_data(&ctx, doc.fragment("CatBits").unwrap(), &data).unwrap(),
        Ok(data),
    );
}

proptest! {
    #[test]
    fn normalizing_is_idempotent(
        timestamp in "[0-9]{1,12}",
        name in "[a-zA-Z ]{0,16}",
        scores in proptest::collection::vec(proptest::option::of(-1000i32..1000), 0..5),
    ) {
        let src = "{ user(id: 1) { name createdAt scores } }";
        let data = json!({
            "user": {"name": name, "createdAt": timestamp, "scores": scores},
        });

        let once = normalize(src, data).unwrap();
        let twice = normalize(src, once.clone()).unwrap();
        prop_assert_eq!(&twice, &once);

        let deserialized = transcode_pets_data(src, None, Direction::Deserialize, &once)
            .unwrap()
            .unwrap();
        let serialized = transcode_pets_data(src, None, Direction::Serialize, &deserialized)
            .unwrap()
            .unwrap();
        prop_assert_eq!(serialized, once);
    }

    #[test]
    fn every_bad_list_item_is_reported(
        items in proptest::collection::vec(
            prop_oneof![
                "[a-z]{0,4}".prop_map(Value::from),
                any::<i32>().prop_map(Value::from),
            ],
            0..12,
        ),
    ) {
        let bad_paths: Vec<String> = items.iter()
            .enumerate()
            .filter(|(_, item)| !item.is_string())
            .map(|(idx, _)| format!("$.user.tags[{idx}]"))
            .collect();
        let result = transcode_pets_data(
            "{ user(id: 1) { tags } }",
            None,
            Direction::Normalize,
            &json!({"user": {"tags": items}}),
        ).unwrap();

        match result {
            Ok(_) => {
                prop_assert!(bad_paths.is_empty());
            },
            Err(issues) => {
                let paths: Vec<String> = issues.into_iter()
                    .map(|issue| issue.path_string())
                    .collect();
                prop_assert_eq!(paths, bad_paths);
            },
        }
    }
}
