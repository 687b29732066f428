use crate::compile::make_nullable;
use serde_json::json;

#[test]
fn widens_single_type() {
    assert_eq!(
        make_nullable(json!({"type": "string"})),
        json!({"type": ["string", "null"]}),
    );
}

#[test]
fn widens_type_list_once() {
    assert_eq!(
        make_nullable(json!({"type": ["string", "integer"]})),
        json!({"type": ["string", "integer", "null"]}),
    );
    assert_eq!(
        make_nullable(json!({"type": ["string", "null"]})),
        json!({"type": ["string", "null"]}),
    );
}

#[test]
fn ref_is_wrapped_in_any_of() {
    assert_eq!(
        make_nullable(json!({"$ref": "#/$defs/enum/PetKind"})),
        json!({"anyOf": [{"$ref": "#/$defs/enum/PetKind"}, {"type": "null"}]}),
    );
}

#[test]
fn any_of_gets_null_prepended() {
    assert_eq!(
        make_nullable(json!({"anyOf": [{"type": "object"}]})),
        json!({"anyOf": [{"type": "null"}, {"type": "object"}]}),
    );
}

#[test]
fn enum_and_const_accept_null() {
    assert_eq!(
        make_nullable(json!({"type": "string", "enum": ["A", "B"]})),
        json!({"type": ["string", "null"], "enum": ["A", "B", null]}),
    );
    assert_eq!(
        make_nullable(json!({"type": "string", "const": "Cat"})),
        json!({"type": ["string", "null"], "enum": ["Cat", null]}),
    );
}

#[test]
fn never_and_always_schemas() {
    assert_eq!(make_nullable(json!({"not": {}})), json!({"type": "null"}));
    assert_eq!(make_nullable(json!({})), json!({}));
}

#[test]
fn object_with_all_of_is_wrapped() {
    let schema = json!({
        "type": "object",
        "properties": {},
        "required": [],
        "allOf": [{"type": "object"}],
    });
    assert_eq!(
        make_nullable(schema.clone()),
        json!({"anyOf": [schema, {"type": "null"}]}),
    );
}

#[test]
fn untyped_schema_is_wrapped() {
    assert_eq!(
        make_nullable(json!({"pattern": "^a"})),
        json!({"anyOf": [{"pattern": "^a"}, {"type": "null"}]}),
    );
}
