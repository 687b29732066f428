use crate::ast;
use crate::schema::SchemaBuilder;
use crate::test_utils::pets_schema;
use crate::types::ObjectType;
use crate::types::TypeSystem;
use serde_json::json;
use serde_json::Map;

fn names<'a>(types: impl IntoIterator<Item = &'a ObjectType>) -> Vec<&'a str> {
    types.into_iter().map(|obj| obj.name()).collect()
}

#[test]
fn union_possible_types_follow_declaration_order() {
    let schema = pets_schema();
    let pet = schema.type_by_name("Pet").unwrap();
    assert_eq!(names(schema.possible_types(pet)), vec!["Cat", "Dog"]);
}

#[test]
fn interface_possible_types_are_sorted() {
    let schema = pets_schema();
    let named = schema.type_by_name("Named").unwrap();
    assert_eq!(names(schema.possible_types(named)), vec!["Cat", "Dog", "User"]);
}

#[test]
fn transitive_interface_implementations() {
    let schema = SchemaBuilder::from_str(None, concat!(
        "interface Node { id: ID! }\n",
        "interface Entity implements Node { id: ID! }\n",
        "type Thing implements Entity & Node { id: ID! }\n",
        "type Query { node: Node }",
    )).unwrap().build().unwrap();

    let node = schema.type_by_name("Node").unwrap();
    let entity = schema.type_by_name("Entity").unwrap();
    let thing = schema.type_by_name("Thing").unwrap();
    assert!(schema.is_subtype(node, entity));
    assert!(schema.is_subtype(node, thing));
    assert!(schema.is_subtype(entity, thing));
    assert!(!schema.is_subtype(entity, node));
    assert_eq!(names(schema.possible_types(node)), vec!["Thing"]);
}

#[test]
fn is_subtype() {
    let schema = pets_schema();
    let pet = schema.type_by_name("Pet").unwrap();
    let cat = schema.type_by_name("Cat").unwrap();
    let user = schema.type_by_name("User").unwrap();
    let named = schema.type_by_name("Named").unwrap();

    assert!(schema.is_subtype(pet, cat));
    assert!(!schema.is_subtype(pet, user));
    assert!(schema.is_subtype(named, user));
    assert!(schema.is_subtype(cat, cat));
    assert!(!schema.is_subtype(cat, pet));
}

#[test]
fn possible_types_of_an_object_is_empty() {
    let schema = pets_schema();
    let cat = schema.type_by_name("Cat").unwrap();
    assert!(schema.possible_types(cat).is_empty());
}

#[test]
fn coerce_argument_value_resolves_variables() {
    let schema = pets_schema();
    let doc = ast::operation::parse("{ a(x: [$v, 2, \"s\"]) }").unwrap();
    let ast::operation::Definition::Operation(
        ast::operation::OperationDefinition::SelectionSet(set),
    ) = &doc.definitions[0] else {
        panic!("expected a shorthand query");
    };
    let ast::operation::Selection::Field(field) = &set.items[0] else {
        panic!("expected a field");
    };

    let mut variables = Map::new();
    variables.insert("v".to_string(), json!(true));
    let coerced = schema.coerce_argument_value(&field.arguments[0].1, &variables).unwrap();
    assert_eq!(coerced, json!([true, 2, "s"]));
}
