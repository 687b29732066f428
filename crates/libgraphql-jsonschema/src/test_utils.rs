use crate::compile::CompileOptions;
use crate::compile::compile_operation_data;
use crate::direction::Direction;
use crate::operation::ExecutableDocument;
use crate::scalar::FnScalarCodec;
use crate::scalar::ScalarCodecError;
use crate::scalar::ScalarRegistry;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::transcode::ValidationResult;
use crate::transcode::transcode_operation_data;
use crate::walk::WalkContext;
use crate::walk_error::WalkError;
use serde_json::json;
use serde_json::Map;
use serde_json::Value;

pub(crate) const PETS_SCHEMA: &str = r#"
scalar Timestamp

enum PetKind {
  CAT
  DOG
}

interface Named {
  name: String!
}

type Cat implements Named {
  name: String!
  kind: PetKind!
  lives: Int
}

type Dog implements Named {
  name: String!
  kind: PetKind!
  barks: Boolean!
}

union Pet = Cat | Dog

type User implements Named {
  id: ID!
  name: String!
  nickname: String
  createdAt: Timestamp!
  tags: [String!]!
  scores: [Int]
  pet: Pet
  friends: [User!]
}

input UserFilter {
  name: String
  kind: PetKind!
  limit: Int = 10
  nested: UserFilter
}

type Query {
  user(id: ID!): User
  users(filter: UserFilter): [User!]!
  pets: [Pet!]!
  named: Named
  now: Timestamp!
}

type Mutation {
  touch(at: Timestamp!): User!
}
"#;

pub(crate) fn pets_schema() -> Schema {
    SchemaBuilder::from_str(None, PETS_SCHEMA)
        .unwrap()
        .build()
        .unwrap()
}

pub(crate) fn document(src: &str) -> ExecutableDocument {
    ExecutableDocument::parse(src).unwrap()
}

/// `Timestamp` travels as a numeric string and is worked with as an integer.
pub(crate) fn timestamp_codec() -> FnScalarCodec {
    FnScalarCodec::builder(json!({"type": "string", "pattern": "^[0-9]+$"}))
        .deserialized_schema(json!({"type": "integer"}))
        .parse(|value| value.as_str()
            .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|s| s.parse::<i64>().ok())
            .map(|n| json!(n))
            .ok_or_else(|| ScalarCodecError::new("expected a numeric string")))
        .serialize(|value| value.as_i64()
            .filter(|n| *n >= 0)
            .map(|n| json!(n.to_string()))
            .ok_or_else(|| ScalarCodecError::new("expected a non-negative integer")))
        .default_value(json!("0"))
        .build()
}

pub(crate) fn pets_scalars() -> ScalarRegistry {
    let mut scalars = ScalarRegistry::new();
    scalars.insert("Timestamp", timestamp_codec());
    scalars
}

/// Compile the data schema of the single operation in `src` against the pets
/// schema, synthesizing variables.
pub(crate) fn compile_pets_query(
    src: &str,
    direction: Direction,
    options: &CompileOptions,
) -> Result<Value, WalkError> {
    let schema = pets_schema();
    let scalars = pets_scalars();
    let doc = document(src);
    let op = doc.operation(None).unwrap();
    let ctx = WalkContext::for_operation(&schema, &doc, &op, &scalars, None, direction)?;
    compile_operation_data(&ctx, &op, options)
}

/// Transcode `data` for the single operation in `src` against the pets
/// schema.
pub(crate) fn transcode_pets_data(
    src: &str,
    variables: Option<&Map<String, Value>>,
    direction: Direction,
    data: &Value,
) -> Result<ValidationResult<Value>, WalkError> {
    let schema = pets_schema();
    let scalars = pets_scalars();
    let doc = document(src);
    let op = doc.operation(None).unwrap();
    let ctx = WalkContext::for_operation(&schema, &doc, &op, &scalars, variables, direction)?;
    transcode_operation_data(&ctx, &op, data)
}
