use crate::types::GraphQLType;
use serde_json::json;
use serde_json::Value;

/// The scalars every GraphQL schema provides.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BuiltinScalar {
    Boolean,
    Float,
    ID,
    Int,
    String,
}
impl BuiltinScalar {
    pub const ALL: [BuiltinScalar; 5] = [
        Self::Boolean,
        Self::Float,
        Self::ID,
        Self::Int,
        Self::String,
    ];

    /// A canonical placeholder of the right shape, used when synthesizing
    /// variables.
    pub fn fake_value(&self) -> Value {
        match self {
            Self::Boolean => json!(false),
            Self::Float => json!(0.0),
            Self::ID => json!("0"),
            Self::Int => json!(0),
            Self::String => json!(""),
        }
    }

    pub fn from_graphql_type(type_: &GraphQLType) -> Option<Self> {
        match type_ {
            GraphQLType::Bool => Some(Self::Boolean),
            GraphQLType::Float => Some(Self::Float),
            GraphQLType::ID => Some(Self::ID),
            GraphQLType::Int => Some(Self::Int),
            GraphQLType::String => Some(Self::String),
            _ => None,
        }
    }

    /// The inline JSON Schema for this scalar. `ID` is always represented as
    /// a string, and `Int` carries the same 32-bit bounds `validate` checks.
    pub fn json_schema(&self) -> Value {
        match self {
            Self::Boolean => json!({"type": "boolean"}),
            Self::Float => json!({"type": "number"}),
            Self::ID => json!({"type": "string"}),
            Self::Int => json!({
                "type": "integer",
                "minimum": i32::MIN,
                "maximum": i32::MAX,
            }),
            Self::String => json!({"type": "string"}),
        }
    }

    pub fn graphql_type(&self) -> GraphQLType {
        match self {
            Self::Boolean => GraphQLType::Bool,
            Self::Float => GraphQLType::Float,
            Self::ID => GraphQLType::ID,
            Self::Int => GraphQLType::Int,
            Self::String => GraphQLType::String,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::String => "String",
        }
    }

    /// Check `value` against this scalar, producing the canonical value on
    /// success or an issue message on failure.
    pub fn validate(&self, value: &Value) -> Result<Value, String> {
        match (self, value) {
            (Self::Boolean, Value::Bool(_))
            | (Self::String, Value::String(_))
            | (Self::ID, Value::String(_))
                => Ok(value.clone()),

            (Self::Float, Value::Number(n)) if n.as_f64().is_some_and(f64::is_finite)
                => Ok(value.clone()),

            (Self::Int, Value::Number(n)) => match n.as_i64() {
                Some(n) if i32::try_from(n).is_ok() => Ok(value.clone()),
                _ => Err(format!(
                    "Expected an Int (a 32-bit signed integer), got {n}",
                )),
            },

            (Self::ID, Value::Number(n)) if n.is_i64() || n.is_u64()
                => Ok(Value::String(n.to_string())),

            (_, other) => Err(format!(
                "Expected {} {}, got {}",
                match self {
                    Self::ID | Self::Int => "an",
                    _ => "a",
                },
                self.name(),
                json_kind(other),
            )),
        }
    }
}

/// A short human-readable name for the kind of a JSON value.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "an array",
        Value::Bool(_) => "a boolean",
        Value::Null => "null",
        Value::Number(_) => "a number",
        Value::Object(_) => "an object",
        Value::String(_) => "a string",
    }
}
