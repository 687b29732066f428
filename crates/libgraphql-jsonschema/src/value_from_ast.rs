use crate::ast;
use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

type Result<T> = std::result::Result<T, ValueFromAstError>;

/// Convert a literal (or variable reference) from an executable document into
/// a JSON value. Variables that are absent from `variables` resolve to
/// `null`, matching how an omitted nullable variable behaves at execution.
pub fn value_from_ast(
    value: &ast::operation::Value,
    variables: &Map<String, Value>,
) -> Result<Value> {
    use ast::operation::Value as AstValue;
    match value {
        AstValue::Null => Ok(Value::Null),
        AstValue::Boolean(b) => Ok(Value::Bool(*b)),
        AstValue::String(s) => Ok(Value::String(s.to_string())),
        AstValue::Enum(e) => Ok(Value::String(e.to_string())),
        AstValue::Int(n) => {
            let n = n.as_i64().ok_or_else(|| ValueFromAstError::IntOutOfRange(
                format!("{n:?}"),
            ))?;
            Ok(Value::from(n))
        },
        AstValue::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .ok_or(ValueFromAstError::NonFiniteFloat(*f)),
        AstValue::List(items) => items
            .iter()
            .map(|item| value_from_ast(item, variables))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        AstValue::Object(fields) => fields
            .iter()
            .map(|(key, val)| {
                value_from_ast(val, variables).map(|val| (key.to_string(), val))
            })
            .collect::<Result<Map<_, _>>>()
            .map(Value::Object),
        AstValue::Variable(var_name) => Ok(
            variables.get(var_name.as_str()).cloned().unwrap_or(Value::Null)
        ),
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValueFromAstError {
    #[error("Integer literal `{0}` does not fit in 64 bits")]
    IntOutOfRange(String),

    #[error("Float literal `{0}` is not a finite number")]
    NonFiniteFloat(f64),
}
