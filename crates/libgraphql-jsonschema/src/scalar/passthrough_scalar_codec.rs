use crate::scalar::ScalarCodec;
use crate::scalar::ScalarCodecError;
use inherent::inherent;
use serde_json::Value;

/// A [`ScalarCodec`] that accepts any JSON value and leaves it unchanged in
/// every direction. Its schema is the permissive `{}`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PassthroughScalarCodec {
    default_value: Value,
}
impl PassthroughScalarCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_value(default_value: Value) -> Self {
        Self {
            default_value,
        }
    }
}

#[inherent]
impl ScalarCodec for PassthroughScalarCodec {
    pub fn serialized_schema(&self) -> Value {
        Value::Object(serde_json::Map::new())
    }

    pub fn parse(&self, value: &Value) -> Result<Value, ScalarCodecError> {
        Ok(value.clone())
    }

    pub fn serialize(&self, value: &Value) -> Result<Value, ScalarCodecError> {
        Ok(value.clone())
    }

    pub fn default_value(&self) -> Option<Value> {
        Some(self.default_value.clone())
    }
}
