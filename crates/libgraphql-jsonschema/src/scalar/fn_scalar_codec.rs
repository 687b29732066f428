use crate::scalar::ScalarCodec;
use crate::scalar::ScalarCodecError;
use inherent::inherent;
use serde_json::Value;
use std::sync::Arc;

type ConvertFn =
    Arc<dyn Fn(&Value) -> Result<Value, ScalarCodecError> + Send + Sync>;

/// A [`ScalarCodec`] assembled from closures.
///
/// ```
/// use libgraphql_jsonschema::scalar::FnScalarCodec;
/// use libgraphql_jsonschema::scalar::ScalarCodecError;
/// use serde_json::json;
///
/// let timestamp = FnScalarCodec::builder(json!({"type": "string"}))
///     .deserialized_schema(json!({"type": "integer"}))
///     .parse(|value| value.as_str()
///         .and_then(|s| s.parse::<i64>().ok())
///         .map(|n| json!(n))
///         .ok_or_else(|| ScalarCodecError::new("expected a numeric string")))
///     .serialize(|value| value.as_i64()
///         .map(|n| json!(n.to_string()))
///         .ok_or_else(|| ScalarCodecError::new("expected an integer")))
///     .default_value(json!("0"))
///     .build();
/// ```
#[derive(Clone)]
pub struct FnScalarCodec {
    default_value: Option<Value>,
    deserialized_schema: Value,
    parse: ConvertFn,
    serialize: ConvertFn,
    serialized_schema: Value,
}
impl FnScalarCodec {
    pub fn builder(serialized_schema: Value) -> FnScalarCodecBuilder {
        FnScalarCodecBuilder {
            default_value: None,
            deserialized_schema: None,
            parse: None,
            serialize: None,
            serialized_schema,
        }
    }
}

#[inherent]
impl ScalarCodec for FnScalarCodec {
    pub fn serialized_schema(&self) -> Value {
        self.serialized_schema.clone()
    }

    pub fn deserialized_schema(&self) -> Value {
        self.deserialized_schema.clone()
    }

    pub fn parse(&self, value: &Value) -> Result<Value, ScalarCodecError> {
        (self.parse)(value)
    }

    pub fn serialize(&self, value: &Value) -> Result<Value, ScalarCodecError> {
        (self.serialize)(value)
    }

    pub fn default_value(&self) -> Option<Value> {
        self.default_value.clone()
    }
}
impl std::fmt::Debug for FnScalarCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnScalarCodec")
            .field("default_value", &self.default_value)
            .field("deserialized_schema", &self.deserialized_schema)
            .field("serialized_schema", &self.serialized_schema)
            .finish_non_exhaustive()
    }
}

/// Builder for [`FnScalarCodec`]. Conversions that aren't provided default
/// to the identity function.
pub struct FnScalarCodecBuilder {
    default_value: Option<Value>,
    deserialized_schema: Option<Value>,
    parse: Option<ConvertFn>,
    serialize: Option<ConvertFn>,
    serialized_schema: Value,
}
impl FnScalarCodecBuilder {
    pub fn build(self) -> FnScalarCodec {
        let identity: ConvertFn = Arc::new(|value: &Value| Ok(value.clone()));
        FnScalarCodec {
            default_value: self.default_value,
            deserialized_schema: self.deserialized_schema
                .unwrap_or_else(|| self.serialized_schema.clone()),
            parse: self.parse.unwrap_or_else(|| identity.clone()),
            serialize: self.serialize.unwrap_or(identity),
            serialized_schema: self.serialized_schema,
        }
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn deserialized_schema(mut self, schema: Value) -> Self {
        self.deserialized_schema = Some(schema);
        self
    }

    pub fn parse<F>(mut self, parse: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, ScalarCodecError> + Send + Sync + 'static,
    {
        self.parse = Some(Arc::new(parse));
        self
    }

    pub fn serialize<F>(mut self, serialize: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, ScalarCodecError> + Send + Sync + 'static,
    {
        self.serialize = Some(Arc::new(serialize));
        self
    }
}
