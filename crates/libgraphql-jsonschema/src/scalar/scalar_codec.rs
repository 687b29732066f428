use crate::direction::Direction;
use serde_json::Value;
use thiserror::Error;

/// The contract for a custom scalar: the JSON Schema describing each of its
/// representations, and the conversions between them.
///
/// A codec works on two representations. The *serialized* form is what
/// travels over the wire. The *deserialized* form is what application code
/// works with after [`parse`](ScalarCodec::parse). Both are expressed as JSON
/// values so that the transcoder can hand them back to callers untouched.
pub trait ScalarCodec: Send + Sync + std::fmt::Debug {
    /// JSON Schema for the wire representation.
    fn serialized_schema(&self) -> Value;

    /// JSON Schema for the runtime representation. Defaults to the serialized
    /// schema for codecs whose two forms share a shape.
    fn deserialized_schema(&self) -> Value {
        self.serialized_schema()
    }

    /// Convert a wire value into its runtime form.
    fn parse(&self, value: &Value) -> Result<Value, ScalarCodecError>;

    /// Convert a runtime value into its wire form.
    fn serialize(&self, value: &Value) -> Result<Value, ScalarCodecError>;

    /// A placeholder value used when synthesizing variables for a non-null
    /// position. Codecs without one can't be used in synthesized variables.
    fn default_value(&self) -> Option<Value> {
        None
    }

    fn schema_for(&self, direction: Direction) -> Value {
        match direction {
            Direction::Deserialize => self.deserialized_schema(),
            Direction::Normalize | Direction::Serialize => self.serialized_schema(),
        }
    }

    fn transcode(
        &self,
        value: &Value,
        direction: Direction,
    ) -> Result<Value, ScalarCodecError> {
        match direction {
            Direction::Deserialize => self.parse(value),
            Direction::Normalize => self.serialize(&self.parse(value)?),
            Direction::Serialize => self.serialize(value),
        }
    }
}

/// A value a [`ScalarCodec`] could not convert. The message ends up in the
/// [`ValidationIssue`](crate::transcode::ValidationIssue) reported for the
/// offending position.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct ScalarCodecError {
    message: String,
}
impl ScalarCodecError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}
