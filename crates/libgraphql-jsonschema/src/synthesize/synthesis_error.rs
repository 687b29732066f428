use crate::value_from_ast::ValueFromAstError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SynthesisError {
    #[error(
        "Can't synthesize a value for `{}`: its non-null fields refer back to \
        it through {}",
        .path.first().map(String::as_str).unwrap_or_default(),
        .path.join(" -> ")
    )]
    InputObjectCycle {
        path: Vec<String>,
    },

    #[error("`{name}` has an invalid default value: {err}")]
    InvalidDefaultValue {
        name: String,
        err: ValueFromAstError,
    },

    #[error("No scalar codec is registered for custom scalar `{0}`")]
    MissingScalarCodec(String),

    #[error("The codec for scalar `{0}` provides no default value to synthesize")]
    MissingScalarDefault(String),

    #[error("`{name}` is declared with `{type_name}`, which is not an input type")]
    NotAnInputType {
        name: String,
        type_name: String,
    },

    #[error("Type `{0}` is not defined in the schema")]
    UnknownType(String),
}
