use crate::operation::OperationKind;
use crate::synthesize::SynthesisError;
use crate::value_from_ast::ValueFromAstError;
use thiserror::Error;

/// Problems with the schema, document, or scalar registry that make a walk
/// impossible to complete.
///
/// These are distinct from problems with the *data* being transcoded, which
/// are collected as [`ValidationIssue`](crate::transcode::ValidationIssue)s
/// instead of aborting the walk.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum WalkError {
    #[error("Fragment `{fragment_name}` has a type condition on `{type_name}`, which is not a composite type")]
    FragmentOnNonCompositeType {
        fragment_name: String,
        type_name: String,
    },

    #[error("Variable `${variable_name}` has an invalid default value: {err}")]
    InvalidDefaultValue {
        variable_name: String,
        err: ValueFromAstError,
    },

    #[error("Invalid `if` argument for @{directive_name}: {message}")]
    InvalidDirectiveArgument {
        directive_name: String,
        message: String,
    },

    #[error("Variable `${variable_name}` is declared with `{type_name}`, which is not an input type")]
    InputTypeExpected {
        type_name: String,
        variable_name: String,
    },

    #[error("No scalar codec is registered for custom scalar `{0}`")]
    MissingScalarCodec(String),

    #[error("Field `{type_name}.{field_name}` returns a composite type and needs a sub-selection")]
    MissingSubSelection {
        field_name: String,
        type_name: String,
    },

    #[error("The schema has no root type for {0} operations")]
    NoRootOperationType(OperationKind),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error("Field `{type_name}.{field_name}` returns a leaf type and can't have a sub-selection")]
    UnexpectedSubSelection {
        field_name: String,
        type_name: String,
    },

    #[error("Type `{type_name}` has no field named `{field_name}`")]
    UnknownField {
        field_name: String,
        type_name: String,
    },

    #[error("Fragment `{0}` is not defined")]
    UnknownFragment(String),

    #[error("Operation `{0}` is not defined in the document")]
    UnknownOperation(String),

    #[error("Type `{0}` is not defined in the schema")]
    UnknownType(String),
}
