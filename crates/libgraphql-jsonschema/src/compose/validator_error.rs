use crate::walk_error::WalkError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidatorError {
    #[error(
        "A validator deferred its result, but this entry point only accepts \
        validators that complete immediately"
    )]
    DeferredValidation,

    #[error(transparent)]
    Walk(#[from] WalkError),
}
