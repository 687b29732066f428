use crate::compose::ValidatorError;
use crate::transcode::ValidationResult;
use crate::walk_error::WalkError;
use futures::future::BoxFuture;
use serde_json::Value;

/// What a validator produces once it has run: a fatal [`WalkError`], or the
/// data-level [`ValidationResult`].
pub type ValidatorResult = Result<ValidationResult<Value>, WalkError>;

/// The result of [`SchemaValidator::validate`](crate::compose::SchemaValidator::validate).
///
/// Every validator in this crate completes immediately. `Deferred` exists
/// for externally supplied validators that need to await something; the
/// composer still supports them, but [`validate_sync`](crate::compose::validate_sync)
/// refuses them.
pub enum ValidationOutcome {
    Deferred(BoxFuture<'static, ValidatorResult>),
    Ready(ValidatorResult),
}
impl ValidationOutcome {
    pub fn deferred<F>(future: F) -> Self
    where
        F: std::future::Future<Output = ValidatorResult> + Send + 'static,
    {
        Self::Deferred(Box::pin(future))
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The immediate result, or [`ValidatorError::DeferredValidation`].
    pub fn into_ready(self) -> Result<ValidatorResult, ValidatorError> {
        match self {
            Self::Ready(result) => Ok(result),
            Self::Deferred(_) => Err(ValidatorError::DeferredValidation),
        }
    }

    pub async fn resolve(self) -> ValidatorResult {
        match self {
            Self::Ready(result) => result,
            Self::Deferred(future) => future.await,
        }
    }
}
impl std::fmt::Debug for ValidationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deferred(_) => f.write_str("Deferred(..)"),
            Self::Ready(result) => f.debug_tuple("Ready").field(result).finish(),
        }
    }
}
impl std::convert::From<ValidatorResult> for ValidationOutcome {
    fn from(result: ValidatorResult) -> Self {
        Self::Ready(result)
    }
}
