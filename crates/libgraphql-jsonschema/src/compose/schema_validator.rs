use crate::compile::CompileOptions;
use crate::compose::ValidationOutcome;
use crate::compose::ValidatorError;
use crate::compose::ValueView;
use crate::dialect::Dialect;
use crate::transcode::ValidationResult;
use crate::walk_error::WalkError;
use serde_json::Value;

/// A JSON Schema paired with the validator that enforces it.
///
/// Both halves are derived from the same source (usually a GraphQL
/// selection), so a value the validator accepts is also accepted by the
/// schema.
pub trait SchemaValidator: Send + Sync {
    /// The top-level schema document, stamped for `dialect`.
    fn json_schema(
        &self,
        dialect: Dialect,
        options: &CompileOptions,
    ) -> Result<Value, WalkError>;

    fn validate(&self, value: ValueView<'_>) -> ValidationOutcome;
}

/// Validate `value`, requiring the validator to complete immediately.
pub fn validate_sync(
    validator: &dyn SchemaValidator,
    value: &Value,
) -> Result<ValidationResult<Value>, ValidatorError> {
    Ok(validator.validate(ValueView::Value(value)).into_ready()??)
}
