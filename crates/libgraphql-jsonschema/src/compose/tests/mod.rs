
use crate::compile::CompileOptions;
use crate::compose::SchemaValidator;
use crate::compose::ValidationOutcome;
use crate::compose::ValueView;
use crate::dialect::Dialect;
use crate::transcode::ValidationIssue;
use crate::transcode::into_validation_result;
use crate::walk_error::WalkError;
use serde_json::json;
use serde_json::Value;

/// Accepts only strings. Optionally completes through a future instead of
/// immediately.
#[derive(Debug, Default)]
struct StringValidator {
    deferred: bool,
}
impl StringValidator {
    fn deferred() -> Self {
        Self { deferred: true }
    }
}
impl SchemaValidator for StringValidator {
    fn json_schema(
        &self,
        dialect: Dialect,
        _options: &CompileOptions,
    ) -> Result<Value, WalkError> {
        Ok(dialect.stamp(json!({
            "type": "string",
            "$defs": {"scalar": {"Handle": {"type": "string"}}},
        })))
    }

    fn validate(&self, value: ValueView<'_>) -> ValidationOutcome {
        let value = value.to_value();
        let issues = if value.is_string() {
            vec![]
        } else {
            vec![ValidationIssue::new(vec![], "Expected a string")]
        };
        let result = Ok(into_validation_result(value, issues));
        if self.deferred {
            ValidationOutcome::deferred(async move { result })
        } else {
            ValidationOutcome::Ready(result)
        }
    }
}

/// Fails every walk.
#[derive(Debug)]
struct BrokenValidator;
impl SchemaValidator for BrokenValidator {
    fn json_schema(
        &self,
        _dialect: Dialect,
        _options: &CompileOptions,
    ) -> Result<Value, WalkError> {
        Err(WalkError::UnknownType("Missing".to_string()))
    }

    fn validate(&self, _value: ValueView<'_>) -> ValidationOutcome {
        ValidationOutcome::Ready(Err(WalkError::UnknownType("Missing".to_string())))
    }
}
