use crate::compile::CompileOptions;
use crate::compose::SchemaValidator;
use crate::compose::ValidationOutcome;
use crate::compose::ValueView;
use crate::dialect::Dialect;
use crate::scalar::json_kind;
use crate::transcode::PathSegment;
use crate::transcode::ValidationIssue;
use crate::transcode::into_validation_result;
use crate::walk_error::WalkError;
use serde_json::json;
use serde_json::Value;

const ENVELOPE_KEYS: [&str; 2] = ["errors", "extensions"];

/// The envelope of a GraphQL response, without its `data`: an object with
/// optional `errors` and `extensions` and nothing else. Compose the data of
/// an operation under `["data"]` to describe a whole response.
#[derive(Clone, Debug, Default)]
pub struct ResponseEnvelopeValidator;
impl ResponseEnvelopeValidator {
    pub fn new() -> Self {
        Self
    }

    fn validate_errors(&self, errors: &Value, issues: &mut Vec<ValidationIssue>) {
        let errors_path = || vec![PathSegment::from("errors")];
        let items = match errors {
            Value::Null => return,
            Value::Array(items) => items,
            other => {
                issues.push(ValidationIssue::new(
                    errors_path(),
                    format!("Expected `errors` to be null or a list, got {}", json_kind(other)),
                ));
                return;
            },
        };

        for (idx, item) in items.iter().enumerate() {
            let mut item_path = errors_path();
            item_path.push(PathSegment::Index(idx));
            match item.get("message") {
                _ if !item.is_object() => issues.push(ValidationIssue::new(
                    item_path,
                    format!("Expected an error object, got {}", json_kind(item)),
                )),
                Some(Value::String(_)) => (),
                Some(other) => {
                    item_path.push(PathSegment::from("message"));
                    issues.push(ValidationIssue::new(
                        item_path,
                        format!("Expected a string, got {}", json_kind(other)),
                    ));
                },
                None => issues.push(ValidationIssue::new(
                    item_path,
                    "Missing required error `message`",
                )),
            }
        }
    }
}
impl SchemaValidator for ResponseEnvelopeValidator {
    fn json_schema(
        &self,
        dialect: Dialect,
        _options: &CompileOptions,
    ) -> Result<Value, WalkError> {
        Ok(dialect.stamp(json!({
            "type": "object",
            "properties": {
                "errors": {
                    "type": ["array", "null"],
                    "items": {
                        "type": "object",
                        "properties": {
                            "message": {"type": "string"},
                        },
                        "required": ["message"],
                    },
                },
                "extensions": {"type": ["object", "null"]},
            },
            "additionalProperties": false,
        })))
    }

    fn validate(&self, value: ValueView<'_>) -> ValidationOutcome {
        let mut issues = vec![];
        if !value.is_object() {
            issues.push(ValidationIssue::new(vec![], format!(
                "Expected a response object, got {}",
                json_kind(&value.to_value()),
            )));
            return ValidationOutcome::Ready(Ok(into_validation_result(Value::Null, issues)));
        }

        for key in value.keys() {
            if !ENVELOPE_KEYS.contains(&key) {
                issues.push(ValidationIssue::new(
                    vec![PathSegment::from(key)],
                    format!("Unexpected response key `{key}`"),
                ));
            }
        }

        if let Some(errors) = value.get("errors") {
            self.validate_errors(&errors.to_value(), &mut issues);
        }

        if let Some(extensions) = value.get("extensions") {
            let extensions = extensions.to_value();
            if !extensions.is_null() && !extensions.is_object() {
                issues.push(ValidationIssue::new(
                    vec![PathSegment::from("extensions")],
                    format!(
                        "Expected `extensions` to be null or an object, got {}",
                        json_kind(&extensions),
                    ),
                ));
            }
        }

        ValidationOutcome::Ready(Ok(into_validation_result(value.to_value(), issues)))
    }
}
