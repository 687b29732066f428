use crate::compile::CompileOptions;
use crate::compile::compile_operation_data;
use crate::compose::SchemaValidator;
use crate::compose::ValidationOutcome;
use crate::compose::ValueView;
use crate::dialect::Dialect;
use crate::document_schemas::DocumentSource;
use crate::document_schemas::view_value;
use crate::transcode::transcode_operation_data;
use crate::walk_error::WalkError;
use serde_json::Value;

/// Schema and transcoder for the `data` of one operation.
#[derive(Clone, Debug)]
pub struct OperationDataValidator {
    pub(super) operation_name: Option<String>,
    pub(super) source: DocumentSource,
}
impl SchemaValidator for OperationDataValidator {
    fn json_schema(
        &self,
        dialect: Dialect,
        options: &CompileOptions,
    ) -> Result<Value, WalkError> {
        let operation = self.source.operation(self.operation_name.as_deref())?;
        let ctx = self.source.operation_context(&operation)?;
        Ok(dialect.stamp(compile_operation_data(&ctx, &operation, options)?))
    }

    fn validate(&self, value: ValueView<'_>) -> ValidationOutcome {
        let value = view_value(&value);
        ValidationOutcome::Ready(
            self.source.operation(self.operation_name.as_deref()).and_then(|operation| {
                let ctx = self.source.operation_context(&operation)?;
                transcode_operation_data(&ctx, &operation, &value)
            }),
        )
    }
}
