use crate::compile::CompileOptions;
use crate::compile::compile_fragment_data;
use crate::compose::SchemaValidator;
use crate::compose::ValidationOutcome;
use crate::compose::ValueView;
use crate::dialect::Dialect;
use crate::document_schemas::DocumentSource;
use crate::document_schemas::view_value;
use crate::transcode::transcode_fragment_data;
use crate::walk_error::WalkError;
use serde_json::Value;

/// Schema and transcoder for data shaped by one named fragment.
#[derive(Clone, Debug)]
pub struct FragmentDataValidator {
    pub(super) fragment_name: String,
    pub(super) source: DocumentSource,
}
impl SchemaValidator for FragmentDataValidator {
    fn json_schema(
        &self,
        dialect: Dialect,
        options: &CompileOptions,
    ) -> Result<Value, WalkError> {
        let ctx = self.source.fragment_context();
        let fragment = ctx.fragments()
            .get(&self.fragment_name)
            .ok_or_else(|| WalkError::UnknownFragment(self.fragment_name.to_string()))?;
        Ok(dialect.stamp(compile_fragment_data(&ctx, fragment, options)?))
    }

    fn validate(&self, value: ValueView<'_>) -> ValidationOutcome {
        let value = view_value(&value);
        let ctx = self.source.fragment_context();
        ValidationOutcome::Ready(
            ctx.fragments()
                .get(&self.fragment_name)
                .ok_or_else(|| WalkError::UnknownFragment(self.fragment_name.to_string()))
                .and_then(|fragment| transcode_fragment_data(&ctx, fragment, &value)),
        )
    }
}
