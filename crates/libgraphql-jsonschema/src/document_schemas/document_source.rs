use crate::compose::ValueView;
use crate::direction::Direction;
use crate::operation::ExecutableDocument;
use crate::operation::OperationRef;
use crate::scalar::ScalarRegistry;
use crate::types::TypeSystem;
use crate::walk::WalkContext;
use crate::walk_error::WalkError;
use serde_json::Map;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;

/// The owned inputs every per-document validator walks with.
#[derive(Clone)]
pub(super) struct DocumentSource {
    pub(super) direction: Direction,
    pub(super) document: Arc<ExecutableDocument>,
    pub(super) scalars: Arc<ScalarRegistry>,
    pub(super) type_system: Arc<dyn TypeSystem>,
    pub(super) variable_values: Option<Map<String, Value>>,
}
impl DocumentSource {
    pub(super) fn fragment_context(&self) -> WalkContext<'_> {
        WalkContext::for_fragment(
            self.type_system.as_ref(),
            self.document.as_ref(),
            self.scalars.as_ref(),
            self.variable_values.as_ref(),
            self.direction,
        )
    }

    pub(super) fn operation(
        &self,
        operation_name: Option<&str>,
    ) -> Result<OperationRef<'_>, WalkError> {
        self.document.operation(operation_name).map_err(|_| {
            WalkError::UnknownOperation(operation_name.unwrap_or("<anonymous>").to_string())
        })
    }

    pub(super) fn operation_context<'a>(
        &'a self,
        operation: &OperationRef<'a>,
    ) -> Result<WalkContext<'a>, WalkError> {
        WalkContext::for_operation(
            self.type_system.as_ref(),
            self.document.as_ref(),
            operation,
            self.scalars.as_ref(),
            self.variable_values.as_ref(),
            self.direction,
        )
    }

    /// A context without variable values, for walking variables themselves.
    pub(super) fn plain_context(&self) -> WalkContext<'_> {
        WalkContext::new(
            self.type_system.as_ref(),
            self.document.fragment_registry(),
            self.scalars.as_ref(),
            self.direction,
        )
    }
}
impl std::fmt::Debug for DocumentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentSource")
            .field("direction", &self.direction)
            .field("document", &self.document)
            .field("scalars", &self.scalars)
            .field("variable_values", &self.variable_values)
            .finish_non_exhaustive()
    }
}

/// Borrow the value behind a view, materializing it only when parts of it
/// are hidden.
pub(super) fn view_value<'v>(
    view: &ValueView<'v>,
) -> Cow<'v, Value> {
    match view.as_value() {
        Some(value) => Cow::Borrowed(value),
        None => Cow::Owned(view.to_value()),
    }
}
