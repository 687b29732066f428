use crate::direction::Direction;
use crate::document_schemas::DocumentSource;
use crate::document_schemas::FragmentDataValidator;
use crate::operation::DocumentBuildError;
use crate::operation::ExecutableDocument;
use crate::scalar::ScalarRegistry;
use crate::types::TypeSystem;
use serde_json::Map;
use serde_json::Value;
use std::sync::Arc;

/// The validator for data selected by one named fragment of an
/// [`ExecutableDocument`].
#[derive(Clone, Debug)]
pub struct FragmentSchemas {
    fragment_name: String,
    source: DocumentSource,
}
impl FragmentSchemas {
    pub fn new(
        type_system: Arc<dyn TypeSystem>,
        document: Arc<ExecutableDocument>,
        fragment_name: &str,
        scalars: Arc<ScalarRegistry>,
        direction: Direction,
    ) -> Result<Self, DocumentBuildError> {
        document.fragment(fragment_name)?;
        Ok(Self {
            fragment_name: fragment_name.to_string(),
            source: DocumentSource {
                direction,
                document,
                scalars,
                type_system,
                variable_values: None,
            },
        })
    }

    pub fn data(&self) -> FragmentDataValidator {
        FragmentDataValidator {
            fragment_name: self.fragment_name.clone(),
            source: self.source.clone(),
        }
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }

    /// Fragments declare no variables, so directive arguments that refer to
    /// variables only resolve against values supplied here.
    pub fn with_variable_values(mut self, variable_values: Map<String, Value>) -> Self {
        self.source.variable_values = Some(variable_values);
        self
    }
}
