use crate::compose::compose;
use crate::compose::ComposedValidator;
use crate::compose::ResponseEnvelopeValidator;
use crate::direction::Direction;
use crate::document_schemas::DocumentSource;
use crate::document_schemas::OperationDataValidator;
use crate::document_schemas::OperationVariablesValidator;
use crate::operation::DocumentBuildError;
use crate::operation::ExecutableDocument;
use crate::scalar::ScalarRegistry;
use crate::types::TypeSystem;
use serde_json::Map;
use serde_json::Value;
use std::sync::Arc;

/// The validators for one operation of an [`ExecutableDocument`]: its
/// `data`, its variables, and a whole response (the `data` nested in a
/// [`ResponseEnvelopeValidator`]).
///
/// ```
/// # use libgraphql_jsonschema::compose::validate_sync;
/// # use libgraphql_jsonschema::direction::Direction;
/// # use libgraphql_jsonschema::document_schemas::OperationSchemas;
/// # use libgraphql_jsonschema::operation::ExecutableDocument;
/// # use libgraphql_jsonschema::scalar::ScalarRegistry;
/// # use libgraphql_jsonschema::schema::SchemaBuilder;
/// # use std::sync::Arc;
/// let schema = SchemaBuilder::from_str(None, "type Query { hello: String! }")
///     .and_then(SchemaBuilder::build)
///     .expect("schema should build");
/// let document = ExecutableDocument::parse("query Greet { hello }")
///     .expect("document should parse");
/// let schemas = OperationSchemas::new(
///     Arc::new(schema),
///     Arc::new(document),
///     Some("Greet"),
///     Arc::new(ScalarRegistry::new()),
///     Direction::Normalize,
/// ).expect("operation should exist");
///
/// let response = serde_json::json!({"data": {"hello": "world"}});
/// assert_eq!(validate_sync(&schemas.response(), &response), Ok(Ok(response)));
/// ```
#[derive(Clone, Debug)]
pub struct OperationSchemas {
    operation_name: Option<String>,
    source: DocumentSource,
}
impl OperationSchemas {
    /// Fails when `operation_name` doesn't pick exactly one operation of
    /// `document`.
    pub fn new(
        type_system: Arc<dyn TypeSystem>,
        document: Arc<ExecutableDocument>,
        operation_name: Option<&str>,
        scalars: Arc<ScalarRegistry>,
        direction: Direction,
    ) -> Result<Self, DocumentBuildError> {
        let resolved_name = document.operation(operation_name)?
            .name()
            .map(|name| name.to_string());
        Ok(Self {
            operation_name: resolved_name,
            source: DocumentSource {
                direction,
                document,
                scalars,
                type_system,
                variable_values: None,
            },
        })
    }

    pub fn data(&self) -> OperationDataValidator {
        OperationDataValidator {
            operation_name: self.operation_name.clone(),
            source: self.source.clone(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.source.direction
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    /// A complete response: `errors` and `extensions` checked by the
    /// envelope, and a nullable `data` checked by [`data`](Self::data).
    pub fn response(&self) -> ComposedValidator {
        compose(
            Arc::new(ResponseEnvelopeValidator::new()),
            ["data"],
            Arc::new(self.data()),
            /* nullable_extension = */ true,
        )
    }

    pub fn variables(&self) -> OperationVariablesValidator {
        OperationVariablesValidator {
            operation_name: self.operation_name.clone(),
            source: self.source.clone(),
        }
    }

    /// Evaluate `@skip`/`@include` against these variable values instead
    /// of synthesized ones.
    pub fn with_variable_values(mut self, variable_values: Map<String, Value>) -> Self {
        self.source.variable_values = Some(variable_values);
        self
    }
}
