use crate::ast;
use crate::direction::Direction;
use crate::operation::ExecutableDocument;
use crate::operation::FragmentRegistry;
use crate::operation::OperationRef;
use crate::scalar::BuiltinScalar;
use crate::scalar::ScalarCodec;
use crate::scalar::ScalarRegistry;
use crate::synthesize::synthesize_variables;
use crate::types::GraphQLType;
use crate::types::TypeSystem;
use crate::value_from_ast::value_from_ast;
use crate::walk_error::WalkError;
use serde_json::Map;
use serde_json::Value;
use std::sync::Arc;

/// Everything a single compile or transcode call needs to walk a selection.
///
/// A context is built once per call and only read during the walk.
#[derive(Clone)]
pub struct WalkContext<'a> {
    direction: Direction,
    fragments: &'a FragmentRegistry,
    scalars: &'a ScalarRegistry,
    type_system: &'a dyn TypeSystem,
    variable_values: Map<String, Value>,
}
impl<'a> WalkContext<'a> {
    pub fn new(
        type_system: &'a dyn TypeSystem,
        fragments: &'a FragmentRegistry,
        scalars: &'a ScalarRegistry,
        direction: Direction,
    ) -> Self {
        Self {
            direction,
            fragments,
            scalars,
            type_system,
            variable_values: Map::new(),
        }
    }

    /// A context for walking one of `document`'s fragments. Without
    /// `supplied` variables, directive arguments referring to variables can't
    /// be resolved, since fragments declare no variables of their own.
    pub fn for_fragment(
        type_system: &'a dyn TypeSystem,
        document: &'a ExecutableDocument,
        scalars: &'a ScalarRegistry,
        supplied: Option<&Map<String, Value>>,
        direction: Direction,
    ) -> Self {
        Self::new(type_system, document.fragment_registry(), scalars, direction)
            .with_variable_values(supplied.cloned().unwrap_or_default())
    }

    /// A context for walking `operation`, with its
    /// [effective variables](effective_variables) already resolved.
    pub fn for_operation(
        type_system: &'a dyn TypeSystem,
        document: &'a ExecutableDocument,
        operation: &OperationRef<'a>,
        scalars: &'a ScalarRegistry,
        supplied: Option<&Map<String, Value>>,
        direction: Direction,
    ) -> Result<Self, WalkError> {
        let variable_values = effective_variables(
            type_system,
            operation.variable_definitions(),
            scalars,
            supplied,
        )?;
        Ok(
            Self::new(type_system, document.fragment_registry(), scalars, direction)
                .with_variable_values(variable_values)
        )
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn fragments(&self) -> &'a FragmentRegistry {
        self.fragments
    }

    /// Resolve the codec for a leaf scalar. The registry always wins; builtin
    /// scalars fall back to their fixed behavior (`Ok(None)`), and a custom
    /// scalar without a registered codec is an error.
    pub(crate) fn scalar_codec(
        &self,
        scalar_type: &GraphQLType,
    ) -> Result<Option<&'a Arc<dyn ScalarCodec>>, WalkError> {
        if let Some(codec) = self.scalars.get(scalar_type.name()) {
            return Ok(Some(codec));
        }
        match BuiltinScalar::from_graphql_type(scalar_type) {
            Some(_) => Ok(None),
            None => Err(WalkError::MissingScalarCodec(scalar_type.name().to_string())),
        }
    }

    pub fn scalars(&self) -> &'a ScalarRegistry {
        self.scalars
    }

    pub fn type_by_name(&self, name: &str) -> Result<&'a GraphQLType, WalkError> {
        self.type_system
            .type_by_name(name)
            .ok_or_else(|| WalkError::UnknownType(name.to_string()))
    }

    pub fn type_system(&self) -> &'a dyn TypeSystem {
        self.type_system
    }

    pub fn variable_values(&self) -> &Map<String, Value> {
        &self.variable_values
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_variable_values(mut self, variable_values: Map<String, Value>) -> Self {
        self.variable_values = variable_values;
        self
    }
}
impl std::fmt::Debug for WalkContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalkContext")
            .field("direction", &self.direction)
            .field("fragments", &self.fragments.fragments().keys().collect::<Vec<_>>())
            .field("scalars", &self.scalars.names().collect::<Vec<_>>())
            .field("variable_values", &self.variable_values)
            .finish_non_exhaustive()
    }
}

/// The variable values directives are evaluated against.
///
/// With caller-supplied values, any declared variable the caller left out
/// takes its declared default. Without any caller values at all, a fake set
/// is synthesized so that directive arguments still resolve.
pub fn effective_variables(
    type_system: &dyn TypeSystem,
    variable_definitions: &[ast::operation::VariableDefinition],
    scalars: &ScalarRegistry,
    supplied: Option<&Map<String, Value>>,
) -> Result<Map<String, Value>, WalkError> {
    let Some(supplied) = supplied else {
        log::trace!(
            "No variables supplied; synthesizing {} fake variables",
            variable_definitions.len(),
        );
        return Ok(synthesize_variables(type_system, variable_definitions, scalars)?);
    };

    let mut effective = supplied.clone();
    for var_def in variable_definitions {
        if effective.contains_key(var_def.name.as_str()) {
            continue;
        }
        if let Some(default_value) = &var_def.default_value {
            let default_value = value_from_ast(default_value, &Map::new())
                .map_err(|err| WalkError::InvalidDefaultValue {
                    variable_name: var_def.name.to_string(),
                    err,
                })?;
            effective.insert(var_def.name.to_string(), default_value);
        }
    }
    Ok(effective)
}
