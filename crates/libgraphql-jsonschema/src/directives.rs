use crate::ast;
use crate::types::TypeSystem;
use crate::walk_error::WalkError;
use serde_json::Map;
use serde_json::Value;

/// Decide whether a selection carrying `directives` takes part in a walk.
///
/// `@skip(if: true)` excludes the selection whatever `@include` says.
/// Otherwise `@include(if: false)` excludes it. Every other selection is
/// included. `if` arguments are resolved against `variable_values`, and one
/// that doesn't resolve to a Boolean is an error.
pub fn should_include(
    type_system: &dyn TypeSystem,
    variable_values: &Map<String, Value>,
    directives: &[ast::operation::Directive],
) -> Result<bool, WalkError> {
    let skip = condition_directive_value(
        type_system,
        variable_values,
        directives,
        "skip",
    )?;
    if skip == Some(true) {
        return Ok(false);
    }

    let include = condition_directive_value(
        type_system,
        variable_values,
        directives,
        "include",
    )?;
    if include == Some(false) {
        return Ok(false);
    }

    Ok(true)
}

fn condition_directive_value(
    type_system: &dyn TypeSystem,
    variable_values: &Map<String, Value>,
    directives: &[ast::operation::Directive],
    directive_name: &str,
) -> Result<Option<bool>, WalkError> {
    let Some(directive) = directives.iter().find(|d| d.name == directive_name) else {
        return Ok(None);
    };

    let invalid = |message: String| WalkError::InvalidDirectiveArgument {
        directive_name: directive_name.to_string(),
        message,
    };

    let if_arg = directive.arguments
        .iter()
        .find_map(|(name, value)| (name == "if").then_some(value))
        .ok_or_else(|| invalid("the argument is missing".to_string()))?;

    match type_system.coerce_argument_value(if_arg, variable_values) {
        Ok(Value::Bool(b)) => Ok(Some(b)),
        Ok(other) => Err(invalid(format!(
            "expected a Boolean, got {}",
            crate::scalar::json_kind(&other),
        ))),
        Err(err) => Err(invalid(err.to_string())),
    }
}
