use crate::ast;
use crate::scalar::json_kind;
use crate::transcode::data_transcoder::DataTranscoder;
use crate::transcode::PathSegment;
use crate::transcode::ValidationResult;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::walk::WalkContext;
use crate::walk_error::WalkError;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, WalkError>;

/// Walk a variables object against an operation's variable definitions.
///
/// Variables the operation doesn't declare are dropped. A declared variable
/// that's missing is only an issue when it is non-null and has no default.
pub fn transcode_variables(
    ctx: &WalkContext<'_>,
    variable_definitions: &[ast::operation::VariableDefinition],
    value: &Value,
) -> Result<ValidationResult<Value>> {
    let mut transcoder = DataTranscoder::new(ctx);
    let Value::Object(supplied) = value else {
        transcoder.issue(format!(
            "Expected an object of variables, got {}",
            json_kind(value),
        ));
        return Ok(transcoder.finish(None));
    };

    let mut transcoded = Map::new();
    let mut failed = false;
    for var_def in variable_definitions {
        let var_name = var_def.name.as_str();
        let type_annotation = TypeAnnotation::from_variable_definition(var_def);
        transcoder.path.push(PathSegment::Key(var_name.to_string()));

        let result = match supplied.get(var_name) {
            Some(var_value) =>
                transcoder.transcode_input(var_name, var_value, &type_annotation)?,
            None if type_annotation.nullable() || var_def.default_value.is_some() => {
                transcoder.path.pop();
                continue;
            },
            None => {
                transcoder.issue(format!(
                    "Missing value for required variable `${var_name}` of type `{}`",
                    type_annotation.to_graphql_string(),
                ));
                None
            },
        };

        match result {
            Some(var_value) => {
                transcoded.insert(var_name.to_string(), var_value);
            },
            None => failed = true,
        }
        transcoder.path.pop();
    }

    for undeclared in supplied.keys().filter(|key| {
        !variable_definitions.iter().any(|var_def| var_def.name == **key)
    }) {
        log::trace!("Dropping undeclared variable `${undeclared}`");
    }

    Ok(transcoder.finish(if failed { None } else { Some(Value::Object(transcoded)) }))
}

impl DataTranscoder<'_, '_> {
    fn transcode_input(
        &mut self,
        variable_name: &str,
        value: &Value,
        type_annotation: &TypeAnnotation,
    ) -> Result<Option<Value>> {
        if value.is_null() {
            if type_annotation.nullable() {
                return Ok(Some(Value::Null));
            }
            self.issue(format!(
                "Expected a non-null value of type `{}`",
                type_annotation.to_graphql_string(),
            ));
            return Ok(None);
        }

        match type_annotation {
            TypeAnnotation::List(list_annot) => {
                let Value::Array(items) = value else {
                    self.issue(format!(
                        "Expected a list of type `{}`, got {}",
                        type_annotation.to_graphql_string(),
                        json_kind(value),
                    ));
                    return Ok(None);
                };

                let mut transcoded = Vec::with_capacity(items.len());
                let mut failed = false;
                for (idx, item) in items.iter().enumerate() {
                    self.path.push(PathSegment::Index(idx));
                    let result = self.transcode_input(
                        variable_name,
                        item,
                        list_annot.inner_type_annotation(),
                    );
                    self.path.pop();
                    match result? {
                        Some(item) => transcoded.push(item),
                        None => failed = true,
                    }
                }
                Ok(if failed { None } else { Some(Value::Array(transcoded)) })
            },

            TypeAnnotation::Named(named_annot) => {
                let input_type = self.ctx.type_by_name(named_annot.graphql_type_name())?;
                match input_type {
                    GraphQLType::InputObject(_) =>
                        self.transcode_input_object(variable_name, value, input_type),
                    leaf_type if leaf_type.is_leaf() => self.transcode_leaf(value, leaf_type),
                    _ => Err(WalkError::InputTypeExpected {
                        type_name: input_type.name().to_string(),
                        variable_name: variable_name.to_string(),
                    }),
                }
            },
        }
    }

    fn transcode_input_object(
        &mut self,
        variable_name: &str,
        value: &Value,
        input_type: &GraphQLType,
    ) -> Result<Option<Value>> {
        let Some(input_obj) = input_type.as_input_object() else {
            return Err(WalkError::InputTypeExpected {
                type_name: input_type.name().to_string(),
                variable_name: variable_name.to_string(),
            });
        };
        let Value::Object(map) = value else {
            self.issue(format!(
                "Expected an object for input type `{}`, got {}",
                input_obj.name(),
                json_kind(value),
            ));
            return Ok(None);
        };

        let mut failed = false;
        for key in map.keys() {
            if input_obj.field(key).is_none() {
                self.path.push(PathSegment::Key(key.to_string()));
                self.issue(format!(
                    "Unknown field `{key}` on input type `{}`",
                    input_obj.name(),
                ));
                self.path.pop();
                failed = true;
            }
        }

        let mut transcoded = Map::new();
        for (field_name, field) in input_obj.fields() {
            self.path.push(PathSegment::Key(field_name.to_string()));
            let result = match map.get(field_name.as_str()) {
                Some(field_value) =>
                    self.transcode_input(variable_name, field_value, field.type_annotation())?,
                None if !field.is_required() => {
                    self.path.pop();
                    continue;
                },
                None => {
                    self.issue(format!(
                        "Missing value for required input field `{}.{}`",
                        input_obj.name(),
                        field_name,
                    ));
                    None
                },
            };
            self.path.pop();

            match result {
                Some(field_value) => {
                    transcoded.insert(field_name.to_string(), field_value);
                },
                None => failed = true,
            }
        }

        Ok(if failed { None } else { Some(Value::Object(transcoded)) })
    }
}
