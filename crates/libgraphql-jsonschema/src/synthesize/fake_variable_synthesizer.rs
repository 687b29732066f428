use crate::ast;
use crate::scalar::BuiltinScalar;
use crate::scalar::ScalarRegistry;
use crate::synthesize::SynthesisError;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::types::TypeSystem;
use crate::value_from_ast::value_from_ast;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, SynthesisError>;

/// Produce a placeholder value for every declared variable so directive
/// arguments can be resolved when the caller hasn't supplied any variables.
///
/// A declared default is used as-is. Otherwise a nullable variable is
/// `null`, a list is `[]`, an enum takes its first declared value, a builtin
/// scalar its [canonical fake](BuiltinScalar::fake_value), a custom scalar
/// its codec's default, and an input object is filled in field by field
/// following the same rules.
pub fn synthesize_variables(
    type_system: &dyn TypeSystem,
    variable_definitions: &[ast::operation::VariableDefinition],
    scalars: &ScalarRegistry,
) -> Result<Map<String, Value>> {
    let mut variables = Map::new();
    for var_def in variable_definitions {
        let value = match &var_def.default_value {
            Some(default_value) => value_from_ast(default_value, &Map::new())
                .map_err(|err| SynthesisError::InvalidDefaultValue {
                    name: format!("${}", var_def.name),
                    err,
                })?,
            None => synthesize_value(
                type_system,
                &TypeAnnotation::from_variable_definition(var_def),
                scalars,
            )?,
        };
        variables.insert(var_def.name.to_string(), value);
    }
    Ok(variables)
}

/// Produce a placeholder value for a single input type.
pub fn synthesize_value(
    type_system: &dyn TypeSystem,
    type_annotation: &TypeAnnotation,
    scalars: &ScalarRegistry,
) -> Result<Value> {
    let mut input_object_stack = vec![];
    synthesize_value_impl(type_system, type_annotation, scalars, &mut input_object_stack)
}

fn synthesize_value_impl(
    type_system: &dyn TypeSystem,
    type_annotation: &TypeAnnotation,
    scalars: &ScalarRegistry,
    input_object_stack: &mut Vec<String>,
) -> Result<Value> {
    if type_annotation.nullable() {
        return Ok(Value::Null);
    }

    let named_annot = match type_annotation {
        TypeAnnotation::List(_) => return Ok(Value::Array(vec![])),
        TypeAnnotation::Named(named_annot) => named_annot,
    };

    let type_name = named_annot.graphql_type_name();
    let graphql_type = type_system
        .type_by_name(type_name)
        .ok_or_else(|| SynthesisError::UnknownType(type_name.to_string()))?;

    let codec_default = scalars.get(type_name).and_then(|codec| codec.default_value());

    match graphql_type {
        // An override codec's default wins, but builtins never need one.
        GraphQLType::Bool
            | GraphQLType::Float
            | GraphQLType::ID
            | GraphQLType::Int
            | GraphQLType::String => Ok(codec_default.unwrap_or_else(|| {
                BuiltinScalar::from_graphql_type(graphql_type)
                    .map(|builtin| builtin.fake_value())
                    .unwrap_or(Value::Null)
            })),

        GraphQLType::Enum(enum_type) => Ok(
            enum_type.values()
                .keys()
                .next()
                .map(|name| Value::String(name.to_string()))
                .unwrap_or(Value::Null)
        ),

        GraphQLType::Scalar(_) => match (scalars.get(type_name), codec_default) {
            (_, Some(default_value)) => Ok(default_value),
            (Some(_), None) =>
                Err(SynthesisError::MissingScalarDefault(type_name.to_string())),
            (None, None) =>
                Err(SynthesisError::MissingScalarCodec(type_name.to_string())),
        },

        GraphQLType::InputObject(input_type) => {
            if input_object_stack.iter().any(|name| name == type_name) {
                let mut path = input_object_stack.clone();
                path.push(type_name.to_string());
                return Err(SynthesisError::InputObjectCycle { path });
            }

            input_object_stack.push(type_name.to_string());
            let mut fields = Map::new();
            for (field_name, field) in input_type.fields() {
                let value = match field.default_value() {
                    Some(default_value) => value_from_ast(default_value, &Map::new())
                        .map_err(|err| SynthesisError::InvalidDefaultValue {
                            name: format!("{}.{}", type_name, field_name),
                            err,
                        })?,
                    None => synthesize_value_impl(
                        type_system,
                        field.type_annotation(),
                        scalars,
                        input_object_stack,
                    )?,
                };
                fields.insert(field_name.to_string(), value);
            }
            input_object_stack.pop();
            Ok(Value::Object(fields))
        },

        GraphQLType::Interface(_)
            | GraphQLType::Object(_)
            | GraphQLType::Union(_) => Err(SynthesisError::NotAnInputType {
                name: type_name.to_string(),
                type_name: type_name.to_string(),
            }),
    }
}
