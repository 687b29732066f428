use crate::ast;
use crate::compile::DefinitionKind;
use crate::compile::Definitions;
use crate::compile::make_nullable;
use crate::compile::schema_compiler::SchemaCompiler;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::walk_error::WalkError;
use serde_json::json;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, WalkError>;

impl SchemaCompiler<'_, '_> {
    pub(super) fn compile_variables_object(
        &mut self,
        variable_definitions: &[ast::operation::VariableDefinition],
    ) -> Result<Value> {
        let mut properties = Map::new();
        let mut required = vec![];
        for var_def in variable_definitions {
            let type_annotation = TypeAnnotation::from_variable_definition(var_def);
            let schema = self.compile_input_type(var_def.name.as_str(), &type_annotation)?;
            if !type_annotation.nullable() && var_def.default_value.is_none() {
                required.push(var_def.name.to_string());
            }
            properties.insert(var_def.name.to_string(), schema);
        }
        Ok(self.object_schema(properties, required))
    }

    fn compile_input_type(
        &mut self,
        variable_name: &str,
        type_annotation: &TypeAnnotation,
    ) -> Result<Value> {
        let schema = match type_annotation {
            TypeAnnotation::List(list_annot) => json!({
                "type": "array",
                "items": self.compile_input_type(
                    variable_name,
                    list_annot.inner_type_annotation(),
                )?,
            }),

            TypeAnnotation::Named(named_annot) => {
                let input_type = self.ctx.type_by_name(named_annot.graphql_type_name())?;
                match input_type {
                    GraphQLType::InputObject(_) =>
                        self.compile_input_object(variable_name, input_type)?,

                    leaf_type if leaf_type.is_leaf() => self.compile_leaf(leaf_type)?,

                    _ => return Err(WalkError::InputTypeExpected {
                        type_name: input_type.name().to_string(),
                        variable_name: variable_name.to_string(),
                    }),
                }
            },
        };

        Ok(if type_annotation.nullable() {
            make_nullable(schema)
        } else {
            schema
        })
    }

    /// Input objects are compiled once into `$defs.input` and referenced
    /// everywhere else, so self-referencing input types terminate.
    fn compile_input_object(
        &mut self,
        variable_name: &str,
        input_type: &GraphQLType,
    ) -> Result<Value> {
        let Some(input_obj) = input_type.as_input_object() else {
            return Err(WalkError::InputTypeExpected {
                type_name: input_type.name().to_string(),
                variable_name: variable_name.to_string(),
            });
        };
        let type_name = input_obj.name();

        if !self.defs.contains(DefinitionKind::Input, type_name) {
            // Reserve the slot before descending so recursive references
            // resolve to a $ref instead of recursing.
            self.defs.insert(DefinitionKind::Input, type_name, Value::Null);

            let mut properties = Map::new();
            let mut required = vec![];
            for (field_name, field) in input_obj.fields() {
                let schema = self.compile_input_type(variable_name, field.type_annotation())?;
                if field.is_required() {
                    required.push(field_name.to_string());
                }
                properties.insert(field_name.to_string(), schema);
            }

            // Unknown input fields are rejected when transcoding, so the
            // schema is always closed.
            let schema = json!({
                "type": "object",
                "properties": properties,
                "required": required,
                "additionalProperties": false,
            });
            self.defs.insert(DefinitionKind::Input, type_name, schema);
        }

        Ok(Definitions::ref_to(DefinitionKind::Input, type_name))
    }
}
