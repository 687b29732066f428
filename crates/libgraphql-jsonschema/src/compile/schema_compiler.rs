use crate::ast;
use crate::compile::CompileOptions;
use crate::compile::DefinitionKind;
use crate::compile::Definitions;
use crate::compile::make_nullable;
use crate::directives::should_include;
use crate::operation::OperationRef;
use crate::scalar::BuiltinScalar;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::walk::collect_fields;
use crate::walk::CollectedFields;
use crate::walk::fragment_type_applies;
use crate::walk::WalkContext;
use crate::walk_error::WalkError;
use serde_json::json;
use serde_json::Map;
use serde_json::Value;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, WalkError>;

/// Compile the JSON Schema describing the data `selection_set` selects on
/// `output_type`.
///
/// `output_type` is the (non-null) type the selection applies to, usually a
/// root operation type or a fragment's type condition. The result is a
/// top-level document: the schema itself plus any `$defs` it refers to.
pub fn compile<'a>(
    ctx: &WalkContext<'a>,
    output_type: &GraphQLType,
    selection_set: &'a ast::operation::SelectionSet,
    options: &CompileOptions,
) -> Result<Value> {
    let mut compiler = SchemaCompiler::new(ctx, options);
    let schema = compiler.compile_composite(output_type, &[selection_set])?;
    Ok(compiler.finish(schema))
}

/// Compile the schema for the `data` an operation produces.
pub fn compile_operation_data<'a>(
    ctx: &WalkContext<'a>,
    operation: &OperationRef<'a>,
    options: &CompileOptions,
) -> Result<Value> {
    let root_type = ctx.type_system()
        .root_operation_type(operation.kind())
        .ok_or(WalkError::NoRootOperationType(operation.kind()))?;
    let root_type = ctx.type_by_name(root_type.name())?;
    log::debug!(
        "Compiling {} data schema for operation {:?} on `{}`",
        ctx.direction(),
        operation.name(),
        root_type.name(),
    );
    compile(ctx, root_type, operation.selection_set(), options)
}

/// Compile the schema for data selected by a named fragment.
pub fn compile_fragment_data<'a>(
    ctx: &WalkContext<'a>,
    fragment: &'a ast::operation::FragmentDefinition,
    options: &CompileOptions,
) -> Result<Value> {
    let ast::operation::TypeCondition::On(type_condition) = &fragment.type_condition;
    let fragment_type = ctx.type_by_name(type_condition)?;
    if !fragment_type.is_composite() {
        return Err(WalkError::FragmentOnNonCompositeType {
            fragment_name: fragment.name.to_string(),
            type_name: type_condition.to_string(),
        });
    }
    log::debug!(
        "Compiling {} data schema for fragment `{}` on `{}`",
        ctx.direction(),
        fragment.name,
        type_condition,
    );
    compile(ctx, fragment_type, &fragment.selection_set, options)
}

/// Compile the schema for an operation's variables object.
pub fn compile_variables(
    ctx: &WalkContext<'_>,
    variable_definitions: &[ast::operation::VariableDefinition],
    options: &CompileOptions,
) -> Result<Value> {
    let mut compiler = SchemaCompiler::new(ctx, options);
    let schema = compiler.compile_variables_object(variable_definitions)?;
    Ok(compiler.finish(schema))
}

pub(super) struct SchemaCompiler<'c, 'a> {
    pub(super) ctx: &'c WalkContext<'a>,
    pub(super) defs: Definitions,
    pub(super) options: &'c CompileOptions,
    /// Cleared while compiling the open branches generated for fragments.
    stamp_additional_properties: bool,
}
impl<'c, 'a> SchemaCompiler<'c, 'a> {
    pub(super) fn new(ctx: &'c WalkContext<'a>, options: &'c CompileOptions) -> Self {
        Self {
            ctx,
            defs: Definitions::new(),
            options,
            stamp_additional_properties: true,
        }
    }

    fn finish(self, schema: Value) -> Value {
        match (schema, self.defs.into_value()) {
            (Value::Object(mut map), Some(defs)) => {
                map.insert("$defs".to_string(), defs);
                Value::Object(map)
            },
            (schema, _) => schema,
        }
    }

    /// Object schema decorations shared by every generated object.
    pub(super) fn object_schema(
        &self,
        properties: Map<String, Value>,
        required: Vec<String>,
    ) -> Value {
        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), json!(required));
        if self.stamp_additional_properties {
            if let Some(additional) = self.options.additional_properties {
                schema.insert("additionalProperties".to_string(), Value::Bool(additional));
            }
        }
        Value::Object(schema)
    }

    /// Compile a leaf type (scalar or enum) to an inline schema or a `$ref`.
    pub(super) fn compile_leaf(&mut self, leaf_type: &GraphQLType) -> Result<Value> {
        let type_name = leaf_type.name();
        if let GraphQLType::Enum(enum_type) = leaf_type {
            if !self.defs.contains(DefinitionKind::Enum, type_name) {
                let values: Vec<Value> =
                    enum_type.values()
                        .keys()
                        .map(|name| json!(name))
                        .collect();
                self.defs.insert(DefinitionKind::Enum, type_name, json!({"enum": values}));
            }
            return Ok(Definitions::ref_to(DefinitionKind::Enum, type_name));
        }

        match self.ctx.scalar_codec(leaf_type)? {
            Some(codec) => {
                if !self.defs.contains(DefinitionKind::Scalar, type_name) {
                    let schema = codec.schema_for(self.ctx.direction());
                    self.defs.insert(DefinitionKind::Scalar, type_name, schema);
                }
                Ok(Definitions::ref_to(DefinitionKind::Scalar, type_name))
            },

            None => BuiltinScalar::from_graphql_type(leaf_type)
                .map(|builtin| builtin.json_schema())
                .ok_or_else(|| WalkError::MissingScalarCodec(type_name.to_string())),
        }
    }

    /// Compile a composite type against the merged `selection_sets`.
    fn compile_composite(
        &mut self,
        composite_type: &GraphQLType,
        selection_sets: &[&'a ast::operation::SelectionSet],
    ) -> Result<Value> {
        match composite_type {
            GraphQLType::Object(_) => self.compile_object(composite_type, selection_sets),

            GraphQLType::Interface(_) | GraphQLType::Union(_) => {
                let type_system = self.ctx.type_system();
                let mut branches = vec![];
                for possible_type in type_system.possible_types(composite_type) {
                    let possible_type = self.ctx.type_by_name(possible_type.name())?;
                    branches.push(self.compile_object(possible_type, selection_sets)?);
                }
                if branches.is_empty() {
                    return Ok(json!({"not": {}}));
                }
                Ok(json!({"anyOf": branches}))
            },

            _ => Err(WalkError::UnexpectedSubSelection {
                field_name: String::new(),
                type_name: composite_type.name().to_string(),
            }),
        }
    }

    fn compile_object(
        &mut self,
        object_type: &GraphQLType,
        selection_sets: &[&'a ast::operation::SelectionSet],
    ) -> Result<Value> {
        let Some(obj) = object_type.as_object() else {
            return Err(WalkError::UnknownType(object_type.name().to_string()));
        };

        let fields = collect_fields(self.ctx, object_type, selection_sets)?;
        let mut properties = Map::new();
        let mut required = vec![];
        for (response_key, field_nodes) in &fields {
            let field_name = field_nodes[0].name.as_str();
            if field_name == "__typename" {
                properties.insert(
                    response_key.to_string(),
                    json!({"type": "string", "const": obj.name()}),
                );
                required.push(response_key.to_string());
                continue;
            }

            let field_def = obj.field(field_name).ok_or_else(|| WalkError::UnknownField {
                field_name: field_name.to_string(),
                type_name: obj.name().to_string(),
            })?;
            let field_type = field_def.type_annotation();
            let schema = self.compile_output_type(
                obj.name(),
                field_name,
                field_type,
                field_nodes,
            )?;

            if !(field_type.nullable() && self.options.optional_nullable_properties) {
                required.push(response_key.to_string());
            }
            properties.insert(response_key.to_string(), schema);
        }

        let mut schema = self.object_schema(properties, required);
        let fragment_branches =
            self.compile_fragment_branches(object_type, selection_sets, &fields)?;
        if !fragment_branches.is_empty() {
            if let Value::Object(map) = &mut schema {
                map.insert("allOf".to_string(), Value::Array(fragment_branches));
            }
        }
        Ok(schema)
    }

    /// Every fragment applied directly in `selection_sets` that contributes
    /// a response key not selected directly also gets its own open branch.
    fn compile_fragment_branches(
        &mut self,
        object_type: &GraphQLType,
        selection_sets: &[&'a ast::operation::SelectionSet],
        fields: &CollectedFields<'a>,
    ) -> Result<Vec<Value>> {
        use ast::operation::Selection;
        let type_system = self.ctx.type_system();
        let variables = self.ctx.variable_values();

        let mut direct_keys = HashSet::new();
        let mut fragment_sets = vec![];
        for selection_set in selection_sets {
            for selection in &selection_set.items {
                match selection {
                    Selection::Field(field) => {
                        if should_include(type_system, variables, &field.directives)? {
                            direct_keys.insert(
                                field.alias.as_deref().unwrap_or(field.name.as_str()),
                            );
                        }
                    },

                    Selection::FragmentSpread(spread) => {
                        if !should_include(type_system, variables, &spread.directives)? {
                            continue;
                        }
                        let Some(fragment) = self.ctx.fragments().get(&spread.fragment_name) else {
                            continue;
                        };
                        let ast::operation::TypeCondition::On(type_condition) =
                            &fragment.type_condition;
                        if fragment_type_applies(self.ctx, object_type, &fragment.name, type_condition)? {
                            fragment_sets.push(&fragment.selection_set);
                        }
                    },

                    Selection::InlineFragment(inline) => {
                        if !should_include(type_system, variables, &inline.directives)? {
                            continue;
                        }
                        let applies = match &inline.type_condition {
                            Some(ast::operation::TypeCondition::On(type_condition)) =>
                                fragment_type_applies(self.ctx, object_type, "<inline>", type_condition)?,
                            None => true,
                        };
                        if applies {
                            fragment_sets.push(&inline.selection_set);
                        }
                    },
                }
            }
        }

        let mut branches = vec![];
        if fragment_sets.is_empty() || fields.keys().all(|key| direct_keys.contains(key.as_str())) {
            return Ok(branches);
        }

        let stamp_before = self.stamp_additional_properties;
        self.stamp_additional_properties = false;
        for fragment_set in fragment_sets {
            let fragment_fields = collect_fields(self.ctx, object_type, &[fragment_set])?;
            if fragment_fields.keys().all(|key| direct_keys.contains(key.as_str())) {
                continue;
            }
            match self.compile_object(object_type, &[fragment_set]) {
                Ok(branch) => branches.push(branch),
                Err(err) => {
                    self.stamp_additional_properties = stamp_before;
                    return Err(err);
                },
            }
        }
        self.stamp_additional_properties = stamp_before;
        Ok(branches)
    }

    fn compile_output_type(
        &mut self,
        parent_type_name: &str,
        field_name: &str,
        type_annotation: &TypeAnnotation,
        field_nodes: &[&'a ast::operation::Field],
    ) -> Result<Value> {
        let schema = match type_annotation {
            TypeAnnotation::List(list_annot) => json!({
                "type": "array",
                "items": self.compile_output_type(
                    parent_type_name,
                    field_name,
                    list_annot.inner_type_annotation(),
                    field_nodes,
                )?,
            }),

            TypeAnnotation::Named(named_annot) => {
                let field_type = self.ctx.type_by_name(named_annot.graphql_type_name())?;
                let sub_selections: Vec<&'a ast::operation::SelectionSet> =
                    field_nodes.iter()
                        .map(|node| &node.selection_set)
                        .filter(|set| !set.items.is_empty())
                        .collect();

                if field_type.is_leaf() {
                    if !sub_selections.is_empty() {
                        return Err(WalkError::UnexpectedSubSelection {
                            field_name: field_name.to_string(),
                            type_name: parent_type_name.to_string(),
                        });
                    }
                    self.compile_leaf(field_type)?
                } else {
                    if sub_selections.is_empty() {
                        return Err(WalkError::MissingSubSelection {
                            field_name: field_name.to_string(),
                            type_name: parent_type_name.to_string(),
                        });
                    }
                    self.compile_composite(field_type, &sub_selections)?
                }
            },
        };

        Ok(if type_annotation.nullable() {
            make_nullable(schema)
        } else {
            schema
        })
    }
}
