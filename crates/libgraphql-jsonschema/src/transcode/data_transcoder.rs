use crate::ast;
use crate::operation::OperationRef;
use crate::scalar::BuiltinScalar;
use crate::scalar::json_kind;
use crate::transcode::PathSegment;
use crate::transcode::ValidationIssue;
use crate::transcode::ValidationResult;
use crate::transcode::into_validation_result;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::walk::collect_fields;
use crate::walk::WalkContext;
use crate::walk_error::WalkError;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, WalkError>;

/// Walk `value` against the data `selection_set` selects on `root_type`,
/// converting every custom scalar in the context's direction.
///
/// Problems with the schema, document, or registry abort the walk with a
/// [`WalkError`]. Problems with the data itself are all collected: the
/// result is either the transcoded value or the complete list of issues.
pub fn transcode<'a>(
    ctx: &WalkContext<'a>,
    value: &Value,
    root_type: &GraphQLType,
    selection_set: &'a ast::operation::SelectionSet,
) -> Result<ValidationResult<Value>> {
    let mut transcoder = DataTranscoder::new(ctx);
    let transcoded = transcoder.transcode_composite(value, root_type, &[selection_set])?;
    Ok(transcoder.finish(transcoded))
}

/// Transcode the `data` of an operation's response.
pub fn transcode_operation_data<'a>(
    ctx: &WalkContext<'a>,
    operation: &OperationRef<'a>,
    value: &Value,
) -> Result<ValidationResult<Value>> {
    let root_type = ctx.type_system()
        .root_operation_type(operation.kind())
        .ok_or(WalkError::NoRootOperationType(operation.kind()))?;
    let root_type = ctx.type_by_name(root_type.name())?;
    log::trace!(
        "Transcoding ({}) data for operation {:?}",
        ctx.direction(),
        operation.name(),
    );
    transcode(ctx, value, root_type, operation.selection_set())
}

/// Transcode data shaped by a named fragment.
pub fn transcode_fragment_data<'a>(
    ctx: &WalkContext<'a>,
    fragment: &'a ast::operation::FragmentDefinition,
    value: &Value,
) -> Result<ValidationResult<Value>> {
    let ast::operation::TypeCondition::On(type_condition) = &fragment.type_condition;
    let fragment_type = ctx.type_by_name(type_condition)?;
    if !fragment_type.is_composite() {
        return Err(WalkError::FragmentOnNonCompositeType {
            fragment_name: fragment.name.to_string(),
            type_name: type_condition.to_string(),
        });
    }
    log::trace!(
        "Transcoding ({}) data for fragment `{}`",
        ctx.direction(),
        fragment.name,
    );
    transcode(ctx, value, fragment_type, &fragment.selection_set)
}

/// Shared state for one transcode walk. Every failing position pushes
/// exactly one issue and yields `None`; parents propagate the `None` without
/// adding issues of their own, and siblings keep being walked.
pub(super) struct DataTranscoder<'c, 'a> {
    pub(super) ctx: &'c WalkContext<'a>,
    pub(super) issues: Vec<ValidationIssue>,
    pub(super) path: Vec<PathSegment>,
}
impl<'c, 'a> DataTranscoder<'c, 'a> {
    pub(super) fn new(ctx: &'c WalkContext<'a>) -> Self {
        Self {
            ctx,
            issues: vec![],
            path: vec![],
        }
    }

    pub(super) fn finish(self, transcoded: Option<Value>) -> ValidationResult<Value> {
        into_validation_result(transcoded.unwrap_or(Value::Null), self.issues)
    }

    pub(super) fn issue(&mut self, message: impl Into<String>) {
        self.issues.push(ValidationIssue::new(self.path.clone(), message));
    }

    /// Transcode a builtin scalar, custom scalar, or enum value.
    pub(super) fn transcode_leaf(
        &mut self,
        value: &Value,
        leaf_type: &GraphQLType,
    ) -> Result<Option<Value>> {
        if let GraphQLType::Enum(enum_type) = leaf_type {
            return Ok(match value.as_str() {
                Some(name) if enum_type.has_value(name) => Some(value.clone()),
                _ => {
                    self.issue(format!(
                        "Expected a value of enum `{}`, got {}",
                        enum_type.name(),
                        describe(value),
                    ));
                    None
                },
            });
        }

        match self.ctx.scalar_codec(leaf_type)? {
            Some(codec) => match codec.transcode(value, self.ctx.direction()) {
                Ok(transcoded) => Ok(Some(transcoded)),
                Err(err) => {
                    self.issue(format!(
                        "Invalid value for scalar `{}`: {}",
                        leaf_type.name(),
                        err.message(),
                    ));
                    Ok(None)
                },
            },

            None => {
                let builtin = BuiltinScalar::from_graphql_type(leaf_type)
                    .ok_or_else(|| WalkError::MissingScalarCodec(leaf_type.name().to_string()))?;
                match builtin.validate(value) {
                    Ok(validated) => Ok(Some(validated)),
                    Err(message) => {
                        self.issue(message);
                        Ok(None)
                    },
                }
            },
        }
    }

    fn transcode_composite(
        &mut self,
        value: &Value,
        composite_type: &GraphQLType,
        selection_sets: &[&'a ast::operation::SelectionSet],
    ) -> Result<Option<Value>> {
        let Value::Object(map) = value else {
            self.issue(format!(
                "Expected an object for `{}`, got {}",
                composite_type.name(),
                json_kind(value),
            ));
            return Ok(None);
        };

        if !composite_type.is_abstract() {
            return self.transcode_object(map, composite_type, selection_sets);
        }

        let concrete_type = match map.get("__typename") {
            None => {
                self.issue(format!(
                    "Missing `__typename`, which is needed to resolve abstract \
                    type `{}`",
                    composite_type.name(),
                ));
                return Ok(None);
            },

            Some(Value::String(typename)) => {
                let type_system = self.ctx.type_system();
                match type_system.type_by_name(typename) {
                    Some(concrete @ GraphQLType::Object(_))
                        if type_system.is_subtype(composite_type, concrete) => concrete,
                    Some(_) => {
                        self.issue(format!(
                            "`{typename}` is not a possible type of `{}`",
                            composite_type.name(),
                        ));
                        return Ok(None);
                    },
                    None => {
                        self.issue(format!("`__typename` names unknown type `{typename}`"));
                        return Ok(None);
                    },
                }
            },

            Some(other) => {
                self.issue(format!(
                    "Expected `__typename` to be a string, got {}",
                    json_kind(other),
                ));
                return Ok(None);
            },
        };

        self.transcode_object(map, concrete_type, selection_sets)
    }

    fn transcode_object(
        &mut self,
        map: &Map<String, Value>,
        object_type: &GraphQLType,
        selection_sets: &[&'a ast::operation::SelectionSet],
    ) -> Result<Option<Value>> {
        let Some(obj) = object_type.as_object() else {
            return Err(WalkError::UnknownType(object_type.name().to_string()));
        };

        let fields = collect_fields(self.ctx, object_type, selection_sets)?;
        let mut transcoded = Map::new();
        let mut failed = false;
        for (response_key, field_nodes) in &fields {
            let field_name = field_nodes[0].name.as_str();
            self.path.push(PathSegment::Key(response_key.to_string()));

            let field_value = map.get(response_key.as_str());
            let result = if field_name == "__typename" {
                self.transcode_typename(field_value, obj.name())
            } else {
                let field_def = obj.field(field_name).ok_or_else(|| WalkError::UnknownField {
                    field_name: field_name.to_string(),
                    type_name: obj.name().to_string(),
                })?;
                let field_type = field_def.type_annotation();
                match field_value {
                    Some(field_value) => self.transcode_output(
                        obj.name(),
                        field_value,
                        field_type,
                        field_nodes,
                    )?,
                    None if field_type.nullable() => {
                        self.path.pop();
                        continue;
                    },
                    None => {
                        self.issue(format!(
                            "Missing value for non-null field `{}.{}`",
                            obj.name(),
                            field_name,
                        ));
                        None
                    },
                }
            };

            match result {
                Some(value) => {
                    transcoded.insert(response_key.to_string(), value);
                },
                None => failed = true,
            }
            self.path.pop();
        }

        Ok(if failed { None } else { Some(Value::Object(transcoded)) })
    }

    fn transcode_output(
        &mut self,
        parent_type_name: &str,
        value: &Value,
        type_annotation: &TypeAnnotation,
        field_nodes: &[&'a ast::operation::Field],
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
                    let result = self.transcode_output(
                        parent_type_name,
                        item,
                        list_annot.inner_type_annotation(),
                        field_nodes,
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
                let field_type = self.ctx.type_by_name(named_annot.graphql_type_name())?;
                let sub_selections: Vec<&'a ast::operation::SelectionSet> =
                    field_nodes.iter()
                        .map(|node| &node.selection_set)
                        .filter(|set| !set.items.is_empty())
                        .collect();

                if field_type.is_leaf() {
                    if !sub_selections.is_empty() {
                        return Err(WalkError::UnexpectedSubSelection {
                            field_name: field_nodes[0].name.to_string(),
                            type_name: parent_type_name.to_string(),
                        });
                    }
                    return self.transcode_leaf(value, field_type);
                }
                if sub_selections.is_empty() {
                    return Err(WalkError::MissingSubSelection {
                        field_name: field_nodes[0].name.to_string(),
                        type_name: parent_type_name.to_string(),
                    });
                }
                self.transcode_composite(value, field_type, &sub_selections)
            },
        }
    }

    fn transcode_typename(
        &mut self,
        value: Option<&Value>,
        object_type_name: &str,
    ) -> Option<Value> {
        match value {
            Some(Value::String(typename)) if typename == object_type_name =>
                Some(Value::String(typename.to_string())),
            Some(other) => {
                self.issue(format!(
                    "Expected `__typename` to be \"{object_type_name}\", got {}",
                    describe(other),
                ));
                None
            },
            None => {
                self.issue("Missing value for non-null field `__typename`");
                None
            },
        }
    }
}

/// Like [`json_kind`], but quoting short strings so enum and `__typename`
/// mismatches show the offending value.
fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        other => json_kind(other).to_string(),
    }
}
