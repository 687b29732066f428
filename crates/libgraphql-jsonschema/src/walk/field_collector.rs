use crate::ast;
use crate::directives::should_include;
use crate::types::GraphQLType;
use crate::walk::WalkContext;
use crate::walk_error::WalkError;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Field nodes grouped by response key (alias, or name when unaliased), in
/// the order each key first appears in the selection.
pub type CollectedFields<'a> = IndexMap<String, Vec<&'a ast::operation::Field>>;

/// [Collect the fields](https://spec.graphql.org/October2021/#CollectFields())
/// selected on a concrete object type.
///
/// `object_type` must be an object type: interfaces and unions are dispatched
/// to one of their possible types before their selections get collected.
/// Every selection set in `selection_sets` contributes to the same result,
/// which is how the sub-selections of several same-keyed field nodes are
/// merged.
///
/// Selections excluded by `@skip`/`@include` are dropped, fragment spreads
/// and inline fragments contribute only when their type condition applies to
/// `object_type`, and each named fragment is visited at most once per call.
pub fn collect_fields<'a>(
    ctx: &WalkContext<'a>,
    object_type: &GraphQLType,
    selection_sets: &[&'a ast::operation::SelectionSet],
) -> Result<CollectedFields<'a>, WalkError> {
    let mut fields = IndexMap::new();
    let mut visited_fragments = HashSet::new();
    for selection_set in selection_sets {
        collect_fields_impl(
            ctx,
            object_type,
            selection_set,
            &mut fields,
            &mut visited_fragments,
        )?;
    }
    Ok(fields)
}

fn collect_fields_impl<'a>(
    ctx: &WalkContext<'a>,
    object_type: &GraphQLType,
    selection_set: &'a ast::operation::SelectionSet,
    fields: &mut CollectedFields<'a>,
    visited_fragments: &mut HashSet<&'a str>,
) -> Result<(), WalkError> {
    use ast::operation::Selection;
    let type_system = ctx.type_system();
    let variables = ctx.variable_values();

    for selection in &selection_set.items {
        match selection {
            Selection::Field(field) => {
                if !should_include(type_system, variables, &field.directives)? {
                    continue;
                }
                let response_key = field.alias.as_deref().unwrap_or(field.name.as_str());
                fields.entry(response_key.to_string())
                    .or_insert_with(Vec::new)
                    .push(field);
            },

            Selection::FragmentSpread(spread) => {
                if !should_include(type_system, variables, &spread.directives)? {
                    continue;
                }
                let fragment_name = spread.fragment_name.as_str();
                if !visited_fragments.insert(fragment_name) {
                    continue;
                }
                let fragment = ctx.fragments()
                    .get(fragment_name)
                    .ok_or_else(|| WalkError::UnknownFragment(fragment_name.to_string()))?;
                let ast::operation::TypeCondition::On(type_condition) =
                    &fragment.type_condition;
                if !fragment_type_applies(ctx, object_type, fragment_name, type_condition)? {
                    continue;
                }
                collect_fields_impl(
                    ctx,
                    object_type,
                    &fragment.selection_set,
                    fields,
                    visited_fragments,
                )?;
            },

            Selection::InlineFragment(inline) => {
                if !should_include(type_system, variables, &inline.directives)? {
                    continue;
                }
                if let Some(ast::operation::TypeCondition::On(type_condition)) =
                    &inline.type_condition {
                    if !fragment_type_applies(ctx, object_type, "<inline>", type_condition)? {
                        continue;
                    }
                }
                collect_fields_impl(
                    ctx,
                    object_type,
                    &inline.selection_set,
                    fields,
                    visited_fragments,
                )?;
            },
        }
    }

    Ok(())
}

/// Whether a fragment with `type_condition` applies to `object_type`.
pub(crate) fn fragment_type_applies(
    ctx: &WalkContext<'_>,
    object_type: &GraphQLType,
    fragment_name: &str,
    type_condition: &str,
) -> Result<bool, WalkError> {
    let condition_type = ctx.type_by_name(type_condition)?;
    if !condition_type.is_composite() {
        return Err(WalkError::FragmentOnNonCompositeType {
            fragment_name: fragment_name.to_string(),
            type_name: type_condition.to_string(),
        });
    }
    Ok(ctx.type_system().is_subtype(condition_type, object_type))
}
