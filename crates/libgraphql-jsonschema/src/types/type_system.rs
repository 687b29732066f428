use crate::ast;
use crate::operation::OperationKind;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::value_from_ast::value_from_ast;
use crate::value_from_ast::ValueFromAstError;
use serde_json::Map;
use serde_json::Value;

/// The read-only questions the compiler and transcoder ask about a GraphQL
/// schema.
///
/// [`Schema`](crate::schema::Schema) is the implementation that ships with
/// this crate, but anything that can answer these questions (a federated
/// supergraph, an introspection result, etc) can drive a walk. Every method
/// is expected to be pure: the walk may call them many times with the same
/// arguments.
pub trait TypeSystem: Send + Sync {
    /// Look up a named type. Builtin scalars are addressable by their GraphQL
    /// names (`Boolean`, `Float`, `ID`, `Int`, `String`).
    fn type_by_name(&self, name: &str) -> Option<&GraphQLType>;

    /// The object type serving as the root for operations of `kind`, or
    /// `None` when the schema doesn't support that kind of operation.
    fn root_operation_type(&self, kind: OperationKind) -> Option<&ObjectType>;

    /// Every concrete object type a value of `abstract_type` could be at
    /// runtime.
    ///
    /// Union members are returned in declaration order. For interfaces, every
    /// object type implementing it (directly or through another interface) is
    /// returned, ordered by name. Non-abstract types have no possible types.
    fn possible_types(&self, abstract_type: &GraphQLType) -> Vec<&ObjectType>;

    /// Whether `maybe_subtype` is `abstract_type` or one of its subtypes:
    /// an object implementing the interface, an interface implementing the
    /// interface, or an object belonging to the union.
    fn is_subtype(
        &self,
        abstract_type: &GraphQLType,
        maybe_subtype: &GraphQLType,
    ) -> bool;

    /// Resolve a literal (or variable reference) appearing as an argument in
    /// an executable document into a JSON value.
    fn coerce_argument_value(
        &self,
        value: &ast::operation::Value,
        variable_values: &Map<String, Value>,
    ) -> Result<Value, ValueFromAstError> {
        value_from_ast(value, variable_values)
    }
}
