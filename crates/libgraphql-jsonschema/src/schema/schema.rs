use crate::operation::OperationKind;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeSystem;
use indexmap::IndexMap;
use inherent::inherent;
use std::collections::HashSet;

/// A fully built and validated GraphQL schema.
///
/// Build one with a [`SchemaBuilder`](crate::schema::SchemaBuilder):
///
/// ```
/// use libgraphql_jsonschema::schema::SchemaBuilder;
/// use libgraphql_jsonschema::types::TypeSystem;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { hello: String }")
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert!(schema.type_by_name("Query").is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(super) mutation_type_name: Option<String>,
    pub(super) query_type_name: String,
    pub(super) subscription_type_name: Option<String>,
    pub(super) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Whether `type_name` names `iface_name`, or an object/interface
    /// implementing it directly or through other interfaces.
    fn implements(&self, type_name: &str, iface_name: &str) -> bool {
        let mut seen = HashSet::new();
        self.implements_impl(type_name, iface_name, &mut seen)
    }

    fn implements_impl<'a>(
        &'a self,
        type_name: &'a str,
        iface_name: &str,
        seen: &mut HashSet<&'a str>,
    ) -> bool {
        if !seen.insert(type_name) {
            return false;
        }

        let iface_names = match self.types.get(type_name) {
            Some(GraphQLType::Object(obj)) => obj.interface_names(),
            Some(GraphQLType::Interface(iface)) => iface.interface_names(),
            _ => return false,
        };

        iface_names.into_iter().any(|name| {
            name == iface_name || self.implements_impl(name, iface_name, seen)
        })
    }

    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type_name
            .as_deref()
            .and_then(|name| self.types.get(name))
            .and_then(|type_| type_.as_object())
    }

    pub fn query_type(&self) -> &ObjectType {
        // SchemaBuilder refuses to build a schema without an object-typed
        // query root.
        self.types
            .get(self.query_type_name.as_str())
            .and_then(|type_| type_.as_object())
            .unwrap_or_else(|| panic!(
                "Schema query type `{}` is not an object type",
                self.query_type_name,
            ))
    }

    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.subscription_type_name
            .as_deref()
            .and_then(|name| self.types.get(name))
            .and_then(|type_| type_.as_object())
    }

    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }
}

#[inherent]
impl TypeSystem for Schema {
    pub fn type_by_name(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&ObjectType> {
        match kind {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => Some(self.query_type()),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    pub fn possible_types(&self, abstract_type: &GraphQLType) -> Vec<&ObjectType> {
        match abstract_type {
            GraphQLType::Union(union_type) =>
                union_type.member_type_names()
                    .into_iter()
                    .filter_map(|name| self.types.get(name))
                    .filter_map(|type_| type_.as_object())
                    .collect(),

            GraphQLType::Interface(iface) => {
                let mut impls: Vec<&ObjectType> =
                    self.types
                        .values()
                        .filter_map(|type_| type_.as_object())
                        .filter(|obj| self.implements(obj.name(), iface.name()))
                        .collect();
                impls.sort_by(|a, b| a.name().cmp(b.name()));
                impls
            },

            _ => vec![],
        }
    }

    pub fn is_subtype(
        &self,
        abstract_type: &GraphQLType,
        maybe_subtype: &GraphQLType,
    ) -> bool {
        if abstract_type.name() == maybe_subtype.name() {
            return true;
        }

        match (abstract_type, maybe_subtype) {
            (GraphQLType::Interface(iface), GraphQLType::Object(_))
            | (GraphQLType::Interface(iface), GraphQLType::Interface(_))
                => self.implements(maybe_subtype.name(), iface.name()),

            (GraphQLType::Union(union_type), GraphQLType::Object(obj))
                => union_type.member_type_names().contains(&obj.name()),

            (_, _) => false,
        }
    }
}
