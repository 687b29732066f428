use crate::loc;
use crate::scalar::BuiltinScalar;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputObjectTypeValidator;
use crate::types::ObjectOrInterfaceTypeValidator;
use crate::types::UnionTypeValidator;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Accumulates type definitions in declaration order, seeded with the
/// builtin scalars.
#[derive(Debug)]
pub(super) struct TypesMapBuilder {
    types: IndexMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            types: BuiltinScalar::ALL
                .iter()
                .map(|scalar| (scalar.name().to_string(), scalar.graphql_type()))
                .collect(),
        }
    }

    pub fn add_new_type(
        &mut self,
        type_name: &str,
        type_loc: &loc::SchemaDefLocation,
        type_: GraphQLType,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_loc.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(existing) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: existing.def_location(),
                def2: type_loc.to_owned(),
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    pub fn get_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    pub fn get_type_mut(&mut self, type_name: &str) -> Option<&mut GraphQLType> {
        self.types.get_mut(type_name)
    }

    /// Cross-check every type against the others once all definitions and
    /// extensions have been merged.
    pub fn into_types_map(self) -> Result<IndexMap<String, GraphQLType>> {
        let errors: Vec<TypeValidationError> = self.types
            .values()
            .flat_map(|type_| self.type_errors(type_))
            .collect();

        if errors.is_empty() {
            Ok(self.types)
        } else {
            Err(SchemaBuildError::TypeValidationErrors { errors })
        }
    }

    fn type_errors(&self, type_: &GraphQLType) -> Vec<TypeValidationError> {
        match type_ {
            GraphQLType::InputObject(input_type) =>
                InputObjectTypeValidator::new(input_type, &self.types).validate(),

            GraphQLType::Interface(iface_type) =>
                ObjectOrInterfaceTypeValidator::new(&iface_type.0, &self.types).validate(),

            GraphQLType::Object(obj_type) =>
                ObjectOrInterfaceTypeValidator::new(&obj_type.0, &self.types).validate(),

            GraphQLType::Union(union_type) =>
                UnionTypeValidator::new(union_type, &self.types).validate(),

            GraphQLType::Bool
            | GraphQLType::Enum(_)
            | GraphQLType::Float
            | GraphQLType::ID
            | GraphQLType::Int
            | GraphQLType::Scalar(_)
            | GraphQLType::String => vec![],
        }
    }
}
