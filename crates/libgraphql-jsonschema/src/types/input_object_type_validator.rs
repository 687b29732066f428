use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use indexmap::IndexMap;

pub(crate) struct InputObjectTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a InputObjectType,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(
        type_: &'a InputObjectType,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        for (field_name, field) in self.type_.fields() {
            let innermost_type_name =
                field.type_annotation()
                    .innermost_named_type_annotation()
                    .graphql_type_name();

            match self.types_map.get(innermost_type_name) {
                // Input object fields can only be declared with input types.
                //
                // https://spec.graphql.org/October2021/#sel-IAHhBXDDBFCAACEB4iG
                Some(innermost_type) if !innermost_type.is_input_type() =>
                    self.errors.push(
                        TypeValidationError::InvalidInputFieldWithOutputType {
                            def_location: field.def_location().to_owned(),
                            field_name: field_name.to_owned(),
                            invalid_type_name: innermost_type_name.to_string(),
                            parent_type_name: self.type_.name().to_string(),
                        }
                    ),

                Some(_) => (),

                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: field.def_location().to_owned(),
                    undefined_type_name: innermost_type_name.to_string(),
                }),
            }
        }
        self.errors
    }
}
