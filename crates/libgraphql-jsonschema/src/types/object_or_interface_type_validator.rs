use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;

pub(crate) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a ObjectOrInterfaceTypeData,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        type_: &'a ObjectOrInterfaceTypeData,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        self.validate_fields();
        self.validate_interfaces();
        self.errors
    }

    fn validate_fields(&mut self) {
        for (field_name, field) in self.type_.fields() {
            let innermost_type_name =
                field.type_annotation()
                    .innermost_named_type_annotation()
                    .graphql_type_name();

            match self.types_map.get(innermost_type_name) {
                // Fields can only be declared with output types.
                //
                // https://spec.graphql.org/October2021/#sel-FAHZhCFDBAACDA4qe
                Some(field_type) if !field_type.is_output_type() =>
                    self.errors.push(
                        TypeValidationError::InvalidOutputFieldWithInputType {
                            def_location: field.def_location().to_owned(),
                            field_name: field_name.to_owned(),
                            input_type_name: innermost_type_name.to_string(),
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
    }

    fn validate_interfaces(&mut self) {
        for iface_name in self.type_.interface_names() {
            let iface = match self.types_map.get(iface_name) {
                Some(GraphQLType::Interface(iface)) => iface,

                Some(non_iface_type) => {
                    self.errors.push(TypeValidationError::ImplementsNonInterfaceType {
                        location: self.type_.def_location().to_owned(),
                        non_interface_type_name: iface_name.to_string(),
                        non_interface_type_kind: non_iface_type.kind(),
                        type_name: self.type_.name().to_string(),
                    });
                    continue;
                },

                None => {
                    self.errors.push(TypeValidationError::ImplementsUndefinedInterface {
                        location: self.type_.def_location().to_owned(),
                        type_name: self.type_.name().to_string(),
                        undefined_interface_name: iface_name.to_string(),
                    });
                    continue;
                },
            };

            // Every field the interface specifies must also be declared on
            // the implementing type.
            //
            // https://spec.graphql.org/October2021/#IsValidImplementation()
            for iface_field_name in iface.fields().keys() {
                if self.type_.field(iface_field_name).is_none() {
                    self.errors.push(TypeValidationError::MissingInterfaceSpecifiedField {
                        field_name: iface_field_name.to_string(),
                        interface_name: iface_name.to_string(),
                        location: self.type_.def_location().to_owned(),
                        type_name: self.type_.name().to_string(),
                    });
                }
            }
        }
    }
}
