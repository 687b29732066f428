use crate::loc;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

/// Problems found once every definition and extension has been merged and
/// the types can be checked against each other.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "`{type_name}` implements `{non_interface_type_name}`, which is not \
        an interface ({non_interface_type_kind})"
    )]
    ImplementsNonInterfaceType {
        location: loc::SchemaDefLocation,
        non_interface_type_kind: GraphQLTypeKind,
        non_interface_type_name: String,
        type_name: String,
    },

    #[error(
        "`{type_name}` implements `{undefined_interface_name}`, which is not \
        defined"
    )]
    ImplementsUndefinedInterface {
        location: loc::SchemaDefLocation,
        type_name: String,
        undefined_interface_name: String,
    },

    #[error(
        "Input field `{parent_type_name}.{field_name}` is declared with \
        `{invalid_type_name}`, which is not an input type"
    )]
    InvalidInputFieldWithOutputType {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Field `{parent_type_name}.{field_name}` is declared with \
        `{input_type_name}`, which is an input object type"
    )]
    InvalidOutputFieldWithInputType {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Union `{union_type_name}` includes `{invalid_member_type_name}` \
        ({invalid_member_type_kind}). Union members must be object types"
    )]
    InvalidUnionMemberTypeKind {
        invalid_member_type_kind: GraphQLTypeKind,
        invalid_member_type_name: String,
        location: loc::SchemaDefLocation,
        union_type_name: String,
    },

    #[error(
        "`{type_name}` implements `{interface_name}` but does not declare \
        its `{field_name}` field"
    )]
    MissingInterfaceSpecifiedField {
        field_name: String,
        interface_name: String,
        location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error("Reference to undefined type `{undefined_type_name}`")]
    UndefinedTypeName {
        ref_location: loc::SchemaDefLocation,
        undefined_type_name: String,
    },
}
