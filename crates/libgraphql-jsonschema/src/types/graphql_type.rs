use crate::loc;
use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// Represents a defined GraphQL type.
///
/// The five builtin scalars (`Boolean`, `Float`, `ID`, `Int` and `String`)
/// carry no data of their own. Every other variant wraps the type-specific
/// definition that was read from the schema.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> loc::SchemaDefLocation {
        match self {
            Self::Bool
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::String =>
                loc::SchemaDefLocation::GraphQLBuiltIn,
            Self::Enum(t) => t.def_location().to_owned(),
            Self::InputObject(t) => t.def_location().to_owned(),
            Self::Interface(t) => t.def_location().to_owned(),
            Self::Object(t) => t.def_location().to_owned(),
            Self::Scalar(t) => t.def_location().to_owned(),
            Self::Union(t) => t.def_location().to_owned(),
        }
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        match self {
            Self::Bool => GraphQLTypeKind::Bool,
            Self::Enum(_) => GraphQLTypeKind::Enum,
            Self::Float => GraphQLTypeKind::Float,
            Self::ID => GraphQLTypeKind::ID,
            Self::InputObject(_) => GraphQLTypeKind::InputObject,
            Self::Int => GraphQLTypeKind::Int,
            Self::Interface(_) => GraphQLTypeKind::Interface,
            Self::Object(_) => GraphQLTypeKind::Object,
            Self::Scalar(_) => GraphQLTypeKind::Scalar,
            Self::String => GraphQLTypeKind::String,
            Self::Union(_) => GraphQLTypeKind::Union,
        }
    }

    /// Interfaces and unions: the types whose concrete shape is only known
    /// once `__typename` is.
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    pub fn is_composite(&self) -> bool {
        self.kind().is_composite()
    }

    pub fn is_input_type(&self) -> bool {
        self.kind().is_input_type()
    }

    pub fn is_leaf(&self) -> bool {
        self.kind().is_leaf()
    }

    pub fn is_output_type(&self) -> bool {
        self.kind().is_output_type()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum(t) => t.name(),
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject(t) => t.name(),
            Self::Int => "Int",
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::String => "String",
            Self::Union(t) => t.name(),
        }
    }
}
