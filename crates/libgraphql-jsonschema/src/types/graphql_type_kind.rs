/// The category of a [`GraphQLType`](crate::types::GraphQLType), without any
/// of the type-specific data.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTypeKind {
    Bool,
    Enum,
    Float,
    ID,
    InputObject,
    Int,
    Interface,
    Object,
    Scalar,
    String,
    Union,
}
impl GraphQLTypeKind {
    /// Composite types require a sub-selection when they appear in an output
    /// position.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface | Self::Object | Self::Union)
    }

    pub fn is_input_type(&self) -> bool {
        !self.is_composite()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::Enum
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::Scalar
                | Self::String,
        )
    }

    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject)
    }
}
impl std::fmt::Display for GraphQLTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Bool => "builtin scalar",
            Self::Enum => "enum",
            Self::Float => "builtin scalar",
            Self::ID => "builtin scalar",
            Self::InputObject => "input object",
            Self::Int => "builtin scalar",
            Self::Interface => "interface",
            Self::Object => "object",
            Self::Scalar => "scalar",
            Self::String => "builtin scalar",
            Self::Union => "union",
        };
        f.write_str(label)
    }
}
