use crate::loc;
use crate::types::GraphQLType;
use crate::types::TypeSystem;

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(super) nullable: bool,
    pub(super) ref_location: loc::SchemaDefLocation,
    pub(super) type_name: String,
}
impl NamedTypeAnnotation {
    /// Look up the [`GraphQLType`] this annotation names. Returns `None` for
    /// a dangling reference.
    pub fn graphql_type<'ts, T: TypeSystem + ?Sized>(
        &self,
        type_system: &'ts T,
    ) -> Option<&'ts GraphQLType> {
        type_system.type_by_name(self.type_name.as_str())
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::SchemaDefLocation {
        &self.ref_location
    }

    pub fn to_graphql_string(&self) -> String {
        format!(
            "{}{}",
            self.type_name,
            if self.nullable { "" } else { "!" },
        )
    }
}
