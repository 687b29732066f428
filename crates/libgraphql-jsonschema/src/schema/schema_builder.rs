use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::schema::TypesMapBuilder;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Clone, Debug)]
struct RootTypeDef {
    def_location: loc::FilePosition,
    type_name: String,
}

/// Utility for building a [`Schema`] from SDL.
///
/// Definitions may be spread across any number of strings or files. Type
/// extensions are collected as they are encountered and merged only after
/// every definition has been loaded, so an extension may appear before the
/// type it extends.
#[derive(Debug)]
pub struct SchemaBuilder {
    mutation_type: Option<RootTypeDef>,
    query_type: Option<RootTypeDef>,
    subscription_type: Option<RootTypeDef>,
    type_extensions: Vec<(Option<PathBuf>, ast::schema::TypeExtension)>,
    types_map_builder: TypesMapBuilder,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            mutation_type: None,
            query_type: None,
            subscription_type: None,
            type_extensions: vec![],
            types_map_builder: TypesMapBuilder::new(),
        }
    }

    pub fn build(mut self) -> Result<Schema> {
        let type_extensions = std::mem::take(&mut self.type_extensions);
        for (file_path, ext) in type_extensions {
            self.merge_type_extension(file_path.as_deref(), ext)?;
        }

        let query_type_name = self.resolve_root_type_name(
            OperationKind::Query,
            self.query_type.clone(),
        )?.ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type_name = self.resolve_root_type_name(
            OperationKind::Mutation,
            self.mutation_type.clone(),
        )?;
        let subscription_type_name = self.resolve_root_type_name(
            OperationKind::Subscription,
            self.subscription_type.clone(),
        )?;

        let types = self.types_map_builder.into_types_map()?;
        log::debug!(
            "Built schema with {} types (query root: `{}`)",
            types.len(),
            query_type_name,
        );

        Ok(Schema {
            mutation_type_name,
            query_type_name,
            subscription_type_name,
            types,
        })
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        Self::new().load_file(file_path)
    }

    pub fn from_str(
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        Self::new().load_str(file_path, content)
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(Some(file_path), file_content)?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let doc = ast::schema::parse(content.as_ref())
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.map(|p| p.to_path_buf()),
                err: err.to_string(),
            })?;

        for def in doc.definitions {
            self.visit_definition(file_path, def)?;
        }

        Ok(self)
    }

    fn merge_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        let (type_name, position) = match &ext {
            TypeExtension::Enum(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::InputObject(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Interface(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Object(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Scalar(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Union(ext) => (ext.name.as_str(), ext.position),
        };
        let type_name = type_name.to_string();
        let ext_loc = loc::FilePosition::from_pos(file_path, position);
        let ext_def_location = loc::SchemaDefLocation::Schema(ext_loc.clone());

        let Some(existing_type) = self.types_map_builder.get_type_mut(&type_name) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_type_loc: ext_loc,
            });
        };

        match (existing_type, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) => {
                for value in ext.values {
                    let value_loc = loc::SchemaDefLocation::Schema(
                        loc::FilePosition::from_pos(file_path, value.position),
                    );
                    if let Some(existing) = enum_type.values.get(value.name.as_str()) {
                        return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                            enum_name: type_name,
                            value_name: value.name,
                            value_def1: existing.def_location.clone(),
                            value_def2: value_loc,
                        });
                    }
                    enum_type.values.insert(value.name.to_string(), EnumValue {
                        def_location: value_loc,
                        name: value.name,
                    });
                }
            },

            (GraphQLType::InputObject(inputobj), TypeExtension::InputObject(ext)) => {
                for field in ext.fields {
                    if let Some(existing) = inputobj.fields.get(field.name.as_str()) {
                        return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                            type_name,
                            field_name: field.name.to_string(),
                            field_def1: existing.def_location.clone(),
                            field_def2: ext_def_location,
                        });
                    }
                    let input_field = input_field_from_ast(file_path, &type_name, field)?;
                    inputobj.fields.insert(input_field.name.to_string(), input_field);
                }
            },

            (GraphQLType::Interface(InterfaceType(data)), TypeExtension::Interface(ext)) => {
                merge_object_or_interface_extension(
                    file_path,
                    data,
                    ext.implements_interfaces,
                    ext.fields,
                )?;
            },

            (GraphQLType::Object(ObjectType(data)), TypeExtension::Object(ext)) => {
                merge_object_or_interface_extension(
                    file_path,
                    data,
                    ext.implements_interfaces,
                    ext.fields,
                )?;
            },

            // Scalar extensions can only add directives, which carry no
            // meaning for schema compilation.
            (GraphQLType::Scalar(_), TypeExtension::Scalar(_)) => (),

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) => {
                for member_name in ext.types {
                    if union_type.member_names.contains(&member_name) {
                        return Err(SchemaBuildError::DuplicateUnionMember {
                            location: ext_loc,
                            member_name,
                            type_name,
                        });
                    }
                    union_type.member_names.push(member_name);
                }
            },

            (existing_type, _) => {
                return Err(SchemaBuildError::InvalidExtensionType {
                    schema_type_kind: existing_type.kind(),
                    type_name,
                    extension_type_loc: ext_loc,
                });
            },
        }

        Ok(())
    }

    fn resolve_root_type_name(
        &self,
        kind: OperationKind,
        explicit_def: Option<RootTypeDef>,
    ) -> Result<Option<String>> {
        let default_name = match kind {
            OperationKind::Mutation => "Mutation",
            OperationKind::Query => "Query",
            OperationKind::Subscription => "Subscription",
        };

        match explicit_def {
            Some(RootTypeDef { def_location, type_name }) => {
                match self.types_map_builder.get_type(type_name.as_str()) {
                    Some(GraphQLType::Object(_)) => Ok(Some(type_name)),
                    _ => Err(SchemaBuildError::InvalidRootOperationType {
                        def_location,
                        operation: kind,
                        type_name,
                    }),
                }
            },

            None => match self.types_map_builder.get_type(default_name) {
                Some(GraphQLType::Object(_)) => Ok(Some(default_name.to_string())),
                _ => Ok(None),
            },
        }
    }

    fn visit_definition(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_schemablock_definition(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_type_definition(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.type_extensions.push((file_path.map(|p| p.to_path_buf()), type_ext));
                Ok(())
            },
            // Directive definitions describe where directives may appear;
            // they don't change the shape of any data.
            Definition::DirectiveDefinition(_) => Ok(()),
        }
    }

    fn visit_schemablock_definition(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location = loc::FilePosition::from_pos(file_path, schema_def.position);
        let root_defs = [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ];

        for (kind, type_name) in root_defs {
            let Some(type_name) = type_name else {
                continue;
            };
            let slot = match kind {
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Query => &mut self.query_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation: kind,
                    location1: existing.def_location.clone(),
                    location2: def_location,
                });
            }
            *slot = Some(RootTypeDef {
                def_location: def_location.clone(),
                type_name,
            });
        }

        Ok(())
    }

    fn visit_type_definition(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        let (type_name, def_location, type_) = match type_def {
            TypeDefinition::Enum(def) => {
                let def_location = schema_def_location(file_path, def.position);
                let mut values: IndexMap<String, EnumValue> = IndexMap::new();
                for value in def.values {
                    let value_loc = schema_def_location(file_path, value.position);
                    if let Some(existing) = values.get(value.name.as_str()) {
                        return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                            enum_name: def.name,
                            value_name: value.name,
                            value_def1: existing.def_location.clone(),
                            value_def2: value_loc,
                        });
                    }
                    values.insert(value.name.to_string(), EnumValue {
                        def_location: value_loc,
                        name: value.name,
                    });
                }
                if values.is_empty() {
                    return Err(SchemaBuildError::EnumWithNoValues {
                        def_location,
                        enum_name: def.name,
                    });
                }
                (def.name.to_string(), def_location.clone(), GraphQLType::Enum(EnumType {
                    def_location,
                    description: def.description,
                    name: def.name,
                    values,
                }))
            },

            TypeDefinition::InputObject(def) => {
                let def_location = schema_def_location(file_path, def.position);
                let mut fields: IndexMap<String, InputField> = IndexMap::new();
                for field in def.fields {
                    if let Some(existing) = fields.get(field.name.as_str()) {
                        return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                            type_name: def.name,
                            field_name: field.name.to_string(),
                            field_def1: existing.def_location.clone(),
                            field_def2: schema_def_location(file_path, field.position),
                        });
                    }
                    let input_field = input_field_from_ast(file_path, &def.name, field)?;
                    fields.insert(input_field.name.to_string(), input_field);
                }
                (def.name.to_string(), def_location.clone(), GraphQLType::InputObject(InputObjectType {
                    def_location,
                    description: def.description,
                    fields,
                    name: def.name,
                }))
            },

            TypeDefinition::Interface(def) => {
                let def_location = schema_def_location(file_path, def.position);
                let data = object_or_interface_data_from_ast(
                    file_path,
                    def_location.clone(),
                    def.name.as_str(),
                    def.description,
                    def.implements_interfaces,
                    def.fields,
                )?;
                (def.name, def_location, GraphQLType::Interface(InterfaceType(data)))
            },

            TypeDefinition::Object(def) => {
                let def_location = schema_def_location(file_path, def.position);
                let data = object_or_interface_data_from_ast(
                    file_path,
                    def_location.clone(),
                    def.name.as_str(),
                    def.description,
                    def.implements_interfaces,
                    def.fields,
                )?;
                (def.name, def_location, GraphQLType::Object(ObjectType(data)))
            },

            TypeDefinition::Scalar(def) => {
                let def_location = schema_def_location(file_path, def.position);
                (def.name.to_string(), def_location.clone(), GraphQLType::Scalar(ScalarType {
                    def_location,
                    description: def.description,
                    name: def.name,
                }))
            },

            TypeDefinition::Union(def) => {
                let def_location = schema_def_location(file_path, def.position);
                let mut member_names: Vec<String> = vec![];
                for member_name in def.types {
                    if member_names.contains(&member_name) {
                        return Err(SchemaBuildError::DuplicateUnionMember {
                            location: loc::FilePosition::from_pos(file_path, def.position),
                            member_name,
                            type_name: def.name,
                        });
                    }
                    member_names.push(member_name);
                }
                (def.name.to_string(), def_location.clone(), GraphQLType::Union(UnionType {
                    def_location,
                    description: def.description,
                    member_names,
                    name: def.name,
                }))
            },
        };

        self.types_map_builder.add_new_type(type_name.as_str(), &def_location, type_)
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn schema_def_location(
    file_path: Option<&Path>,
    pos: ast::AstPos,
) -> loc::SchemaDefLocation {
    loc::SchemaDefLocation::Schema(loc::FilePosition::from_pos(file_path, pos))
}

fn field_from_ast(
    file_path: Option<&Path>,
    type_name: &str,
    field: ast::schema::Field,
) -> Result<Field> {
    let def_location = schema_def_location(file_path, field.position);
    if field.name.starts_with("__") {
        return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
            def_location,
            field_name: field.name,
            type_name: type_name.to_string(),
        });
    }
    Ok(Field {
        type_annotation: TypeAnnotation::from_ast_type(&def_location, &field.field_type),
        def_location,
        description: field.description,
        name: field.name,
    })
}

fn input_field_from_ast(
    file_path: Option<&Path>,
    type_name: &str,
    field: ast::schema::InputValue,
) -> Result<InputField> {
    let def_location = schema_def_location(file_path, field.position);
    if field.name.starts_with("__") {
        return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
            def_location,
            field_name: field.name,
            type_name: type_name.to_string(),
        });
    }
    Ok(InputField {
        type_annotation: TypeAnnotation::from_ast_type(&def_location, &field.value_type),
        def_location,
        default_value: field.default_value,
        description: field.description,
        name: field.name,
    })
}

fn merge_object_or_interface_extension(
    file_path: Option<&Path>,
    data: &mut ObjectOrInterfaceTypeData,
    implements_interfaces: Vec<String>,
    fields: Vec<ast::schema::Field>,
) -> Result<()> {
    for iface_name in implements_interfaces {
        if !data.interface_names.contains(&iface_name) {
            data.interface_names.push(iface_name);
        }
    }
    for field in fields {
        if let Some(existing) = data.fields.get(field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: data.name.to_string(),
                field_name: field.name.to_string(),
                field_def1: existing.def_location.clone(),
                field_def2: schema_def_location(file_path, field.position),
            });
        }
        let field = field_from_ast(file_path, data.name.as_str(), field)?;
        data.fields.insert(field.name.to_string(), field);
    }
    Ok(())
}

fn object_or_interface_data_from_ast(
    file_path: Option<&Path>,
    def_location: loc::SchemaDefLocation,
    type_name: &str,
    description: Option<String>,
    implements_interfaces: Vec<String>,
    ast_fields: Vec<ast::schema::Field>,
) -> Result<ObjectOrInterfaceTypeData> {
    let mut data = ObjectOrInterfaceTypeData {
        def_location,
        description,
        fields: IndexMap::new(),
        interface_names: vec![],
        name: type_name.to_string(),
    };
    merge_object_or_interface_extension(
        file_path,
        &mut data,
        implements_interfaces,
        ast_fields,
    )?;
    Ok(data)
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Enum value `{enum_name}.{value_name}` is defined more than once")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
        value_def1: loc::SchemaDefLocation,
        value_def2: loc::SchemaDefLocation,
    },

    #[error("Field `{type_name}.{field_name}` is defined more than once")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SchemaDefLocation,
        field_def2: loc::SchemaDefLocation,
    },

    #[error("The {operation:?} root operation type is defined more than once")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: loc::FilePosition,
        location2: loc::FilePosition,
    },

    #[error("Type `{type_name}` is defined more than once")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("Union `{type_name}` lists `{member_name}` more than once")]
    DuplicateUnionMember {
        location: loc::FilePosition,
        member_name: String,
        type_name: String,
    },

    #[error("Enum `{enum_name}` must define at least one value")]
    EnumWithNoValues {
        def_location: loc::SchemaDefLocation,
        enum_name: String,
    },

    #[error("Extension at {extension_type_loc} extends undefined type `{type_name}`")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_type_loc: loc::FilePosition,
    },

    #[error(
        "Field `{type_name}.{field_name}` starts with `__`, which is reserved \
        for introspection"
    )]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        type_name: String,
    },

    #[error(
        "Type `{type_name}` starts with `__`, which is reserved for \
        introspection"
    )]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error(
        "Extension at {extension_type_loc} does not match the kind of \
        `{type_name}` ({schema_type_kind})"
    )]
    InvalidExtensionType {
        schema_type_kind: GraphQLTypeKind,
        type_name: String,
        extension_type_loc: loc::FilePosition,
    },

    #[error(
        "The {operation:?} root operation type `{type_name}` is not a \
        defined object type"
    )]
    InvalidRootOperationType {
        def_location: loc::FilePosition,
        operation: OperationKind,
        type_name: String,
    },

    #[error("No query root operation type is defined")]
    NoQueryOperationTypeDefined,

    #[error("Failed to parse schema: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("Failed to read schema file: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error("Schema has {} type validation errors", .errors.len())]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}
