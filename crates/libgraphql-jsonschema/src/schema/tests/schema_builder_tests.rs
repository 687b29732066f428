use crate::operation::OperationKind;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::TypeSystem;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod roots {
    use super::*;

    #[test]
    fn default_root_names() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Mutation { a: Int }\n",
                "type Query { a: Int }\n",
                "type Subscription { a: Int }",
            ))?
            .build()?;

        assert_eq!(schema.query_type().name(), "Query");
        assert_eq!(schema.mutation_type().unwrap().name(), "Mutation");
        assert_eq!(schema.subscription_type().unwrap().name(), "Subscription");
        // 5 builtins + 3 roots
        assert_eq!(schema.types().len(), 8);
        Ok(())
    }

    #[test]
    fn schema_block_renames_roots() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "schema { query: Root mutation: Change }\n",
            "type Root { a: Int }\n",
            "type Change { b: Int }\n",
            "type Query { ignored: Int }",
        ))?.build()?;

        assert_eq!(schema.query_type().name(), "Root");
        assert_eq!(
            schema.root_operation_type(OperationKind::Mutation).unwrap().name(),
            "Change",
        );
        assert!(schema.root_operation_type(OperationKind::Subscription).is_none());
        Ok(())
    }

    #[test]
    fn missing_query_root() -> Result<()> {
        let result = SchemaBuilder::from_str(None, "type Mutation { a: Int }")?.build();
        assert_eq!(result.unwrap_err(), SchemaBuildError::NoQueryOperationTypeDefined);
        Ok(())
    }

    #[test]
    fn root_must_be_an_object() -> Result<()> {
        let result = SchemaBuilder::from_str(None, concat!(
            "schema { query: Root }\n",
            "input Root { a: Int }",
        ))?.build();
        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidRootOperationType { type_name, .. })
                if type_name == "Root",
        ));
        Ok(())
    }

    #[test]
    fn duplicate_schema_block_entry() {
        let result = SchemaBuilder::from_str(None, concat!(
            "schema { query: Query }\n",
            "schema { query: Query }\n",
            "type Query { a: Int }",
        ));
        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateOperationDefinition {
                operation: OperationKind::Query,
                ..
            }),
        ));
    }
}

mod definitions {
    use super::*;

    #[test]
    fn duplicate_type() {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "type Query { b: Int }",
        ));
        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition { type_name, .. })
                if type_name == "Query",
        ));
    }

    #[test]
    fn redefining_a_builtin() {
        let result = SchemaBuilder::from_str(None, "scalar String");
        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition { type_name, .. })
                if type_name == "String",
        ));
    }

    #[test]
    fn dunder_type_name() {
        let result = SchemaBuilder::from_str(None, "type __Secret { a: Int }");
        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedTypeName { type_name, .. })
                if type_name == "__Secret",
        ));
    }

    #[test]
    fn dunder_field_name() {
        let result = SchemaBuilder::from_str(None, "type Query { __a: Int }");
        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedFieldName { field_name, .. })
                if field_name == "__a",
        ));
    }

    #[test]
    fn duplicate_field() {
        let result = SchemaBuilder::from_str(None, "type Query { a: Int a: String }");
        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateFieldNameDefinition { field_name, .. })
                if field_name == "a",
        ));
    }

    #[test]
    fn duplicate_enum_value() {
        let result = SchemaBuilder::from_str(None, "enum E { A A }");
        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateEnumValueDefinition { value_name, .. })
                if value_name == "A",
        ));
    }

    #[test]
    fn directive_definitions_are_ignored() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "directive @cached(ttl: Int) on FIELD_DEFINITION\n",
            "type Query { a: Int @cached(ttl: 10) }",
        ))?.build()?;
        assert!(schema.query_type().field("a").is_some());
        Ok(())
    }

    #[test]
    fn parse_errors_are_reported() {
        let result = SchemaBuilder::from_str(None, "type Query {");
        assert!(matches!(result, Err(SchemaBuildError::ParseError { file: None, .. })));
    }
}

mod extensions {
    use super::*;

    #[test]
    fn object_extension_adds_fields() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "extend type Query { b: String }")?
            .load_str(None, "type Query { a: Int }")?
            .build()?;

        let fields: Vec<&str> =
            schema.query_type()
                .fields()
                .keys()
                .map(String::as_str)
                .collect();
        assert_eq!(fields, vec!["a", "b"]);
        Ok(())
    }

    #[test]
    fn enum_and_union_extensions() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type A { a: Int }\n",
            "type B { b: Int }\n",
            "union U = A\n",
            "extend union U = B\n",
            "enum E { X }\n",
            "extend enum E { Y }\n",
            "type Query { u: U, e: E }",
        ))?.build()?;

        let union_type = schema.type_by_name("U").unwrap().as_union().unwrap();
        assert_eq!(union_type.member_type_names(), vec!["A", "B"]);
        let enum_type = schema.type_by_name("E").unwrap().as_enum().unwrap();
        assert!(enum_type.has_value("Y"));
        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() -> Result<()> {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "extend type Missing { b: Int }",
        ))?.build();
        assert!(matches!(
            result,
            Err(SchemaBuildError::ExtensionOfUndefinedType { type_name, .. })
                if type_name == "Missing",
        ));
        Ok(())
    }

    #[test]
    fn extension_of_wrong_kind() -> Result<()> {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "enum E { X }\n",
            "extend type E { b: Int }",
        ))?.build();
        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidExtensionType { type_name, .. })
                if type_name == "E",
        ));
        Ok(())
    }

    #[test]
    fn duplicate_union_member_from_extension() -> Result<()> {
        let result = SchemaBuilder::from_str(None, concat!(
            "type A { a: Int }\n",
            "union U = A\n",
            "extend union U = A\n",
            "type Query { u: U }",
        ))?.build();
        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateUnionMember { member_name, .. })
                if member_name == "A",
        ));
        Ok(())
    }
}

mod files {
    use super::*;
    use crate::ReadContentError;
    use std::path::PathBuf;

    #[test]
    fn loads_schema_files() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let query_path = dir.path().join("query.graphql");
        let user_path = dir.path().join("user.graphql");
        std::fs::write(&query_path, "type Query { me: User }").unwrap();
        std::fs::write(&user_path, "type User { id: ID! }").unwrap();

        let schema = SchemaBuilder::new()
            .load_files(vec![&query_path, &user_path])?
            .build()?;
        assert!(schema.type_by_name("User").is_some());
        Ok(())
    }

    #[test]
    fn missing_file() {
        let result = SchemaBuilder::from_file(PathBuf::from("/definitely/not/here.graphql"));
        let Err(SchemaBuildError::SchemaFileReadError(err)) = result else {
            panic!("expected a file read error");
        };
        assert!(matches!(*err, ReadContentError::PathIsNotAFile(_)));
    }
}
