mod operation_schemas_tests;
