mod schema_builder_tests;
mod type_system_tests;
