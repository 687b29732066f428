#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;
mod type_validation_error;
mod types_map_builder;

pub use schema::Schema;
pub use schema_builder::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use type_validation_error::TypeValidationError;
use types_map_builder::TypesMapBuilder;

#[cfg(test)]
mod tests;
