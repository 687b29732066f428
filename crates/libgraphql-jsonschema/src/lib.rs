//! Compile GraphQL selections into JSON Schema documents, and transcode
//! payloads along the same type and selection walk.
//!
//! Both halves share one traversal: field collection, fragment expansion,
//! `@skip`/`@include` evaluation and `__typename` dispatch behave the same
//! way whether a schema is being generated or a value is being checked and
//! converted. Custom scalars are described and converted by the codecs of
//! an explicitly passed [`ScalarRegistry`](scalar::ScalarRegistry).

pub mod ast;
pub mod compile;
pub mod compose;
pub mod dialect;
pub mod direction;
pub mod directives;
pub mod document_schemas;
mod file_reader;
pub mod loc;
pub mod operation;
pub mod scalar;
pub mod schema;
pub mod synthesize;
#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod tests;
pub mod transcode;
pub mod types;
mod value_from_ast;
pub mod walk;
mod walk_error;

pub use file_reader::ReadContentError;
pub use value_from_ast::ValueFromAstError;
pub use walk_error::WalkError;
