mod compile_options;
mod definitions;
mod input_schema_compiler;
mod nullable;
mod schema_compiler;

pub use compile_options::CompileOptions;
pub use definitions::DefinitionKind;
pub use definitions::Definitions;
pub(crate) use definitions::merge_defs;
pub use nullable::make_nullable;
pub use schema_compiler::compile;
pub use schema_compiler::compile_fragment_data;
pub use schema_compiler::compile_operation_data;
pub use schema_compiler::compile_variables;

#[cfg(test)]
mod tests;
