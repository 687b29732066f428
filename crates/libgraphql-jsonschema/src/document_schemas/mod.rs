mod document_source;
mod fragment_data_validator;
mod fragment_schemas;
mod operation_data_validator;
mod operation_schemas;
mod operation_variables_validator;

use document_source::DocumentSource;
use document_source::view_value;
pub use fragment_data_validator::FragmentDataValidator;
pub use fragment_schemas::FragmentSchemas;
pub use operation_data_validator::OperationDataValidator;
pub use operation_schemas::OperationSchemas;
pub use operation_variables_validator::OperationVariablesValidator;

#[cfg(test)]
mod tests;
