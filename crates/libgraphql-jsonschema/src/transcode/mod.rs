mod data_transcoder;
mod input_transcoder;
mod validation_issue;

pub use data_transcoder::transcode;
pub use data_transcoder::transcode_fragment_data;
pub use data_transcoder::transcode_operation_data;
pub use input_transcoder::transcode_variables;
pub use validation_issue::PathSegment;
pub use validation_issue::ValidationIssue;
pub use validation_issue::ValidationIssues;
pub use validation_issue::ValidationResult;
pub(crate) use validation_issue::into_validation_result;

#[cfg(test)]
mod tests;
