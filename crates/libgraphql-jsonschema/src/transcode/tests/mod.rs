mod data_transcoder_tests;
mod input_transcoder_tests;
mod validation_issue_tests;

use crate::transcode::ValidationResult;
use serde_json::Value;

/// Every issue of a failed result rendered as `path: message`.
fn issue_lines(result: ValidationResult<Value>) -> Vec<String> {
    match result {
        Ok(value) => panic!("Expected validation issues, got {value}"),
        Err(issues) => issues.into_iter().map(|issue| issue.to_string()).collect(),
    }
}
