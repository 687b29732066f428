use crate::transcode::PathSegment;
use crate::transcode::ValidationIssue;
use crate::transcode::ValidationIssues;
use serde_json::json;

fn issue() -> ValidationIssue {
    ValidationIssue::new(
        vec![PathSegment::from("user"), PathSegment::from("tags"), PathSegment::from(1usize)],
        "Expected a String, got a number",
    )
}

#[test]
fn path_string() {
    assert_eq!(issue().path_string(), "$.user.tags[1]");
    assert_eq!(ValidationIssue::new(vec![], "bad").path_string(), "$");
}

#[test]
fn display() {
    assert_eq!(issue().to_string(), "$.user.tags[1]: Expected a String, got a number");
}

#[test]
fn prefixed() {
    let prefixed = issue().prefixed(&[PathSegment::from("data")]);
    assert_eq!(prefixed.path_string(), "$.data.user.tags[1]");
}

#[test]
fn serializes_path_segments_bare() {
    assert_eq!(
        serde_json::to_value(issue()).unwrap(),
        json!({
            "message": "Expected a String, got a number",
            "path": ["user", "tags", 1],
        }),
    );
}

#[test]
fn issues_are_never_empty() {
    assert_eq!(ValidationIssues::new(vec![]), None);

    let issues = ValidationIssues::new(vec![issue(), issue()]).unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(
        issues.to_string(),
        "2 validation issue(s)\n  $.user.tags[1]: Expected a String, got a number\
        \n  $.user.tags[1]: Expected a String, got a number",
    );
}
