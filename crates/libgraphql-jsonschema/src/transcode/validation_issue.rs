/// One step of the path from the root of a payload to an offending value.
/// Serializes as a bare string (object key) or integer (list index).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}
impl std::convert::From<&str> for PathSegment {
    fn from(value: &str) -> Self {
        Self::Key(value.to_string())
    }
}
impl std::convert::From<usize> for PathSegment {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

/// A problem with the data being transcoded, located by its path.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ValidationIssue {
    pub message: String,
    pub path: Vec<PathSegment>,
}
impl ValidationIssue {
    pub fn new(path: Vec<PathSegment>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path,
        }
    }

    /// Render the path as `$.data.items[1].name`.
    pub fn path_string(&self) -> String {
        let mut rendered = "$".to_string();
        for segment in &self.path {
            match segment {
                PathSegment::Index(idx) => rendered.push_str(&format!("[{idx}]")),
                PathSegment::Key(key) => {
                    rendered.push('.');
                    rendered.push_str(key);
                },
            }
        }
        rendered
    }

    /// The same issue, located below `prefix`.
    pub fn prefixed(mut self, prefix: &[PathSegment]) -> Self {
        let mut path = prefix.to_vec();
        path.append(&mut self.path);
        self.path = path;
        self
    }
}
impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path_string(), self.message)
    }
}

/// A non-empty list of [`ValidationIssue`]s, in the order the walk found
/// them.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct ValidationIssues(Vec<ValidationIssue>);
impl ValidationIssues {
    /// Returns `None` for an empty list.
    pub fn new(issues: Vec<ValidationIssue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self(issues))
        }
    }

    pub fn into_vec(self) -> Vec<ValidationIssue> {
        self.0
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl std::fmt::Display for ValidationIssues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} validation issue(s)", self.0.len())?;
        for issue in &self.0 {
            write!(f, "\n  {issue}")?;
        }
        Ok(())
    }
}
impl std::error::Error for ValidationIssues {}
impl std::iter::IntoIterator for ValidationIssues {
    type Item = ValidationIssue;
    type IntoIter = std::vec::IntoIter<ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// The outcome of validating a payload: the transcoded value, or every issue
/// found along the way.
pub type ValidationResult<T> = Result<T, ValidationIssues>;

/// Collapse an issue list into a [`ValidationResult`].
pub(crate) fn into_validation_result<T>(
    value: T,
    issues: Vec<ValidationIssue>,
) -> ValidationResult<T> {
    match ValidationIssues::new(issues) {
        Some(issues) => Err(issues),
        None => Ok(value),
    }
}
