use crate::compile::CompileOptions;
use crate::compile::make_nullable;
use crate::compile::merge_defs;
use crate::compose::SchemaValidator;
use crate::compose::ValidationOutcome;
use crate::compose::ValidatorResult;
use crate::compose::ValueView;
use crate::dialect::Dialect;
use crate::transcode::PathSegment;
use crate::transcode::ValidationIssue;
use crate::transcode::ValidationIssues;
use crate::walk_error::WalkError;
use serde_json::json;
use serde_json::Map;
use serde_json::Value;
use std::sync::Arc;

/// Nest `extension` under the property `path` of `root`.
///
/// The root validator sees the input with `path` hidden; the extension
/// validator sees the value at `path`. When `nullable_extension` is set, a
/// null or missing value at `path` is accepted without consulting the
/// extension.
///
/// ```
/// # use libgraphql_jsonschema::compose::compose;
/// # use libgraphql_jsonschema::compose::ResponseEnvelopeValidator;
/// # use libgraphql_jsonschema::compose::validate_sync;
/// # use std::sync::Arc;
/// let response = compose(
///     Arc::new(ResponseEnvelopeValidator::new()),
///     ["data"],
///     Arc::new(ResponseEnvelopeValidator::new()),
///     /* nullable_extension = */ true,
/// );
/// let result = validate_sync(&response, &serde_json::json!({"data": null}));
/// assert!(matches!(result, Ok(Ok(_))));
/// ```
pub fn compose<P, S>(
    root: Arc<dyn SchemaValidator>,
    path: P,
    extension: Arc<dyn SchemaValidator>,
    nullable_extension: bool,
) -> ComposedValidator
where
    P: IntoIterator<Item = S>,
    S: Into<String>,
{
    ComposedValidator {
        extension,
        nullable_extension,
        path: path.into_iter().map(Into::into).collect(),
        root,
    }
}

/// The [`SchemaValidator`] built by [`compose`].
#[derive(Clone)]
pub struct ComposedValidator {
    extension: Arc<dyn SchemaValidator>,
    nullable_extension: bool,
    path: Vec<String>,
    root: Arc<dyn SchemaValidator>,
}
impl ComposedValidator {
    pub fn nullable_extension(&self) -> bool {
        self.nullable_extension
    }

    pub fn path(&self) -> &[String] {
        self.path.as_slice()
    }

    fn extension_outcome(&self, value: &ValueView<'_>) -> ValidationOutcome {
        match value.lookup(&self.path) {
            Some(ext_value) if !ext_value.is_null() =>
                self.extension.validate(ext_value),
            _ if self.nullable_extension =>
                ValidationOutcome::Ready(Ok(Ok(Value::Null))),
            _ => self.extension.validate(ValueView::Value(&Value::Null)),
        }
    }
}
impl SchemaValidator for ComposedValidator {
    fn json_schema(
        &self,
        dialect: Dialect,
        options: &CompileOptions,
    ) -> Result<Value, WalkError> {
        let mut root_schema = self.root.json_schema(dialect, options)?;
        let mut ext_schema = self.extension.json_schema(dialect, options)?;

        let ext_defs = match ext_schema.as_object_mut() {
            Some(ext_map) => {
                ext_map.remove("$schema");
                ext_map.remove("$defs")
            },
            None => None,
        };
        if self.nullable_extension {
            ext_schema = make_nullable(ext_schema);
        }

        if let Value::Object(root_map) = &mut root_schema {
            if insert_at_path(root_map, &self.path, ext_schema).is_none() {
                log::debug!("Nothing to compose at an empty path");
            }
            if let Some(ext_defs) = ext_defs {
                merge_defs(root_map, &json!({ "$defs": ext_defs }));
            }
        } else {
            log::debug!(
                "Root schema is not an object; dropping the extension composed \
                at {:?}",
                self.path,
            );
        }
        Ok(root_schema)
    }

    fn validate(&self, value: ValueView<'_>) -> ValidationOutcome {
        let ext_outcome = self.extension_outcome(&value);
        let root_outcome = self.root.validate(value.clone().hiding(&self.path));
        let prefix: Vec<PathSegment> = self.path.iter()
            .map(|key| PathSegment::Key(key.to_string()))
            .collect();

        match (root_outcome, ext_outcome) {
            (ValidationOutcome::Ready(root_result), ValidationOutcome::Ready(ext_result)) =>
                ValidationOutcome::Ready(
                    combine(root_result, ext_result, &prefix, || value.to_value()),
                ),

            // The future outlives the borrowed view, so it owns a copy.
            (root_outcome, ext_outcome) => {
                let original = value.to_value();
                ValidationOutcome::deferred(async move {
                    let (root_result, ext_result) = futures::future::join(
                        root_outcome.resolve(),
                        ext_outcome.resolve(),
                    ).await;
                    combine(root_result, ext_result, &prefix, || original)
                })
            },
        }
    }
}
impl std::fmt::Debug for ComposedValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposedValidator")
            .field("nullable_extension", &self.nullable_extension)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Root issues come first, then the extension's (located below `prefix`).
/// Success hands back the untouched input, materialized only then.
fn combine(
    root_result: ValidatorResult,
    ext_result: ValidatorResult,
    prefix: &[PathSegment],
    original: impl FnOnce() -> Value,
) -> ValidatorResult {
    let mut issues: Vec<ValidationIssue> = vec![];
    if let Err(root_issues) = root_result? {
        issues.extend(root_issues);
    }
    if let Err(ext_issues) = ext_result? {
        issues.extend(ext_issues.into_iter().map(|issue| issue.prefixed(prefix)));
    }
    match ValidationIssues::new(issues) {
        Some(issues) => Ok(Err(issues)),
        None => Ok(Ok(original())),
    }
}

fn insert_at_path(
    root: &mut Map<String, Value>,
    path: &[String],
    schema: Value,
) -> Option<()> {
    let (last, intermediate) = path.split_last()?;

    let mut node = root;
    for key in intermediate {
        let child = properties_of(node)?
            .entry(key.to_string())
            .or_insert_with(|| json!({"type": "object", "properties": {}}));
        if !child.is_object() {
            *child = json!({"type": "object", "properties": {}});
        }
        node = child.as_object_mut()?;
    }
    properties_of(node)?.insert(last.to_string(), schema);
    Some(())
}

fn properties_of(node: &mut Map<String, Value>) -> Option<&mut Map<String, Value>> {
    let properties = node
        .entry("properties".to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !properties.is_object() {
        *properties = Value::Object(Map::new());
    }
    properties.as_object_mut()
}
