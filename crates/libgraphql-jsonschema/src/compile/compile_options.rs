/// Knobs for the shape of compiled schemas.
///
/// Deserializable so tools can read it from a JSON file; any missing key
/// takes its default.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileOptions {
    /// Leave nullable properties out of `required`. Defaults to `true`.
    pub optional_nullable_properties: bool,

    /// When set, stamped as `additionalProperties` on every generated object
    /// schema (except the open branches generated for fragments).
    pub additional_properties: Option<bool>,
}
impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            optional_nullable_properties: true,
            additional_properties: None,
        }
    }
}
