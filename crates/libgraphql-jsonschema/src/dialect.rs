use serde_json::Value;

/// The JSON Schema draft a top-level document declares through `$schema`.
///
/// Generated documents only use keywords that mean the same thing in every
/// supported draft (`$defs` included, which draft-07 validators treat as an
/// ordinary container reachable through `$ref`).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Dialect {
    #[serde(rename = "draft-07")]
    Draft07,
    #[default]
    #[serde(rename = "2020-12")]
    Draft2020_12,
}
impl Dialect {
    pub fn schema_uri(&self) -> &'static str {
        match self {
            Self::Draft07 => "http://json-schema.org/draft-07/schema#",
            Self::Draft2020_12 => "https://json-schema.org/draft/2020-12/schema",
        }
    }

    /// Set `$schema` on a top-level document, placing it first. Non-object
    /// schemas are returned unchanged.
    pub fn stamp(&self, schema: Value) -> Value {
        match schema {
            Value::Object(map) => {
                let mut stamped = serde_json::Map::new();
                stamped.insert(
                    "$schema".to_string(),
                    Value::String(self.schema_uri().to_string()),
                );
                for (key, value) in map {
                    if key != "$schema" {
                        stamped.insert(key, value);
                    }
                }
                Value::Object(stamped)
            },
            other => other,
        }
    }
}
impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Draft07 => "draft-07",
            Self::Draft2020_12 => "2020-12",
        })
    }
}
impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft-07" | "draft7" => Ok(Self::Draft07),
            "2020-12" | "draft-2020-12" => Ok(Self::Draft2020_12),
            other => Err(format!(
                "Unknown JSON Schema dialect `{other}` (expected draft-07 or \
                2020-12)",
            )),
        }
    }
}
