use indexmap::IndexMap;
use serde_json::json;
use serde_json::Map;
use serde_json::Value;

/// The partitions of a compiled document's `$defs`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DefinitionKind {
    Enum,
    Input,
    Scalar,
}
impl DefinitionKind {
    pub fn partition_name(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::Input => "input",
            Self::Scalar => "scalar",
        }
    }
}

/// Named schemas shared by reference within one compiled document.
///
/// Each partition keeps insertion order, which is the order the walk first
/// reached each type, so output is deterministic for a given input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Definitions {
    enums: IndexMap<String, Value>,
    inputs: IndexMap<String, Value>,
    scalars: IndexMap<String, Value>,
}
impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, kind: DefinitionKind, name: &str) -> bool {
        self.partition(kind).contains_key(name)
    }

    pub fn get(&self, kind: DefinitionKind, name: &str) -> Option<&Value> {
        self.partition(kind).get(name)
    }

    pub fn insert(&mut self, kind: DefinitionKind, name: &str, schema: Value) {
        self.partition_mut(kind).insert(name.to_string(), schema);
    }

    /// Render as a `$defs` object, omitting empty partitions. Returns `None`
    /// when there is nothing to render.
    pub fn into_value(self) -> Option<Value> {
        let mut defs = Map::new();
        for (kind, partition) in [
            (DefinitionKind::Enum, self.enums),
            (DefinitionKind::Input, self.inputs),
            (DefinitionKind::Scalar, self.scalars),
        ] {
            if !partition.is_empty() {
                defs.insert(
                    kind.partition_name().to_string(),
                    Value::Object(partition.into_iter().collect()),
                );
            }
        }
        if defs.is_empty() {
            None
        } else {
            Some(Value::Object(defs))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty() && self.inputs.is_empty() && self.scalars.is_empty()
    }

    fn partition(&self, kind: DefinitionKind) -> &IndexMap<String, Value> {
        match kind {
            DefinitionKind::Enum => &self.enums,
            DefinitionKind::Input => &self.inputs,
            DefinitionKind::Scalar => &self.scalars,
        }
    }

    fn partition_mut(&mut self, kind: DefinitionKind) -> &mut IndexMap<String, Value> {
        match kind {
            DefinitionKind::Enum => &mut self.enums,
            DefinitionKind::Input => &mut self.inputs,
            DefinitionKind::Scalar => &mut self.scalars,
        }
    }

    /// A `{"$ref": ...}` schema pointing at the named definition.
    pub fn ref_to(kind: DefinitionKind, name: &str) -> Value {
        json!({"$ref": format!("#/$defs/{}/{}", kind.partition_name(), name)})
    }
}

/// Merge the `$defs` partitions of `incoming` into those of `target`
/// (both top-level documents). A name defined in both keeps the incoming
/// schema.
pub(crate) fn merge_defs(target: &mut Map<String, Value>, incoming: &Value) {
    let Some(incoming_defs) = incoming.get("$defs").and_then(Value::as_object) else {
        return;
    };

    let target_defs = target
        .entry("$defs".to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    let Some(target_defs) = target_defs.as_object_mut() else {
        return;
    };

    for (partition_name, incoming_partition) in incoming_defs {
        let Some(incoming_partition) = incoming_partition.as_object() else {
            continue;
        };
        let target_partition = target_defs
            .entry(partition_name.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        let Some(target_partition) = target_partition.as_object_mut() else {
            continue;
        };
        for (name, schema) in incoming_partition {
            if let Some(previous) = target_partition.insert(name.to_string(), schema.clone()) {
                if &previous != schema {
                    log::debug!(
                        "$defs/{partition_name}/{name} is defined differently by \
                        composed schemas; keeping the last definition",
                    );
                }
            }
        }
    }
}
