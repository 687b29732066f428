use crate::scalar::PassthroughScalarCodec;
use crate::scalar::ScalarCodec;
use crate::schema::Schema;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use std::sync::Arc;

/// Maps scalar names to the [`ScalarCodec`]s that handle them.
///
/// A registry is built up front and then passed (by reference) into every
/// compile or transcode call; it is never mutated during a walk. Lookups
/// consult the registry before falling back to the builtin behavior, so a
/// codec registered under a builtin name (e.g. `ID`) overrides it.
#[derive(Clone, Debug, Default)]
pub struct ScalarRegistry {
    codecs: IndexMap<String, Arc<dyn ScalarCodec>>,
}
impl ScalarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.codecs.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn ScalarCodec>> {
        self.codecs.get(name)
    }

    /// Register `codec` under `name`, replacing any codec previously
    /// registered under that name.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        codec: impl ScalarCodec + 'static,
    ) -> &mut Self {
        self.insert_arc(name, Arc::new(codec))
    }

    pub fn insert_arc(
        &mut self,
        name: impl Into<String>,
        codec: Arc<dyn ScalarCodec>,
    ) -> &mut Self {
        let name = name.into();
        if self.codecs.insert(name.to_string(), codec).is_some() {
            log::debug!("Replaced scalar codec registered for `{name}`");
        }
        self
    }

    /// Register a [`PassthroughScalarCodec`] for every custom scalar in
    /// `schema` that has no codec yet.
    pub fn insert_passthrough_for_unregistered(&mut self, schema: &Schema) -> &mut Self {
        let unregistered: Vec<String> =
            schema.types()
                .values()
                .filter_map(|type_| match type_ {
                    GraphQLType::Scalar(scalar) => Some(scalar.name()),
                    _ => None,
                })
                .filter(|name| !self.codecs.contains_key(*name))
                .map(|name| name.to_string())
                .collect();

        for name in unregistered {
            log::trace!("Treating custom scalar `{name}` as opaque");
            self.insert(name, PassthroughScalarCodec::new());
        }
        self
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.codecs.keys().map(|name| name.as_str())
    }
}
