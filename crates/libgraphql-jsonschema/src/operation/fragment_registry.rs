use crate::ast;
use indexmap::IndexMap;
use std::sync::OnceLock;

fn empty_fragment_registry() -> &'static FragmentRegistry {
    static EMPTY_FRAGMENT_REGISTRY: OnceLock<FragmentRegistry> = OnceLock::new();
    EMPTY_FRAGMENT_REGISTRY.get_or_init(|| {
        FragmentRegistry {
            fragments: IndexMap::new(),
        }
    })
}

/// Named fragment definitions available to a walk, keyed by fragment name.
///
/// A registry produced by
/// [`FragmentRegistryBuilder`](crate::operation::FragmentRegistryBuilder) is
/// known to be free of cycles and dangling spreads.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentRegistry {
    pub(super) fragments: IndexMap<String, ast::operation::FragmentDefinition>,
}

impl FragmentRegistry {
    pub fn empty() -> &'static FragmentRegistry {
        empty_fragment_registry()
    }

    pub fn fragments(&self) -> &IndexMap<String, ast::operation::FragmentDefinition> {
        &self.fragments
    }

    pub fn get(&self, name: &str) -> Option<&ast::operation::FragmentDefinition> {
        self.fragments.get(name)
    }
}
