mod field_collector;
mod walk_context;

pub use field_collector::collect_fields;
pub use field_collector::CollectedFields;
pub use walk_context::effective_variables;
pub use walk_context::WalkContext;
pub(crate) use field_collector::fragment_type_applies;
