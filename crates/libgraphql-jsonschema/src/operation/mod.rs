mod executable_document;
mod fragment_registry;
mod fragment_registry_builder;
mod operation_kind;
mod operation_ref;

pub use executable_document::DocumentBuildError;
pub use executable_document::ExecutableDocument;
pub use fragment_registry::FragmentRegistry;
pub use fragment_registry_builder::FragmentRegistryBuildError;
pub use fragment_registry_builder::FragmentRegistryBuilder;
pub use operation_kind::OperationKind;
pub use operation_ref::OperationRef;
