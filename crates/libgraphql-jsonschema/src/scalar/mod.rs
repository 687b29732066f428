mod builtin_scalar;
mod fn_scalar_codec;
mod passthrough_scalar_codec;
mod scalar_codec;
mod scalar_registry;

pub use builtin_scalar::BuiltinScalar;
pub(crate) use builtin_scalar::json_kind;
pub use fn_scalar_codec::FnScalarCodec;
pub use fn_scalar_codec::FnScalarCodecBuilder;
pub use passthrough_scalar_codec::PassthroughScalarCodec;
pub use scalar_codec::ScalarCodec;
pub use scalar_codec::ScalarCodecError;
pub use scalar_registry::ScalarRegistry;

#[cfg(test)]
mod tests;
