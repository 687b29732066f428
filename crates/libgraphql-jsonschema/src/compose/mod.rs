mod composed_validator;
mod response_envelope_validator;
mod schema_validator;
mod validation_outcome;
mod validator_error;
mod value_view;

pub use composed_validator::compose;
pub use composed_validator::ComposedValidator;
pub use response_envelope_validator::ResponseEnvelopeValidator;
pub use schema_validator::SchemaValidator;
pub use schema_validator::validate_sync;
pub use validation_outcome::ValidationOutcome;
pub use validation_outcome::ValidatorResult;
pub use validator_error::ValidatorError;
pub use value_view::OverlayView;
pub use value_view::ValueView;

#[cfg(test)]
mod tests;
