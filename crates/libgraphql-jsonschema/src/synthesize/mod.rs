mod fake_variable_synthesizer;
mod synthesis_error;

pub use fake_variable_synthesizer::synthesize_variables;
pub use fake_variable_synthesizer::synthesize_value;
pub use synthesis_error::SynthesisError;
