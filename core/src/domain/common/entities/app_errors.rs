use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("Generation failure: {0}")]
    GenerationFailure(String),

    #[error("Schema violation: {0}")]
    SchemaViolation(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Stable machine-readable reason, surfaced to API callers.
    pub fn reason(&self) -> &'static str {
        match self {
            CoreError::InvalidInput(_) => "invalid_input",
            CoreError::UnsupportedInput(_) => "unsupported_input",
            CoreError::GenerationFailure(_) => "generation_failure",
            CoreError::SchemaViolation(_) => "schema_violation",
            CoreError::InternalServerError => "internal_error",
        }
    }
}
