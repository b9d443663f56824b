use thiserror::Error;

/// Failures from the parts of the crate that touch the outside world.
///
/// Validation itself never returns this: a malformed identifier is reported
/// through `ValidationResult::errors`.
#[derive(Debug, Error)]
pub enum IdentifierError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid rules: {0}")]
    InvalidRules(String),
}
