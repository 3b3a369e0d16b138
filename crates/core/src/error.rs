use thiserror::Error;

/// Input validation failures, detected before any upstream call is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Request body is not a JSON object")]
    NotAnObject,

    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },
}
