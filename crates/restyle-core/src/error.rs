use thiserror::Error;

#[derive(Debug, Error)]
pub enum RestyleError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),
}
