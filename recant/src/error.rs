use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecantError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Input error: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, RecantError>;
