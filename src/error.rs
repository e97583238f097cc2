use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("invalid name format: {0:?}")]
    InvalidNameFormat(String),

    #[error("wrong phone format {0}")]
    InvalidPhoneFormat(String),

    #[error("Invalid date format. Use DD.MM.YYYY (got {0:?})")]
    InvalidDateFormat(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type BookResult<T> = Result<T, BookError>;
