use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Task failed: {0}")]
    JoinError(#[from] tokio::task::JoinError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl ValidateError {
    pub fn config(message: impl Into<String>) -> Self {
        ValidateError::ConfigError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidateError>;
