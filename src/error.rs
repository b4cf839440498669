use thiserror::Error;

#[derive(Error, Debug)]
pub enum FguessError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Training error: {0}")]
    Training(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Sample discovery error: {0}")]
    Discovery(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FguessError>;
