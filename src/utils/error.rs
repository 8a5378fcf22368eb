use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Invalid argument for {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Update was cancelled before it completed")]
    Cancelled,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DataError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            DataError::ConfigError { .. } | DataError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
