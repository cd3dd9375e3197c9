use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("Version parse error: invalid component '{component}' at position {position} in '{version}'")]
    InvalidVersionComponent {
        version: String,
        component: String,
        position: usize,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidInputValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KataError>;
