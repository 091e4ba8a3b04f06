use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown field type: {0}")]
    UnknownFieldType(String),
    #[error("unknown document status: {0}")]
    UnknownStatus(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
