use thiserror::Error;

/// Errors from mapping state operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("form field not found: {0}")]
    FieldNotFound(String),
}
