use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("malformed label constraint: {0}")]
    MalformedConstraint(String),

    #[error("unknown constraint operator: {0}")]
    UnknownOperator(String),

    #[error("unknown replica role: {0}")]
    UnknownRole(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
