use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("invalid count of replicas: {0}")]
    InvalidReplicas(String),

    #[error("invalid label constraints format: {0}")]
    InvalidFormat(String),

    #[error("invalid label constraint format: {0}")]
    InvalidConstraintFormat(String),

    #[error("count of replicas in dict constraints should be positive: {0}")]
    InvalidMapCount(String),

    #[error("invalid label constraints mapping, use ':' to separate constraints from count: {0}")]
    InvalidMappingSeparator(String),
}

impl CompileError {
    /// Classification of the error, independent of its message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::InvalidReplicas(_) => ErrorKind::InvalidReplicas,
            CompileError::InvalidFormat(_) => ErrorKind::InvalidFormat,
            CompileError::InvalidConstraintFormat(_) => ErrorKind::InvalidConstraintFormat,
            CompileError::InvalidMapCount(_) => ErrorKind::InvalidMapCount,
            CompileError::InvalidMappingSeparator(_) => ErrorKind::InvalidMappingSeparator,
        }
    }
}

/// Message-free tag of a [`CompileError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Replica count is zero on a single-rule spec, or map counts exceed it.
    InvalidReplicas,
    /// Text is not one of the accepted shapes, an array token is malformed, or a
    /// map repeats a key.
    InvalidFormat,
    /// A token inside one map key is malformed.
    InvalidConstraintFormat,
    /// A map entry declares a non-positive count.
    InvalidMapCount,
    /// Map-like text glues a count to an unquoted token, as in `{+zone=sh:2}`.
    InvalidMappingSeparator,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::InvalidReplicas => "invalid-replicas",
            ErrorKind::InvalidFormat => "invalid-format",
            ErrorKind::InvalidConstraintFormat => "invalid-constraint-format",
            ErrorKind::InvalidMapCount => "invalid-map-count",
            ErrorKind::InvalidMappingSeparator => "invalid-mapping-separator",
        };
        f.write_str(s)
    }
}

pub type CompileResult<T> = Result<T, CompileError>;
