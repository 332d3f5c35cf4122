//! Error types for pgcnm

use thiserror::Error;

/// Result type alias for pgcnm operations
pub type CnmResult<T> = Result<T, CnmError>;

/// Error types for fragment building and execution
#[derive(Debug, Error)]
pub enum CnmError {
    /// A fixed-arity unpack (`qx0()` .. `qx12()`) was called with the wrong argument count
    #[error("Argument count mismatch: expected {expected}, got {actual}")]
    ArgCount { expected: usize, actual: usize },

    /// A statement builder was bound as a query parameter instead of being unpacked
    #[error(
        "Statement builder is not a bindable value: pass `qs()` and `args()` to the query instead"
    )]
    NotExecutable,

    /// Validation error (identifiers, quoting)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Query execution error
    #[error("Query error: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// Row not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Row decode/mapping error
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },
}

impl CnmError {
    /// Create an argument count error
    pub fn arg_count(expected: usize, actual: usize) -> Self {
        Self::ArgCount { expected, actual }
    }

    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is an argument count error
    pub fn is_arg_count(&self) -> bool {
        matches!(self, Self::ArgCount { .. })
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this error came from binding a builder as a parameter
    pub fn is_not_executable(&self) -> bool {
        matches!(self, Self::NotExecutable)
    }

    /// Recover a `NotExecutable` error from a driver error raised during parameter
    /// serialization; everything else is passed through as a query error.
    pub fn from_db_error(err: tokio_postgres::Error) -> Self {
        use std::error::Error as _;
        if let Some(inner) = err.source().and_then(|e| e.downcast_ref::<CnmError>()) {
            if inner.is_not_executable() {
                return Self::NotExecutable;
            }
        }
        Self::Query(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arg_count_message() {
        let err = CnmError::arg_count(2, 3);
        assert!(err.is_arg_count());
        assert_eq!(err.to_string(), "Argument count mismatch: expected 2, got 3");
    }

    #[test]
    fn not_executable_message_points_at_unpacking() {
        let err = CnmError::NotExecutable;
        assert!(err.is_not_executable());
        assert!(err.to_string().contains("qs()"));
    }
}
