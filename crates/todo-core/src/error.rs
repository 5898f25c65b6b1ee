//! Error types for the todo library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for every repository, session and service operation.
#[derive(Error, Debug)]
pub enum TodoError {
    /// Malformed key or record shape, detected before touching the store
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },
    /// No todo item with the given key
    #[error("There is no todo item with id {id}")]
    NotFound { id: i64 },
    /// The store accepted the statement but did not affect exactly one row
    #[error("Operation failed: {message}")]
    OperationFailed { message: String },
    /// Database connection or statement errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A stored row could not be mapped back into its record shape
    #[error("Invalid data in column '{column}': {reason}")]
    InvalidData { column: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TodoError {
        TodoError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for argument validation errors.
pub struct InvalidArgumentBuilder {
    field: String,
}

impl InvalidArgumentBuilder {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TodoError {
        TodoError::InvalidArgument {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TodoError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for argument validation errors.
    pub fn invalid_argument(field: impl Into<String>) -> InvalidArgumentBuilder {
        InvalidArgumentBuilder::new(field)
    }

    /// Creates an `OperationFailed` error.
    pub fn operation_failed(message: impl Into<String>) -> Self {
        TodoError::OperationFailed {
            message: message.into(),
        }
    }

    /// Creates an `InvalidData` error for a column that failed to map.
    pub fn invalid_data(column: impl Into<String>, reason: impl Into<String>) -> Self {
        TodoError::InvalidData {
            column: column.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error was raised by argument validation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TodoError::InvalidArgument { .. })
    }

    /// Whether the error reports a missing key.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TodoError::NotFound { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TodoError::database(message).with_source(e))
    }
}

/// Result type alias for todo operations
pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_key() {
        let err = TodoError::NotFound { id: 42 };
        assert_eq!(err.to_string(), "There is no todo item with id 42");
        assert!(err.is_not_found());
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_invalid_argument_builder() {
        let err = TodoError::invalid_argument("id").with_reason("must be an integer");
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Invalid argument 'id': must be an integer");
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::InvalidQuery);
        let err = result.db_context("Failed to run query").unwrap_err();
        match err {
            TodoError::Database { message, .. } => assert_eq!(message, "Failed to run query"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
