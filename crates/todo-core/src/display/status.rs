//! One-line status messages for operations that return no resource.

use std::fmt;

/// Outcome line printed after an operation, e.g. an update that matched
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    Success(String),
    Failure(String),
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        OperationStatus::Success(message.into())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        OperationStatus::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OperationStatus::Success(_))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationStatus::Success(message) => writeln!(f, "Success: {message}"),
            OperationStatus::Failure(message) => writeln!(f, "Error: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Updated todo item 3");
        assert!(success.is_success());
        assert_eq!(format!("{success}"), "Success: Updated todo item 3\n");

        let failure = OperationStatus::failure("Todo item 9 does not exist");
        assert!(!failure.is_success());
        assert!(format!("{failure}").starts_with("Error:"));
    }
}
