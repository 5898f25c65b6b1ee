//! Data models for todo items and JSON documents.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so the data structures stay free of
//! presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use todo_core::models::{IntoTodoId, Priority, TodoItem};
//!
//! let todo = TodoItem::new(
//!     "buy milk",
//!     Priority::Low,
//!     "2025-01-01T00:00:00Z".parse::<Timestamp>().unwrap(),
//!     "2025-01-02T00:00:00Z".parse::<Timestamp>().unwrap(),
//! );
//! assert!(!todo.is_persisted());
//!
//! // Keys from untyped sources are validated at the boundary
//! assert!("12".into_todo_id().is_ok());
//! assert!("twelve".into_todo_id().is_err());
//! ```

pub mod document;
pub mod priority;
pub mod time;
pub mod todo;

#[cfg(test)]
mod tests;

pub use document::Document;
pub use priority::Priority;
pub use time::parse_timestamp;
pub use todo::{IntoTodoId, IntoTodoItem, TodoId, TodoItem};

use serde_json::Value;

/// Human readable name of a JSON value's type, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
