//! Display formatting for models and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes go through small newtype wrappers so
//! the same data can be rendered differently depending on context. All
//! output is markdown, which the CLI renders with termimad.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (TodoItems, Documents)
//! - [`results`]: Operation result types (CreateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use todo_core::{
//!     display::{CreateResult, OperationStatus},
//!     models::{Priority, TodoId, TodoItem},
//! };
//!
//! let mut todo = TodoItem::new(
//!     "buy milk",
//!     Priority::Low,
//!     Timestamp::from_second(1735689600).unwrap(),
//!     Timestamp::from_second(1735776000).unwrap(),
//! );
//! todo.id = Some(TodoId::new(1).unwrap());
//!
//! let output = format!("{}", CreateResult::new(todo));
//! assert!(output.contains("Created todo item with ID: 1"));
//!
//! let status = OperationStatus::failure("Todo item 7 does not exist".to_string());
//! assert!(format!("{status}").starts_with("Error:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Documents, TodoItems};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult};
pub use status::OperationStatus;
