//! Core library for the todo application.
//!
//! Todo items live in a relational table and are reached through a
//! [`TodoRepository`], which maps [`TodoItem`] records to rows with one
//! parameterized statement per operation. Schema-less JSON documents live in
//! named collections reached through a [`DocumentStore`]. Both sit on a
//! [`Session`], the only capability they need from the database;
//! [`SqliteSession`] is the implementation shipped here.
//!
//! [`TodoService`] wraps both for async front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::Timestamp;
//! use todo_core::{Priority, SqliteSession, TodoItem, TodoRepository};
//!
//! # fn main() -> todo_core::Result<()> {
//! let session = SqliteSession::open_in_memory()?;
//! let todos = TodoRepository::new(&session);
//!
//! let id = todos.create(TodoItem::new(
//!     "buy milk",
//!     Priority::Low,
//!     "2025-01-01T00:00:00Z".parse::<Timestamp>().unwrap(),
//!     "2025-01-02T00:00:00Z".parse::<Timestamp>().unwrap(),
//! ))?;
//!
//! let mut todo = todos.read(id)?;
//! todo.done = true;
//! assert!(todos.update(id, &todo)?);
//!
//! todos.delete(id)?;
//! assert!(todos.read(id).unwrap_err().is_not_found());
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod documents;
pub mod error;
pub mod models;
pub mod params;
pub mod repository;
pub mod service;
pub mod session;

// Re-export commonly used types
pub use display::{CreateResult, DeleteResult, Documents, LocalDateTime, OperationStatus, TodoItems};
pub use documents::{Collection, DocumentStore, Filter};
pub use error::{Result, TodoError};
pub use models::{
    parse_timestamp, Document, IntoTodoId, IntoTodoItem, Priority, TodoId, TodoItem,
};
pub use repository::TodoRepository;
pub use service::{TodoService, TodoServiceBuilder};
pub use session::{Session, SqliteSession};
