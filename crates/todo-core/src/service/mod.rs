//! Async service API over the todo repository and document collections.
//!
//! [`TodoService`] is what front ends talk to. It owns nothing but the
//! database path: every call validates its arguments, then opens a
//! [`SqliteSession`] on tokio's blocking pool and performs exactly one
//! repository or collection operation with it.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   TodoService   │    │ TodoRepository  │    │  SqliteSession  │
//! │ (todo_ops,      │───▶│ DocumentStore   │───▶│   (rusqlite)    │
//! │  document_ops)  │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!      async facade        one statement         parameterized SQL
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use jiff::Timestamp;
//! use todo_core::{Priority, TodoItem, TodoServiceBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = TodoServiceBuilder::new()
//!     .with_database_path(Some("/tmp/todo.db"))
//!     .build()
//!     .await?;
//!
//! let todo = TodoItem::new(
//!     "buy milk",
//!     Priority::Low,
//!     Timestamp::now(),
//!     "2025-01-02T00:00:00Z".parse()?,
//! );
//! let created = service.create_todo(todo).await?;
//! let id = created.id.expect("persisted items carry their key");
//! assert!(!service.get_todo(id).await?.done);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    error::{Result, TodoError},
    session::SqliteSession,
};

pub mod builder;
pub mod document_ops;
pub mod todo_ops;


pub use builder::TodoServiceBuilder;

/// Main service interface for todo items and document collections.
pub struct TodoService {
    pub(crate) db_path: PathBuf,
}

impl TodoService {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `f` against a fresh session on the blocking pool.
    pub(crate) async fn with_session<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&SqliteSession) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let session = SqliteSession::open(&db_path)?;
            f(&session)
        })
        .await
        .map_err(|e| TodoError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
