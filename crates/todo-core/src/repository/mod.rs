//! Todo repository: create, read, update and delete todo items through a
//! [`Session`].
//!
//! Every operation validates its arguments before the session is touched,
//! issues exactly one parameterized statement and checks the affected row
//! count against the single-row expectation:
//!
//! | operation | one row      | any other count          |
//! |-----------|--------------|--------------------------|
//! | create    | generated id | `OperationFailed`        |
//! | read      | the record   | `NotFound`               |
//! | update    | `true`       | `false`                  |
//! | delete    | `()`         | `NotFound`               |
//!
//! `update` reports a missing key through its return value so callers can
//! tell "nothing to change" apart from a rejected write.

use crate::{
    error::{Result, TodoError},
    models::{IntoTodoId, IntoTodoItem, Priority, TodoId, TodoItem},
    session::{BindType, Binds, Row, Session, Value},
};

#[cfg(test)]
mod tests;

const INSERT_TODO_SQL: &str = "INSERT INTO todos (priority, name, created, due_date, done) VALUES (:priority, :name, :created, :due_date, :done) RETURNING id";
const SELECT_TODO_SQL: &str =
    "SELECT id, priority, name, created, due_date, done FROM todos WHERE id = :id";
const SELECT_TODOS_SQL: &str =
    "SELECT id, priority, name, created, due_date, done FROM todos ORDER BY id";
const UPDATE_TODO_SQL: &str = "UPDATE todos SET priority = :priority, name = :name, created = :created, due_date = :due_date, done = :done WHERE id = :id";
const DELETE_TODO_SQL: &str = "DELETE FROM todos WHERE id = :id";

/// Repository for [`TodoItem`] records.
pub struct TodoRepository<S> {
    session: S,
}

impl<S: Session> TodoRepository<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    /// Inserts a new todo item and returns the key the store generated for
    /// it. An `id` already present on the record is ignored.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a malformed record; `OperationFailed` when the
    /// store does not report exactly one inserted row or returns no key. In
    /// the latter case the state of the row is unknown.
    pub fn create(&self, todo: impl IntoTodoItem) -> Result<TodoId> {
        let todo = todo.into_todo_item()?;

        let binds = Self::field_binds(&todo).output("id", BindType::Number);
        let result = self.session.execute(INSERT_TODO_SQL, &binds)?;

        if result.rows_affected != 1 {
            return Err(TodoError::operation_failed(format!(
                "expected to insert one todo item, the store reported {} rows",
                result.rows_affected
            )));
        }

        let id = result
            .out_bind("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| TodoError::operation_failed("the store did not return a generated id"))?;

        TodoId::new(id).map_err(|_| {
            TodoError::operation_failed(format!("the store returned an invalid id {id}"))
        })
    }

    /// Retrieves the todo item stored under `id`.
    pub fn read(&self, id: impl IntoTodoId) -> Result<TodoItem> {
        let id = id.into_todo_id()?;

        let binds = Binds::new().input("id", BindType::Number, id.get());
        let result = self.session.execute(SELECT_TODO_SQL, &binds)?;

        match result.rows.as_slice() {
            [row] => Self::todo_from_row(row),
            _ => Err(TodoError::NotFound { id: id.get() }),
        }
    }

    /// Replaces every field of the item stored under `id`.
    ///
    /// Returns `false` when no item has that key.
    pub fn update(&self, id: impl IntoTodoId, todo: impl IntoTodoItem) -> Result<bool> {
        let id = id.into_todo_id()?;
        let todo = todo.into_todo_item()?;

        let binds = Self::field_binds(&todo).input("id", BindType::Number, id.get());
        let result = self.session.execute(UPDATE_TODO_SQL, &binds)?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes the item stored under `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` when no item has that key.
    pub fn delete(&self, id: impl IntoTodoId) -> Result<()> {
        let id = id.into_todo_id()?;

        let binds = Binds::new().input("id", BindType::Number, id.get());
        let result = self.session.execute(DELETE_TODO_SQL, &binds)?;

        if result.rows_affected != 1 {
            return Err(TodoError::NotFound { id: id.get() });
        }

        Ok(())
    }

    /// Lists every stored item, oldest key first.
    pub fn list(&self) -> Result<Vec<TodoItem>> {
        let result = self.session.execute(SELECT_TODOS_SQL, &Binds::new())?;
        result.rows.iter().map(Self::todo_from_row).collect()
    }

    fn field_binds(todo: &TodoItem) -> Binds {
        Binds::new()
            .input("priority", BindType::Varchar, todo.priority.as_str())
            .input("name", BindType::Varchar, todo.name.as_str())
            .input("created", BindType::Date, todo.created)
            .input("due_date", BindType::Date, todo.due_date)
            .input("done", BindType::Boolean, todo.done)
    }

    fn todo_from_row(row: &Row) -> Result<TodoItem> {
        let id = row
            .require("id")?
            .as_i64()
            .ok_or_else(|| TodoError::invalid_data("id", "expected an integer"))?;
        let id = TodoId::new(id).map_err(|e| TodoError::invalid_data("id", e.to_string()))?;

        let priority = row
            .require("priority")?
            .as_str()
            .ok_or_else(|| TodoError::invalid_data("priority", "expected text"))?
            .parse::<Priority>()
            .map_err(|e| TodoError::invalid_data("priority", e))?;

        let name = row
            .require("name")?
            .as_str()
            .ok_or_else(|| TodoError::invalid_data("name", "expected text"))?
            .to_string();

        let created = row
            .require("created")?
            .as_timestamp()
            .ok_or_else(|| TodoError::invalid_data("created", "expected a timestamp"))?;

        let due_date = row
            .require("due_date")?
            .as_timestamp()
            .ok_or_else(|| TodoError::invalid_data("due_date", "expected a timestamp"))?;

        let done = row
            .require("done")?
            .as_bool()
            .ok_or_else(|| TodoError::invalid_data("done", "expected a boolean"))?;

        Ok(TodoItem {
            id: Some(id),
            priority,
            name,
            created,
            due_date,
            done,
        })
    }
}
