//! Todo item model, its key type and the conversions used at the
//! repository boundary.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{json_kind, parse_timestamp, Priority};
use crate::error::{Result, TodoError};

/// Store-generated surrogate key of a todo item. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TodoId(i64);

impl TodoId {
    /// Wraps a raw key, rejecting zero and negative values.
    pub fn new(id: i64) -> Result<Self> {
        if id <= 0 {
            return Err(TodoError::invalid_argument("id")
                .with_reason(format!("{id} is not a valid key, keys are positive integers")));
        }
        Ok(Self(id))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for TodoId {
    type Error = TodoError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<TodoId> for i64 {
    fn from(id: TodoId) -> Self {
        id.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        let id = s.trim().parse::<i64>().map_err(|_| {
            TodoError::invalid_argument("id").with_reason(format!("'{s}' is not an integer"))
        })?;
        Self::new(id)
    }
}

/// A single todo entry. `id` is `None` until the store has persisted it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Store-assigned key, immutable once set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TodoId>,

    pub priority: Priority,

    /// Short label describing the work
    pub name: String,

    /// When the item was created (UTC)
    pub created: Timestamp,

    /// When the item is due (UTC); not ordered relative to `created`
    pub due_date: Timestamp,

    /// Completion flag
    pub done: bool,
}

impl TodoItem {
    /// Creates an unpersisted, open todo item.
    pub fn new(
        name: impl Into<String>,
        priority: Priority,
        created: Timestamp,
        due_date: Timestamp,
    ) -> Self {
        Self {
            id: None,
            priority,
            name: name.into(),
            created,
            due_date,
            done: false,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Conversion of loosely typed keys into a validated [`TodoId`].
///
/// Implemented for the key representations callers hand the repository:
/// typed ids, raw integers, command-line strings and JSON values. Every
/// rejection is an `InvalidArgument` error.
pub trait IntoTodoId {
    fn into_todo_id(self) -> Result<TodoId>;
}

impl IntoTodoId for TodoId {
    fn into_todo_id(self) -> Result<TodoId> {
        Ok(self)
    }
}

impl IntoTodoId for i64 {
    fn into_todo_id(self) -> Result<TodoId> {
        TodoId::new(self)
    }
}

impl IntoTodoId for u64 {
    fn into_todo_id(self) -> Result<TodoId> {
        let id = i64::try_from(self).map_err(|_| {
            TodoError::invalid_argument("id").with_reason(format!("{self} is out of range"))
        })?;
        TodoId::new(id)
    }
}

impl IntoTodoId for &str {
    fn into_todo_id(self) -> Result<TodoId> {
        self.parse()
    }
}

impl IntoTodoId for &String {
    fn into_todo_id(self) -> Result<TodoId> {
        self.parse()
    }
}

impl IntoTodoId for &Value {
    fn into_todo_id(self) -> Result<TodoId> {
        match self {
            Value::Number(n) => match n.as_i64() {
                Some(id) => TodoId::new(id),
                None => Err(TodoError::invalid_argument("id")
                    .with_reason(format!("{n} is not an integer"))),
            },
            other => Err(TodoError::invalid_argument("id")
                .with_reason(format!("expected an integer, got {}", json_kind(other)))),
        }
    }
}

/// Conversion of caller-supplied records into a well-formed [`TodoItem`].
pub trait IntoTodoItem {
    fn into_todo_item(self) -> Result<TodoItem>;
}

impl IntoTodoItem for TodoItem {
    fn into_todo_item(self) -> Result<TodoItem> {
        Ok(self)
    }
}

impl IntoTodoItem for &TodoItem {
    fn into_todo_item(self) -> Result<TodoItem> {
        Ok(self.clone())
    }
}

/// Wire shape of a JSON todo record. Timestamps are taken as text so they
/// go through [`parse_timestamp`] like command-line input. Any `id` member is
/// not part of the shape and is dropped.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TodoRecord {
    priority: Priority,
    name: String,
    created: String,
    due_date: String,
    done: bool,
}

impl IntoTodoItem for &Value {
    fn into_todo_item(self) -> Result<TodoItem> {
        if !self.is_object() {
            return Err(TodoError::invalid_argument("todo").with_reason(format!(
                "expected a JSON object, got {}",
                json_kind(self)
            )));
        }

        let record = TodoRecord::deserialize(self)
            .map_err(|e| TodoError::invalid_argument("todo").with_reason(e.to_string()))?;

        Ok(TodoItem {
            id: None,
            priority: record.priority,
            name: record.name,
            created: parse_timestamp("created", &record.created)?,
            due_date: parse_timestamp("dueDate", &record.due_date)?,
            done: record.done,
        })
    }
}
