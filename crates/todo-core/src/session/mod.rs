//! Database session abstraction.
//!
//! A [`Session`] is the single capability the repositories need: execute one
//! parameterized statement and report what happened. Bindings are named
//! (`:name` placeholders) and carry a direction, a declared type and a value.
//! Output bindings come back in [`Execution::out_binds`], which is how a
//! store-generated key travels back to the caller.
//!
//! [`SqliteSession`] is the concrete implementation backed by `rusqlite`.
//! Tests substitute their own implementations to observe or script store
//! behavior.

use std::collections::HashMap;

use jiff::Timestamp;

use crate::error::{Result, TodoError};

mod schema;
pub mod sqlite;

pub use sqlite::SqliteSession;

/// Executes parameterized statements against a backing store.
pub trait Session {
    /// Runs one statement with the given bindings.
    fn execute(&self, sql: &str, binds: &Binds) -> Result<Execution>;
}

impl<S: Session + ?Sized> Session for &S {
    fn execute(&self, sql: &str, binds: &Binds) -> Result<Execution> {
        (**self).execute(sql, binds)
    }
}

/// Direction of a bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindDirection {
    In,
    Out,
}

/// Declared type of a bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindType {
    Varchar,
    Number,
    Date,
    Boolean,
    Json,
}

/// A single named binding.
#[derive(Debug, Clone, PartialEq)]
pub struct Bind {
    pub direction: BindDirection,
    pub kind: BindType,
    /// Input value; always `None` for output binds
    pub value: Option<Value>,
}

/// Ordered collection of named bindings for one statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Binds {
    entries: Vec<(String, Bind)>,
}

impl Binds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an input binding.
    pub fn input(mut self, name: &str, kind: BindType, value: impl Into<Value>) -> Self {
        self.entries.push((
            name.to_string(),
            Bind {
                direction: BindDirection::In,
                kind,
                value: Some(value.into()),
            },
        ));
        self
    }

    /// Adds an output binding the store fills in.
    pub fn output(mut self, name: &str, kind: BindType) -> Self {
        self.entries.push((
            name.to_string(),
            Bind {
                direction: BindDirection::Out,
                kind,
                value: None,
            },
        ));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Bind> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, bind)| bind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Bind)> {
        self.entries.iter().map(|(name, bind)| (name.as_str(), bind))
    }

    /// Input bindings paired with their values.
    pub fn inputs(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.iter().filter_map(|(name, bind)| match bind.direction {
            BindDirection::In => bind.value.as_ref().map(|value| (name, value)),
            BindDirection::Out => None,
        })
    }

    /// Names of the output bindings.
    pub fn outputs(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, bind)| bind.direction == BindDirection::Out)
            .map(|(name, _)| name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A value crossing the session boundary, in either direction.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Boolean(bool),
    Timestamp(Timestamp),
}

impl Value {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Real(r) if r.fract() == 0.0 => Some(*r as i64),
            _ => None,
        }
    }

    /// Booleans come back from most stores as 0/1 integers.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            Value::Integer(0) => Some(false),
            Value::Integer(1) => Some(true),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Accepts native timestamps and RFC 3339 text.
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::Timestamp(ts) => Some(*ts),
            Value::Text(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Timestamp> for Value {
    fn from(value: Timestamp) -> Self {
        Value::Timestamp(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// One fetched row. Column lookup ignores case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new(columns: Vec<(String, Value)>) -> Self {
        Self { columns }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .map(|(_, value)| value)
    }

    /// Like [`Row::get`], but a missing column is an `InvalidData` error.
    pub fn require(&self, column: &str) -> Result<&Value> {
        self.get(column)
            .ok_or_else(|| TodoError::invalid_data(column, "column missing from result"))
    }
}

/// Outcome of executing one statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Execution {
    /// Rows changed by a write; 0 for reads
    pub rows_affected: u64,
    /// Rows fetched by a read or produced by a `RETURNING` clause
    pub rows: Vec<Row>,
    /// Values for the statement's output bindings
    pub out_binds: HashMap<String, Value>,
}

impl Execution {
    pub fn out_bind(&self, name: &str) -> Option<&Value> {
        self.out_binds.get(name)
    }
}
