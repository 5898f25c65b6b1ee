//! SQLite-backed session.

use std::{collections::HashMap, path::Path};

use log::debug;
use rusqlite::{
    types::{Value as SqlValue, ValueRef},
    Connection,
};

use super::{Binds, Execution, Row, Session, Value};
use crate::error::{DatabaseResultExt, Result, TodoError};

/// Session over a single SQLite connection.
///
/// Statements run in autocommit mode. Output binds have no placeholder in the
/// statement text; they are read from the first row a `RETURNING` clause
/// produces, matching column names case-insensitively.
pub struct SqliteSession {
    pub(super) connection: Connection,
}

impl SqliteSession {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).db_context("Failed to open database connection")?;

        let session = Self { connection };
        session.initialize_schema()?;
        Ok(session)
    }

    /// Opens a private in-memory database with the schema applied.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let session = Self { connection };
        session.initialize_schema()?;
        Ok(session)
    }
}

impl Session for SqliteSession {
    fn execute(&self, sql: &str, binds: &Binds) -> Result<Execution> {
        debug!(
            "executing statement [{}]: {}",
            binds.iter().map(|(name, _)| name).collect::<Vec<_>>().join(", "),
            sql.split_whitespace().collect::<Vec<_>>().join(" ")
        );

        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare statement")?;

        for (name, value) in binds.inputs() {
            let index = stmt
                .parameter_index(&format!(":{name}"))
                .db_context("Failed to resolve bind parameter")?
                .ok_or_else(|| {
                    TodoError::invalid_argument(name)
                        .with_reason("statement has no placeholder for this bind")
                })?;
            stmt.raw_bind_parameter(index, to_sql(value))
                .db_context("Failed to bind parameter")?;
        }

        if stmt.column_count() == 0 {
            let rows_affected = stmt
                .raw_execute()
                .db_context("Failed to execute statement")?;
            return Ok(Execution {
                rows_affected: rows_affected as u64,
                ..Default::default()
            });
        }

        let column_names: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let readonly = stmt.readonly();

        let mut rows = Vec::new();
        let mut cursor = stmt.raw_query();
        while let Some(row) = cursor.next().db_context("Failed to fetch row")? {
            let mut columns = Vec::with_capacity(column_names.len());
            for (index, name) in column_names.iter().enumerate() {
                let value = row.get_ref(index).db_context("Failed to read column")?;
                columns.push((name.clone(), from_sql(value)));
            }
            rows.push(Row::new(columns));
        }
        drop(cursor);

        // Writes with a RETURNING clause are stepped like queries
        let rows_affected = if readonly {
            0
        } else {
            self.connection.changes() as u64
        };

        let mut out_binds = HashMap::new();
        if let Some(first) = rows.first() {
            for name in binds.outputs() {
                if let Some(value) = first.get(name) {
                    out_binds.insert(name.to_string(), value.clone());
                }
            }
        }

        Ok(Execution {
            rows_affected,
            rows,
            out_binds,
        })
    }
}

fn to_sql(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Integer(i) => SqlValue::Integer(*i),
        Value::Real(r) => SqlValue::Real(*r),
        Value::Text(s) => SqlValue::Text(s.clone()),
        Value::Boolean(b) => SqlValue::Integer(i64::from(*b)),
        Value::Timestamp(ts) => SqlValue::Text(ts.to_string()),
    }
}

fn from_sql(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(r) => Value::Real(r),
        ValueRef::Text(t) | ValueRef::Blob(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
    }
}
