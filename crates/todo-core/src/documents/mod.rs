//! Schema-less JSON document collections.
//!
//! Collections are named groups of JSON objects stored through the same
//! [`Session`] as the todo table. Documents get a store-assigned string key
//! and are located either by that key or by query-by-example [`Filter`]s.
//!
//! ```rust
//! use serde_json::json;
//! use todo_core::{documents::{DocumentStore, Filter}, SqliteSession};
//!
//! # fn main() -> todo_core::Result<()> {
//! let session = SqliteSession::open_in_memory()?;
//! let store = DocumentStore::new(&session);
//! let employees = store.create_collection("employees")?;
//!
//! employees.insert_one(&json!({ "empno": 7566, "ename": "JONES", "sal": 2975 }))?;
//! let found = employees.find(&Filter::from_value(&json!({ "ename": "JONES" }))?)?;
//! assert_eq!(found.len(), 1);
//! # Ok(())
//! # }
//! ```

use jiff::Timestamp;
use log::info;
use serde_json::Value as Json;
use uuid::Uuid;

use crate::{
    error::{Result, TodoError},
    models::{json_kind, Document},
    session::{BindType, Binds, Row, Session},
};

mod filter;

pub use filter::Filter;

const INSERT_COLLECTION_SQL: &str = "INSERT INTO collections (name, created_at) VALUES (:name, :created_at) ON CONFLICT(name) DO NOTHING";
const SELECT_COLLECTION_SQL: &str = "SELECT name FROM collections WHERE name = :name";
const DELETE_COLLECTION_SQL: &str = "DELETE FROM collections WHERE name = :name";
const INSERT_DOCUMENT_SQL: &str = "INSERT INTO documents (key, collection, content, created_at, last_modified) VALUES (:key, :collection, :content, :created_at, :last_modified)";
const SELECT_DOCUMENTS_SQL: &str = "SELECT key, content, created_at, last_modified FROM documents WHERE collection = :collection";
const REPLACE_DOCUMENT_SQL: &str = "UPDATE documents SET content = :content, last_modified = :last_modified WHERE collection = :collection AND key = :key";
const DELETE_DOCUMENTS_SQL: &str = "DELETE FROM documents WHERE collection = :collection";

/// Entry point for opening and creating collections.
pub struct DocumentStore<S> {
    session: S,
}

impl<S: Session> DocumentStore<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    /// Creates the collection, or opens it when it already exists.
    pub fn create_collection(&self, name: &str) -> Result<Collection<'_, S>> {
        validate_collection_name(name)?;

        let binds = Binds::new()
            .input("name", BindType::Varchar, name)
            .input("created_at", BindType::Date, Timestamp::now());
        let result = self.session.execute(INSERT_COLLECTION_SQL, &binds)?;
        if result.rows_affected == 1 {
            info!("Created collection {name}");
        }

        Ok(Collection {
            session: &self.session,
            name: name.to_string(),
        })
    }

    /// Opens an existing collection; `None` when there is none by that name.
    pub fn open_collection(&self, name: &str) -> Result<Option<Collection<'_, S>>> {
        validate_collection_name(name)?;

        let binds = Binds::new().input("name", BindType::Varchar, name);
        let result = self.session.execute(SELECT_COLLECTION_SQL, &binds)?;

        Ok((!result.rows.is_empty()).then(|| Collection {
            session: &self.session,
            name: name.to_string(),
        }))
    }
}

/// Handle on one named collection.
pub struct Collection<'s, S> {
    session: &'s S,
    name: String,
}

impl<S: Session> Collection<'_, S> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stores a new document and returns it with its generated key.
    pub fn insert_one(&self, content: &Json) -> Result<Document> {
        require_object(content)?;

        let key = Uuid::new_v4().to_string();
        let now = Timestamp::now();
        let binds = Binds::new()
            .input("key", BindType::Varchar, key.as_str())
            .input("collection", BindType::Varchar, self.name.as_str())
            .input("content", BindType::Json, serde_json::to_string(content)?)
            .input("created_at", BindType::Date, now)
            .input("last_modified", BindType::Date, now);

        let result = self.session.execute(INSERT_DOCUMENT_SQL, &binds)?;
        if result.rows_affected != 1 {
            return Err(TodoError::operation_failed(format!(
                "expected to insert one document into {}, the store reported {} rows",
                self.name, result.rows_affected
            )));
        }

        Ok(Document {
            key,
            content: content.clone(),
            created_at: now,
            last_modified: now,
        })
    }

    /// Returns the documents matching `filter`, in insertion order.
    pub fn find(&self, filter: &Filter) -> Result<Vec<Document>> {
        let binds = Binds::new().input("collection", BindType::Varchar, self.name.as_str());
        let (clause, binds) = filter.to_sql(binds);
        let sql = format!("{SELECT_DOCUMENTS_SQL}{clause} ORDER BY seq");

        let result = self.session.execute(&sql, &binds)?;
        result.rows.iter().map(document_from_row).collect()
    }

    pub fn find_by_key(&self, key: &str) -> Result<Option<Document>> {
        let binds = Binds::new()
            .input("collection", BindType::Varchar, self.name.as_str())
            .input("key", BindType::Varchar, key);
        let sql = format!("{SELECT_DOCUMENTS_SQL} AND key = :key");

        let result = self.session.execute(&sql, &binds)?;
        result.rows.first().map(document_from_row).transpose()
    }

    /// Replaces the content of the document stored under `key`.
    ///
    /// Returns `false` when the collection holds no document with that key.
    pub fn replace_one(&self, key: &str, content: &Json) -> Result<bool> {
        require_object(content)?;

        let binds = Binds::new()
            .input("content", BindType::Json, serde_json::to_string(content)?)
            .input("last_modified", BindType::Date, Timestamp::now())
            .input("collection", BindType::Varchar, self.name.as_str())
            .input("key", BindType::Varchar, key);

        let result = self.session.execute(REPLACE_DOCUMENT_SQL, &binds)?;
        Ok(result.rows_affected == 1)
    }

    /// Removes every document matching `filter` and returns how many went.
    pub fn remove(&self, filter: &Filter) -> Result<u64> {
        let binds = Binds::new().input("collection", BindType::Varchar, self.name.as_str());
        let (clause, binds) = filter.to_sql(binds);
        let sql = format!("{DELETE_DOCUMENTS_SQL}{clause}");

        let result = self.session.execute(&sql, &binds)?;
        Ok(result.rows_affected)
    }

    /// Drops the collection together with all of its documents.
    pub fn drop_collection(self) -> Result<()> {
        let binds = Binds::new().input("collection", BindType::Varchar, self.name.as_str());
        self.session.execute(DELETE_DOCUMENTS_SQL, &binds)?;

        let binds = Binds::new().input("name", BindType::Varchar, self.name.as_str());
        let result = self.session.execute(DELETE_COLLECTION_SQL, &binds)?;
        if result.rows_affected != 1 {
            return Err(TodoError::operation_failed(format!(
                "collection {} no longer exists",
                self.name
            )));
        }

        info!("Dropped collection {}", self.name);
        Ok(())
    }
}

fn validate_collection_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name.len() <= 128
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(TodoError::invalid_argument("collection").with_reason(format!(
            "'{name}' must be 1-128 ASCII letters, digits, '_' or '-'"
        )))
    }
}

fn require_object(content: &Json) -> Result<()> {
    if content.is_object() {
        Ok(())
    } else {
        Err(TodoError::invalid_argument("content").with_reason(format!(
            "documents must be JSON objects, got {}",
            json_kind(content)
        )))
    }
}

fn document_from_row(row: &Row) -> Result<Document> {
    let key = row
        .require("key")?
        .as_str()
        .ok_or_else(|| TodoError::invalid_data("key", "expected text"))?
        .to_string();

    let content = row
        .require("content")?
        .as_str()
        .ok_or_else(|| TodoError::invalid_data("content", "expected JSON text"))?;
    let content: Json = serde_json::from_str(content)?;

    let created_at = row
        .require("created_at")?
        .as_timestamp()
        .ok_or_else(|| TodoError::invalid_data("created_at", "expected a timestamp"))?;

    let last_modified = row
        .require("last_modified")?
        .as_timestamp()
        .ok_or_else(|| TodoError::invalid_data("last_modified", "expected a timestamp"))?;

    Ok(Document {
        key,
        content,
        created_at,
        last_modified,
    })
}
