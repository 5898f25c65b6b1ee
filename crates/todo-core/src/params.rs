//! Parameter structures for document operations.
//!
//! These are plain data carriers shared by every interface (the CLI today)
//! so that framework-specific derives stay out of the core. Interface layers
//! define their own argument types and convert into these with `From`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Names a collection, for operations that need nothing else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionName {
    pub collection: String,
}

impl From<&str> for CollectionName {
    fn from(collection: &str) -> Self {
        CollectionName {
            collection: collection.to_string(),
        }
    }
}

/// Parameters for inserting one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertDocument {
    pub collection: String,
    /// JSON object to store
    pub content: Value,
}

/// Parameters for a query-by-example search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindDocuments {
    pub collection: String,
    /// Example object; `None` matches every document
    pub filter: Option<Value>,
}

/// Parameters for replacing a document's content by key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceDocument {
    pub collection: String,
    pub key: String,
    pub content: Value,
}

/// Parameters for removing the documents matching an example object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveDocuments {
    pub collection: String,
    pub filter: Value,
}
