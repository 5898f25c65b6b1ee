//! Document model for schema-less JSON collections.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON document stored in a collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Store-assigned key (UUID v4)
    pub key: String,

    /// Document body; always a JSON object
    pub content: Value,

    /// Timestamp when the document was inserted (UTC)
    pub created_at: Timestamp,

    /// Timestamp of the last replace (UTC)
    pub last_modified: Timestamp,
}

impl Document {
    /// Looks up a top-level field of the document body.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.content.get(field)
    }
}
