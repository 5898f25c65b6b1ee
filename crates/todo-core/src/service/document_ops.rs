//! Document collection operations for the TodoService.

use super::TodoService;
use crate::{
    documents::{DocumentStore, Filter},
    error::Result,
    models::Document,
    params::{CollectionName, FindDocuments, InsertDocument, RemoveDocuments, ReplaceDocument},
};

impl TodoService {
    /// Inserts a document, creating the collection on first use.
    pub async fn insert_document(&self, params: &InsertDocument) -> Result<Document> {
        let collection = params.collection.clone();
        let content = params.content.clone();

        self.with_session(move |session| {
            DocumentStore::new(session)
                .create_collection(&collection)?
                .insert_one(&content)
        })
        .await
    }

    /// Finds documents by example. A missing collection holds no documents.
    pub async fn find_documents(&self, params: &FindDocuments) -> Result<Vec<Document>> {
        let collection = params.collection.clone();
        let filter = match &params.filter {
            Some(example) => Filter::from_value(example)?,
            None => Filter::all(),
        };

        self.with_session(move |session| {
            match DocumentStore::new(session).open_collection(&collection)? {
                Some(collection) => collection.find(&filter),
                None => Ok(Vec::new()),
            }
        })
        .await
    }

    /// Replaces a document's content by key. `false` when nothing matched.
    pub async fn replace_document(&self, params: &ReplaceDocument) -> Result<bool> {
        let collection = params.collection.clone();
        let key = params.key.clone();
        let content = params.content.clone();

        self.with_session(move |session| {
            match DocumentStore::new(session).open_collection(&collection)? {
                Some(collection) => collection.replace_one(&key, &content),
                None => Ok(false),
            }
        })
        .await
    }

    /// Removes the documents matching an example and returns the count.
    pub async fn remove_documents(&self, params: &RemoveDocuments) -> Result<u64> {
        let collection = params.collection.clone();
        let filter = Filter::from_value(&params.filter)?;

        self.with_session(move |session| {
            match DocumentStore::new(session).open_collection(&collection)? {
                Some(collection) => collection.remove(&filter),
                None => Ok(0),
            }
        })
        .await
    }

    /// Drops a collection and its documents. Returns `false` when the
    /// collection did not exist.
    pub async fn drop_collection(&self, params: &CollectionName) -> Result<bool> {
        let collection = params.collection.clone();

        self.with_session(move |session| {
            match DocumentStore::new(session).open_collection(&collection)? {
                Some(collection) => collection.drop_collection().map(|_| true),
                None => Ok(false),
            }
        })
        .await
    }
}
