use anyhow::Result;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};

use super::Database;

/// Collection served by the dump endpoint.
pub const LICENSING_COLLECTION: &str = "licensing";

/// Store-assigned identifier present on every persisted document.
pub const ID_FIELD: &str = "_id";

/// Returns a copy of the document with every field except the store
/// identifier, insertion order preserved. The source is left untouched.
pub fn strip_document_id(document: &Document) -> Document {
    document
        .iter()
        .filter(|(key, _)| key.as_str() != ID_FIELD)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

impl Database {
    /// Fetches every document in the named collection, no filter and no
    /// ordering guarantee. The whole collection is materialized in memory.
    pub async fn fetch_all_documents(&self, collection: &str) -> Result<Vec<Document>> {
        let cursor = self.collection(collection).find(doc! {}).await?;
        let documents = cursor.try_collect().await?;
        Ok(documents)
    }

    /// Full-collection dump with the store identifier removed from each
    /// document, ready for JSON serialization.
    pub async fn dump_collection(&self, collection: &str) -> Result<Vec<Document>> {
        let documents = self.fetch_all_documents(collection).await?;
        Ok(documents.iter().map(strip_document_id).collect())
    }
}
