use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::revision;
use super::store::{Document, DocumentError, DocumentStore, WriteResult};

#[derive(Debug, Clone)]
struct StoredDocument {
    rev: String,
    body: Value,
}

/// Process-local document store. Contents are lost on shutdown.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<BTreeMap<String, StoredDocument>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, id: &str) -> Result<Document, DocumentError> {
        let documents = self.documents.read().await;
        let stored = documents.get(id).ok_or(DocumentError::NotFound)?;
        Ok(Document {
            id: id.to_string(),
            rev: stored.rev.clone(),
            body: stored.body.clone(),
        })
    }

    async fn put(
        &self,
        id: Option<&str>,
        rev: Option<&str>,
        body: Value,
    ) -> Result<WriteResult, DocumentError> {
        let id = id.map(str::to_string).unwrap_or_else(revision::new_id);

        let mut documents = self.documents.write().await;
        let current = documents.get(&id).map(|d| d.rev.as_str());
        revision::check(current, rev)?;

        let rev = revision::next(current, &body);
        documents.insert(
            id.clone(),
            StoredDocument {
                rev: rev.clone(),
                body,
            },
        );
        Ok(WriteResult { id, rev })
    }

    async fn remove(&self, id: &str, rev: &str) -> Result<WriteResult, DocumentError> {
        let mut documents = self.documents.write().await;
        let current = documents
            .get(id)
            .map(|d| d.rev.as_str())
            .ok_or(DocumentError::NotFound)?;
        revision::check(Some(current), Some(rev))?;

        let rev = revision::next(Some(current), &Value::Null);
        documents.remove(id);
        Ok(WriteResult {
            id: id.to_string(),
            rev,
        })
    }

    async fn all_docs(&self) -> Result<Vec<Document>, DocumentError> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .map(|(id, stored)| Document {
                id: id.clone(),
                rev: stored.rev.clone(),
                body: stored.body.clone(),
            })
            .collect())
    }
}
