use async_trait::async_trait;
use serde_json::Value;

/// A stored document: identity, current revision token and JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub rev: String,
    pub body: Value,
}

/// Identity and revision produced by a successful write or removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    pub id: String,
    pub rev: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("document.not_found")]
    NotFound,
    #[error("document.conflict")]
    Conflict,
    #[error("document.database_error")]
    Database(#[from] sqlx::Error),
}

/// Key/value store of whole JSON documents with optimistic revision checks.
///
/// A write to an id that does not exist yet must carry no revision. A write
/// or removal of an existing document must carry its current revision,
/// otherwise the store answers `Conflict`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, id: &str) -> Result<Document, DocumentError>;

    /// Writes `body` under `id`, or under a freshly generated id when `None`.
    async fn put(
        &self,
        id: Option<&str>,
        rev: Option<&str>,
        body: Value,
    ) -> Result<WriteResult, DocumentError>;

    async fn remove(&self, id: &str, rev: &str) -> Result<WriteResult, DocumentError>;

    /// Every document, ordered by id.
    async fn all_docs(&self) -> Result<Vec<Document>, DocumentError>;
}
