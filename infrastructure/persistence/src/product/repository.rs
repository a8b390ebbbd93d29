use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product, WriteAck};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductBody;
use crate::document::{Document, DocumentError, DocumentStore, WriteResult};

/// Product repository over any revisioned document store.
pub struct ProductRepositoryDocumentStore {
    store: Arc<dyn DocumentStore>,
}

impl ProductRepositoryDocumentStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

fn map_err(error: DocumentError) -> RepositoryError {
    match error {
        DocumentError::NotFound => RepositoryError::NotFound,
        DocumentError::Conflict => RepositoryError::Conflict,
        DocumentError::Database(e) => {
            tracing::error!("Document store failure: {}", e);
            RepositoryError::DatabaseError
        }
    }
}

fn to_ack(result: WriteResult) -> WriteAck {
    WriteAck {
        ok: true,
        id: result.id,
        rev: result.rev,
    }
}

fn decode(document: Document) -> Result<Product, RepositoryError> {
    let body: ProductBody = serde_json::from_value(document.body).map_err(|e| {
        tracing::warn!("Document {} is not a product: {}", document.id, e);
        RepositoryError::Serialization
    })?;
    Ok(body.into_domain(document.id, document.rev))
}

fn encode(body: ProductBody) -> Result<serde_json::Value, RepositoryError> {
    serde_json::to_value(body).map_err(|_| RepositoryError::Serialization)
}

#[async_trait]
impl ProductRepository for ProductRepositoryDocumentStore {
    async fn get(&self, id: &str) -> Result<Product, RepositoryError> {
        let document = self.store.get(id).await.map_err(map_err)?;
        decode(document)
    }

    async fn put_new(&self, product: &NewProduct) -> Result<WriteAck, RepositoryError> {
        let body = encode(product.into())?;
        let result = self
            .store
            .put(product.id.as_deref(), None, body)
            .await
            .map_err(map_err)?;
        Ok(to_ack(result))
    }

    async fn put(&self, product: &Product) -> Result<WriteAck, RepositoryError> {
        let body = encode(product.into())?;
        let result = self
            .store
            .put(Some(&product.id), Some(&product.rev), body)
            .await
            .map_err(map_err)?;
        Ok(to_ack(result))
    }

    async fn remove(&self, product: &Product) -> Result<WriteAck, RepositoryError> {
        let result = self
            .store
            .remove(&product.id, &product.rev)
            .await
            .map_err(map_err)?;
        Ok(to_ack(result))
    }

    async fn all_docs(&self) -> Result<Vec<Product>, RepositoryError> {
        let documents = self.store.all_docs().await.map_err(map_err)?;
        // Foreign documents sharing the store are not products; skip them.
        Ok(documents
            .into_iter()
            .filter_map(|document| decode(document).ok())
            .collect())
    }
}
