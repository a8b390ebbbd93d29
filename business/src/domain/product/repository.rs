use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product, WriteAck};

/// Document store port for products.
///
/// Writes are revision-checked by the store: `put` must carry the revision it
/// read, `put_new` must not target an existing id.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get(&self, id: &str) -> Result<Product, RepositoryError>;
    async fn put_new(&self, product: &NewProduct) -> Result<WriteAck, RepositoryError>;
    async fn put(&self, product: &Product) -> Result<WriteAck, RepositoryError>;
    async fn remove(&self, product: &Product) -> Result<WriteAck, RepositoryError>;
    async fn all_docs(&self) -> Result<Vec<Product>, RepositoryError>;
}
