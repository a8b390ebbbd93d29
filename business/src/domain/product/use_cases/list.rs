use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::listing::{ProductListQuery, ProductPage};

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, query: ProductListQuery) -> Result<ProductPage, ProductError>;
}
