use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::listing::{ProductListQuery, ProductPage};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::ListProductsUseCase;

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, query: ProductListQuery) -> Result<ProductPage, ProductError> {
        self.logger.info(&format!("Listing products: {:?}", query));

        // Filtering happens in memory over the whole document set.
        let products = self.repository.all_docs().await.inspect_err(|e| {
            self.logger.error(&format!("Failed to fetch products: {}", e));
        })?;
        let fetched = products.len();

        let page = query.apply(products);
        self.logger.info(&format!(
            "Found {} of {} products, returning {}",
            page.total,
            fetched,
            page.data.len()
        ));
        Ok(page)
    }
}
