use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::WriteAck;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<WriteAck, ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // The current revision is needed for the removal
        let product = self
            .repository
            .get(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Store(other),
            })?;

        let ack = self.repository.remove(&product).await.map_err(|e| match e {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Store(other),
        })?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(ack)
    }
}
