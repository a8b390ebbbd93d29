use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::WriteAck;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::validator;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<WriteAck, ProductError> {
        let product = validator::validate(params.into()).inspect_err(|e| {
            self.logger
                .debug(&format!("Rejected product creation: {}", e));
        })?;

        self.logger
            .info(&format!("Creating product: {}", product.name));

        let ack = self.repository.put_new(&product).await.inspect_err(|e| {
            self.logger
                .error(&format!("Failed to store product {}: {}", product.name, e));
        })?;

        self.logger
            .info(&format!("Product created with id: {} rev: {}", ack.id, ack.rev));
        Ok(ack)
    }
}
