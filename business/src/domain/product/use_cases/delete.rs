use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::WriteAck;

pub struct DeleteProductParams {
    pub id: String,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<WriteAck, ProductError>;
}
