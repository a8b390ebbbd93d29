use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{ProductDraft, WriteAck};

/// Full replacement of the mutable product fields.
pub struct UpdateProductParams {
    pub id: String,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock_quantity: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl UpdateProductParams {
    /// Splits the target id from the candidate fields.
    pub fn into_parts(self) -> (String, ProductDraft) {
        let draft = ProductDraft {
            id: None,
            name: self.name,
            price: self.price,
            stock_quantity: self.stock_quantity,
            description: self.description,
            category: self.category,
            created_at: None,
        };
        (self.id, draft)
    }
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<WriteAck, ProductError>;
}
