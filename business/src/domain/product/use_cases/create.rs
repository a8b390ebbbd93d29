use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{ProductDraft, WriteAck};

pub struct CreateProductParams {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock_quantity: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<CreateProductParams> for ProductDraft {
    fn from(params: CreateProductParams) -> Self {
        Self {
            id: params.id,
            name: params.name,
            price: params.price,
            stock_quantity: params.stock_quantity,
            description: params.description,
            category: params.category,
            created_at: params.created_at,
        }
    }
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<WriteAck, ProductError>;
}
