use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::listing::ProductPage;
use business::domain::product::model::{Product, WriteAck};
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::update::UpdateProductParams;

// Every payload field is optional on the wire so that missing fields reach the
// validator and are reported with the API's own error body.

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Product ID (assigned by the store when omitted)
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<String>,
    /// Product name (required, cannot be empty)
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Unit price (required, cannot be negative)
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Quantity in stock (required)
    #[oai(skip_serializing_if_is_none)]
    pub stock_quantity: Option<f64>,
    /// Product description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Product category
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    /// Creation timestamp (defaults to now)
    #[oai(skip_serializing_if_is_none)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<CreateProductRequest> for CreateProductParams {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
            price: request.price,
            stock_quantity: request.stock_quantity,
            description: request.description,
            category: request.category,
            created_at: request.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    /// Product name (required, cannot be empty)
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Unit price (required, cannot be negative)
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Quantity in stock (required)
    #[oai(skip_serializing_if_is_none)]
    pub stock_quantity: Option<f64>,
    /// Product description (removed when omitted)
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Product category (removed when omitted)
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
}

impl UpdateProductRequest {
    pub fn into_params(self, id: String) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: self.name,
            price: self.price,
            stock_quantity: self.stock_quantity,
            description: self.description,
            category: self.category,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Revision token of the stored document
    pub rev: String,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Quantity in stock
    pub stock_quantity: f64,
    /// Product description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Product category
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            rev: product.rev,
            name: product.name,
            price: product.price,
            stock_quantity: product.stock_quantity,
            description: product.description,
            category: product.category,
            created_at: product.created_at,
        }
    }
}

/// A page of products
#[derive(Debug, Clone, Object)]
pub struct ProductPageResponse {
    /// Number of products matching the filters, before pagination
    pub total: u64,
    /// Page number (starting at 1)
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Products on this page
    pub data: Vec<ProductResponse>,
}

impl From<ProductPage> for ProductPageResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            total: page.total as u64,
            page: page.page,
            limit: page.limit,
            data: page.data.into_iter().map(|p| p.into()).collect(),
        }
    }
}

/// Store acknowledgement of a write or removal
#[derive(Debug, Clone, Object)]
pub struct WriteAckResponse {
    /// Whether the store accepted the operation
    pub ok: bool,
    /// Document ID
    pub id: String,
    /// New revision token
    pub rev: String,
}

impl From<WriteAck> for WriteAckResponse {
    fn from(ack: WriteAck) -> Self {
        Self {
            ok: ack.ok,
            id: ack.id,
            rev: ack.rev,
        }
    }
}
