use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::product::model::{NewProduct, Product};

/// JSON body of a product document. Identity and revision are kept by the
/// store next to the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBody {
    pub name: String,
    pub price: f64,
    pub stock_quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ProductBody {
    pub fn into_domain(self, id: String, rev: String) -> Product {
        Product {
            id,
            rev,
            name: self.name,
            price: self.price,
            stock_quantity: self.stock_quantity,
            description: self.description,
            category: self.category,
            created_at: self.created_at,
        }
    }
}

impl From<&NewProduct> for ProductBody {
    fn from(product: &NewProduct) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            stock_quantity: product.stock_quantity,
            description: product.description.clone(),
            category: product.category.clone(),
            created_at: product.created_at,
        }
    }
}

impl From<&Product> for ProductBody {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            stock_quantity: product.stock_quantity,
            description: product.description.clone(),
            category: product.category.clone(),
            created_at: product.created_at,
        }
    }
}
