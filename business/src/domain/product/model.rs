use chrono::{DateTime, Utc};

/// A product as persisted in the document store.
///
/// `rev` is the store's revision token. It is carried through unchanged so that
/// writes can be checked for conflicts by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub rev: String,
    pub name: String,
    pub price: f64,
    pub stock_quantity: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Candidate product as received from a client. Nothing is guaranteed yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock_quantity: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A validated product that has not been written yet.
/// `id` is left to the store when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
    pub stock_quantity: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Write acknowledgement returned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteAck {
    pub ok: bool,
    pub id: String,
    pub rev: String,
}

impl Product {
    /// Replaces the mutable fields with the validated ones.
    /// Identity, revision and creation time are kept.
    pub fn merge(self, changes: NewProduct) -> Self {
        Self {
            id: self.id,
            rev: self.rev,
            name: changes.name,
            price: changes.price,
            stock_quantity: changes.stock_quantity,
            description: changes.description,
            category: changes.category,
            created_at: self.created_at,
        }
    }
}
