use std::fmt;

use crate::domain::errors::RepositoryError;

/// Fields the validator requires on every product write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Price,
    StockQuantity,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Price => write!(f, "price"),
            Field::StockQuantity => write!(f, "stock_quantity"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("product.{0}_required")]
    MissingField(Field),
    #[error("product.negative_price")]
    InvalidValue,
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("product.not_found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] RepositoryError),
}
