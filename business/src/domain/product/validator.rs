use chrono::{DateTime, Utc};

use super::errors::{Field, ValidationError};
use super::model::{NewProduct, ProductDraft};

/// Checks required fields and value constraints of a candidate product.
///
/// `name` must be present and not empty, `price` and `stock_quantity` must be
/// present, `price` must not be negative. Zero is a valid price and stock.
/// A blank `id` counts as absent; `created_at` defaults to the current time.
pub fn validate(draft: ProductDraft) -> Result<NewProduct, ValidationError> {
    validate_at(draft, Utc::now())
}

pub fn validate_at(draft: ProductDraft, now: DateTime<Utc>) -> Result<NewProduct, ValidationError> {
    let name = draft
        .name
        .filter(|name| !name.is_empty())
        .ok_or(ValidationError::MissingField(Field::Name))?;
    let price = draft
        .price
        .ok_or(ValidationError::MissingField(Field::Price))?;
    let stock_quantity = draft
        .stock_quantity
        .ok_or(ValidationError::MissingField(Field::StockQuantity))?;

    if price < 0.0 {
        return Err(ValidationError::InvalidValue);
    }

    Ok(NewProduct {
        id: draft.id.filter(|id| !id.trim().is_empty()),
        name,
        price,
        stock_quantity,
        description: draft.description,
        category: draft.category,
        created_at: draft.created_at.unwrap_or(now),
    })
}
