use super::model::Product;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Filters and pagination accepted by the product listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListQuery {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// One page of products. `total` counts the filtered set before pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub data: Vec<Product>,
}

impl ProductListQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty())
            && product.category.as_deref() != Some(category)
        {
            return false;
        }
        if let Some(min_price) = self.min_price
            && product.price < min_price
        {
            return false;
        }
        if let Some(max_price) = self.max_price
            && product.price > max_price
        {
            return false;
        }
        true
    }

    /// Filters `products` in their given order, then cuts out the requested page.
    /// Page numbers start at 1; page 0 is always empty.
    pub fn apply(&self, products: Vec<Product>) -> ProductPage {
        let page = self.page();
        let limit = self.limit();

        let filtered: Vec<Product> = products.into_iter().filter(|p| self.matches(p)).collect();
        let total = filtered.len();

        let data = match page.checked_sub(1) {
            Some(index) => {
                let skip = (index as usize).saturating_mul(limit as usize);
                filtered.into_iter().skip(skip).take(limit as usize).collect()
            }
            None => Vec::new(),
        };

        ProductPage {
            total,
            page,
            limit,
            data,
        }
    }
}
