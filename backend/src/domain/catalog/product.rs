//! Catalog product.

use serde::{Deserialize, Serialize};

use super::ProductCategory;

/// A purchasable product, addressed by its pricing tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable product identifier.
    pub id: String,

    /// Tier identifier clients send at checkout.
    pub tier: String,

    /// Display name shown on receipts and in provider metadata.
    pub name: String,

    /// Product line.
    pub category: ProductCategory,

    /// Payment provider price reference (e.g. `price_...`).
    pub price_id: String,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        tier: impl Into<String>,
        name: impl Into<String>,
        category: ProductCategory,
        price_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            tier: tier.into(),
            name: name.into(),
            category,
            price_id: price_id.into(),
        }
    }

    /// Returns true if this product belongs to the given line.
    pub fn is_in(&self, category: ProductCategory) -> bool {
        self.category == category
    }
}
