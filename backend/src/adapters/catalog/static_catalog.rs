//! In-memory product catalog.
//!
//! Holds the storefront price list. Tier lookups are exact-match.

use std::collections::HashMap;

use crate::domain::catalog::{Product, ProductCategory};
use crate::ports::ProductCatalog;

/// Product catalog backed by a fixed in-memory table.
#[derive(Debug, Clone, Default)]
pub struct StaticProductCatalog {
    products: HashMap<String, Product>,
}

impl StaticProductCatalog {
    /// Build a catalog from an explicit product list.
    ///
    /// Later entries replace earlier ones with the same tier.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|p| (p.tier.clone(), p))
                .collect(),
        }
    }

    /// The storefront price list: OmniPanel plans and consulting engagements.
    pub fn builtin() -> Self {
        Self::from_products([
            Product::new(
                "omnipanel-starter",
                "starter",
                "OmniPanel Starter",
                ProductCategory::OmniPanel,
                "price_omnipanel_starter",
            ),
            Product::new(
                "omnipanel-pro",
                "pro",
                "OmniPanel Pro",
                ProductCategory::OmniPanel,
                "price_omnipanel_pro",
            ),
            Product::new(
                "omnipanel-enterprise",
                "enterprise",
                "OmniPanel Enterprise",
                ProductCategory::OmniPanel,
                "price_omnipanel_enterprise",
            ),
            Product::new(
                "cipher-strategy-session",
                "strategy-session",
                "Strategy Session",
                ProductCategory::Consulting,
                "price_cipher_strategy_session",
            ),
            Product::new(
                "cipher-advisory-retainer",
                "advisory-retainer",
                "Advisory Retainer",
                ProductCategory::Consulting,
                "price_cipher_advisory_retainer",
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for StaticProductCatalog {
    fn resolve(&self, tier: &str) -> Option<Product> {
        self.products.get(tier).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_resolves_omnipanel_tiers() {
        let catalog = StaticProductCatalog::builtin();
        for tier in ["starter", "pro", "enterprise"] {
            let product = catalog.resolve(tier).unwrap();
            assert_eq!(product.category, ProductCategory::OmniPanel);
            assert!(product.price_id.starts_with("price_"));
        }
    }

    #[test]
    fn builtin_carries_consulting_products() {
        let catalog = StaticProductCatalog::builtin();
        let product = catalog.resolve("strategy-session").unwrap();
        assert_eq!(product.category, ProductCategory::Consulting);
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn unknown_tier_resolves_to_none() {
        let catalog = StaticProductCatalog::builtin();
        assert!(catalog.resolve("unknown").is_none());
        assert!(catalog.resolve("").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = StaticProductCatalog::builtin();
        assert!(catalog.resolve("Pro").is_none());
    }

    #[test]
    fn from_products_keeps_last_duplicate() {
        let catalog = StaticProductCatalog::from_products([
            Product::new("a", "pro", "A", ProductCategory::OmniPanel, "price_a"),
            Product::new("b", "pro", "B", ProductCategory::OmniPanel, "price_b"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.resolve("pro").unwrap().price_id, "price_b");
    }

    #[test]
    fn default_catalog_is_empty() {
        assert!(StaticProductCatalog::default().is_empty());
    }
}
