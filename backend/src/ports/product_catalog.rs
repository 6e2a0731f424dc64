//! Product catalog port.

use crate::domain::catalog::Product;

/// Resolves a pricing tier to the product it sells.
///
/// Lookups are pure: the same tier always yields the same product.
pub trait ProductCatalog: Send + Sync {
    /// Returns the product for `tier`, or `None` if the tier is unknown.
    fn resolve(&self, tier: &str) -> Option<Product>;
}
