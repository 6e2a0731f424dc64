//! Checkout domain.
//!
//! Value objects for an inbound purchase request and the error taxonomy of the
//! checkout flow.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidTier | 400 |
//! | InvalidQuantity | 400 |
//! | Provider | 500 |
//! | Unexpected | 500 |

mod errors;
mod quantity;
mod redirect;

pub use errors::CheckoutError;
pub use quantity::Quantity;
pub use redirect::{RedirectUrls, DEFAULT_CANCEL_PATH, DEFAULT_SUCCESS_PATH};

use crate::domain::catalog::ProductCategory;

/// Product line sold through the hosted checkout.
pub const CHECKOUT_CATEGORY: ProductCategory = ProductCategory::OmniPanel;

/// Countries the provider will accept a shipping address from.
pub const SHIPPING_COUNTRIES: [&str; 10] =
    ["US", "CA", "GB", "AU", "NZ", "IE", "DE", "FR", "NL", "SG"];
