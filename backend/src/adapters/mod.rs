//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - In-process product catalog
//! - `http` - Axum REST surface
//! - `stripe` - Stripe Checkout client and test double

pub mod catalog;
pub mod http;
pub mod stripe;

pub use catalog::StaticProductCatalog;
pub use stripe::{MockPaymentProvider, StripeConfig, StripePaymentAdapter};
