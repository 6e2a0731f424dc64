//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the checkout flow and the outside world. Adapters implement these ports.
//!
//! - `PaymentProvider` - Hosted checkout session creation
//! - `ProductCatalog` - Tier to product resolution

mod payment_provider;
mod product_catalog;

pub use payment_provider::{
    BillingAddressCollection, CheckoutMode, CheckoutSession, CheckoutSessionRequest, LineItem,
    PaymentError, PaymentErrorCode, PaymentMethodType, PaymentProvider,
};
pub use product_catalog::ProductCatalog;
