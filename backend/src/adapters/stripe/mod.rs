//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` port for Stripe's hosted Checkout:
//! - Form encoding of checkout session requests
//! - Error envelope mapping to `PaymentError`
//!
//! # Security
//!
//! - The secret key is held in `secrecy::SecretString` and only exposed for
//!   the `Authorization` header
//!
//! # Configuration
//!
//! Required environment variables:
//! - `CIPHER__PAYMENT__STRIPE_API_KEY`: Stripe secret API key

mod mock_payment_provider;
mod stripe_adapter;
mod wire_types;

pub use mock_payment_provider::MockPaymentProvider;
pub use stripe_adapter::{StripeConfig, StripePaymentAdapter};
pub use wire_types::{encode_checkout_form, StripeCheckoutSession, StripeErrorBody, StripeErrorEnvelope};
