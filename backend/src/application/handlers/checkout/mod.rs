//! Checkout handlers.
//!
//! ## Commands
//! - Creating a hosted checkout session for a pricing tier

mod create_checkout_session;

pub use create_checkout_session::{
    CreateCheckoutSessionCommand, CreateCheckoutSessionHandler, CreateCheckoutSessionResult,
};
