//! HTTP adapters - REST API implementations.

pub mod checkout;
pub mod server;

pub use checkout::{checkout_router, CheckoutAppState};
pub use server::{build_app, serve};
