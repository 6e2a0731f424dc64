//! HTTP adapter for checkout endpoints.
//!
//! Exposes the checkout flow via REST API:
//! - `POST /api/checkout` - Create a hosted checkout session
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{create_checkout_session, health, CheckoutApiError, CheckoutAppState};
pub use routes::{checkout_router, checkout_routes};
