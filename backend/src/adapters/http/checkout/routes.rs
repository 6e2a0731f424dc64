//! Axum router configuration for checkout endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_checkout_session, health, CheckoutAppState};

/// Create the checkout API router.
///
/// # Routes
/// - `POST /checkout` - Create a hosted checkout session
pub fn checkout_routes() -> Router<CheckoutAppState> {
    Router::new().route("/checkout", post(create_checkout_session))
}

/// Create the complete checkout module router.
///
/// Mounts the API under `/api` and the liveness probe at `/health`.
///
/// # Example
///
/// ```ignore
/// let app = checkout_router().with_state(CheckoutAppState::new(catalog, provider, base_url));
/// ```
pub fn checkout_router() -> Router<CheckoutAppState> {
    Router::new()
        .nest("/api", checkout_routes())
        .route("/health", get(health))
}
