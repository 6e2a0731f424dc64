//! HTTP handlers for checkout endpoints.
//!
//! These handlers connect Axum routes to the checkout command handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{CreateCheckoutSessionCommand, CreateCheckoutSessionHandler};
use crate::domain::checkout::CheckoutError;
use crate::ports::{PaymentProvider, ProductCatalog};

use super::dto::{CheckoutResponse, CreateCheckoutRequest, ErrorResponse, HealthResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct CheckoutAppState {
    pub catalog: Arc<dyn ProductCatalog>,
    pub payment_provider: Arc<dyn PaymentProvider>,
    /// Site base URL used for default redirect targets.
    pub base_url: String,
}

impl CheckoutAppState {
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        payment_provider: Arc<dyn PaymentProvider>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            payment_provider,
            base_url: base_url.into(),
        }
    }

    pub fn create_checkout_session_handler(&self) -> CreateCheckoutSessionHandler {
        CreateCheckoutSessionHandler::new(
            self.catalog.clone(),
            self.payment_provider.clone(),
            self.base_url.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/checkout - Create a hosted checkout session
pub async fn create_checkout_session(
    State(state): State<CheckoutAppState>,
    payload: Result<Json<CreateCheckoutRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CheckoutApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::error!(error = %rejection.body_text(), "Unreadable checkout request body");
        CheckoutError::unexpected(rejection.body_text())
    })?;

    let handler = state.create_checkout_session_handler();
    let result = handler
        .handle(CreateCheckoutSessionCommand::from(request))
        .await?;

    let response = CheckoutResponse {
        session_id: result.checkout_session.id,
        url: result.checkout_session.url,
    };

    Ok(Json(response))
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts checkout errors to HTTP responses.
///
/// Causes are logged where they occur; the body only ever carries the fixed
/// public message.
#[derive(Debug)]
pub struct CheckoutApiError(CheckoutError);

impl From<CheckoutError> for CheckoutApiError {
    fn from(err: CheckoutError) -> Self {
        Self(err)
    }
}

impl IntoResponse for CheckoutApiError {
    fn into_response(self) -> axum::response::Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = ErrorResponse::new(self.0.public_message());
        (status, Json(body)).into_response()
    }
}
