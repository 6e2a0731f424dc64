//! Mock payment provider for testing.
//!
//! Provides a configurable mock implementation of `PaymentProvider` for unit
//! and integration tests. Supports:
//! - Pre-configured responses
//! - Error injection
//! - Request recording

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{CheckoutSession, CheckoutSessionRequest, PaymentError, PaymentProvider};

/// Mock payment provider for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentProvider::new();
///
/// // Configure responses
/// mock.set_checkout_session(CheckoutSession { id: "cs_123".into(), url: "...".into() });
///
/// // Inject errors
/// mock.set_error(PaymentError::network("connection reset"));
///
/// // Inspect what the caller sent
/// let sent = mock.requests();
/// ```
#[derive(Default)]
pub struct MockPaymentProvider {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

/// Internal mutable state.
#[derive(Default)]
struct MockState {
    /// Next checkout session to return.
    next_checkout: Option<CheckoutSession>,

    /// Error to return on next call.
    next_error: Option<PaymentError>,

    /// Error returned on every call until cleared.
    sticky_error: Option<PaymentError>,

    /// Every request received, in order.
    requests: Vec<CheckoutSessionRequest>,

    /// Counter for generated session IDs.
    sequence: u64,
}

impl MockPaymentProvider {
    /// Create a new mock provider with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails every call with `error`.
    pub fn failing(error: PaymentError) -> Self {
        let mock = Self::new();
        mock.inner.lock().unwrap().sticky_error = Some(error);
        mock
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Set the checkout session to return on the next call.
    pub fn set_checkout_session(&self, session: CheckoutSession) {
        self.inner.lock().unwrap().next_checkout = Some(session);
    }

    /// Set an error to return on the next call only.
    pub fn set_error(&self, error: PaymentError) {
        self.inner.lock().unwrap().next_error = Some(error);
    }

    /// Clear all configured errors.
    pub fn clear_errors(&self) {
        let mut state = self.inner.lock().unwrap();
        state.next_error = None;
        state.sticky_error = None;
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// All requests received so far.
    pub fn requests(&self) -> Vec<CheckoutSessionRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<CheckoutSessionRequest> {
        self.inner.lock().unwrap().requests.last().cloned()
    }

    /// Number of session creation calls.
    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }

    /// Check if the provider was called at all.
    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    /// Clear the request log.
    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().requests.clear();
    }
}

impl Clone for MockPaymentProvider {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_checkout_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let mut state = self.inner.lock().unwrap();
        state.requests.push(request);

        if let Some(error) = state.sticky_error.clone() {
            return Err(error);
        }
        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        if let Some(session) = state.next_checkout.take() {
            return Ok(session);
        }

        state.sequence += 1;
        let id = format!("cs_mock_{}", state.sequence);
        Ok(CheckoutSession {
            url: format!("https://checkout.stripe.com/c/pay/{}", id),
            id,
        })
    }
}
