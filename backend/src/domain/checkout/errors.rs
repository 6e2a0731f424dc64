//! Checkout error types.

use thiserror::Error;

use crate::ports::PaymentError;

/// Errors from the checkout flow.
///
/// Client-facing messages are fixed; causes are only ever logged.
#[derive(Debug, Clone, Error)]
pub enum CheckoutError {
    /// Tier is unknown or belongs to another product line.
    #[error("invalid pricing tier: {0:?}")]
    InvalidTier(String),

    /// Quantity is below one or out of range.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// The payment provider rejected or failed the session request.
    #[error("payment provider failed: {0}")]
    Provider(#[from] PaymentError),

    /// Anything else that went wrong while handling the request.
    #[error("unexpected checkout failure: {0}")]
    Unexpected(String),
}

impl CheckoutError {
    pub fn invalid_tier(tier: impl Into<String>) -> Self {
        CheckoutError::InvalidTier(tier.into())
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        CheckoutError::Unexpected(message.into())
    }

    /// Returns true if the caller sent a bad request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CheckoutError::InvalidTier(_) | CheckoutError::InvalidQuantity(_)
        )
    }

    /// Message safe to return to the caller.
    pub fn public_message(&self) -> &'static str {
        match self {
            CheckoutError::InvalidTier(_) => "Invalid pricing tier",
            CheckoutError::InvalidQuantity(_) => "Invalid quantity",
            CheckoutError::Provider(_) | CheckoutError::Unexpected(_) => {
                "Failed to create checkout session"
            }
        }
    }
}
