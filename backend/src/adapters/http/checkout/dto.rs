//! HTTP DTOs (Data Transfer Objects) for checkout endpoints.
//!
//! These types define the JSON request/response structure for the checkout API.
//! Field names are camelCase to match the storefront client.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::application::CreateCheckoutSessionCommand;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a checkout session.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutRequest {
    /// Pricing tier identifier. A missing or non-string tier resolves to nothing.
    #[serde(default, deserialize_with = "tier_or_empty")]
    pub tier: String,
    /// Customer email for pre-fill and receipts.
    #[serde(default)]
    pub email: Option<String>,
    /// URL to redirect after successful checkout.
    #[serde(default)]
    pub success_url: Option<String>,
    /// URL to redirect after cancelled checkout.
    #[serde(default)]
    pub cancel_url: Option<String>,
    /// Units to purchase (defaults to 1).
    #[serde(default)]
    pub quantity: Option<i64>,
}

/// Accept any JSON value for the tier; only strings can name a product.
fn tier_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(tier) => Ok(tier),
        _ => Ok(String::new()),
    }
}

impl From<CreateCheckoutRequest> for CreateCheckoutSessionCommand {
    fn from(request: CreateCheckoutRequest) -> Self {
        Self {
            tier: request.tier,
            email: request.email,
            success_url: request.success_url,
            cancel_url: request.cancel_url,
            quantity: request.quantity,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a created checkout session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    /// Provider session ID.
    pub session_id: String,
    /// Hosted checkout URL to redirect the customer to.
    pub url: String,
}

/// Uniform error payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Liveness probe payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_camel_case() {
        let json = r#"{
            "tier": "pro",
            "email": "a@b.com",
            "successUrl": "https://cipherintel.io/ok",
            "cancelUrl": "https://cipherintel.io/no",
            "quantity": 2
        }"#;
        let request: CreateCheckoutRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.tier, "pro");
        assert_eq!(request.success_url.as_deref(), Some("https://cipherintel.io/ok"));
        assert_eq!(request.cancel_url.as_deref(), Some("https://cipherintel.io/no"));
        assert_eq!(request.quantity, Some(2));
    }

    #[test]
    fn request_optional_fields_default() {
        let request: CreateCheckoutRequest = serde_json::from_str(r#"{"tier":"pro"}"#).unwrap();
        assert!(request.email.is_none());
        assert!(request.success_url.is_none());
        assert!(request.quantity.is_none());
    }

    #[test]
    fn request_without_tier_deserializes_to_empty_tier() {
        let request: CreateCheckoutRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.tier, "");
    }

    #[test]
    fn request_with_non_string_tier_deserializes_to_empty_tier() {
        for body in [r#"{"tier":null}"#, r#"{"tier":42}"#, r#"{"tier":["pro"]}"#] {
            let request: CreateCheckoutRequest = serde_json::from_str(body).unwrap();
            assert_eq!(request.tier, "", "body: {}", body);
        }
    }

    #[test]
    fn request_rejects_non_numeric_quantity() {
        let result = serde_json::from_str::<CreateCheckoutRequest>(r#"{"tier":"pro","quantity":"two"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn request_converts_to_command() {
        let request = CreateCheckoutRequest {
            tier: "pro".to_string(),
            quantity: Some(4),
            ..Default::default()
        };
        let cmd = CreateCheckoutSessionCommand::from(request);
        assert_eq!(cmd.tier, "pro");
        assert_eq!(cmd.quantity, Some(4));
    }

    #[test]
    fn checkout_response_serializes_camel_case() {
        let response = CheckoutResponse {
            session_id: "cs_123".to_string(),
            url: "https://checkout.stripe.com/c/pay/cs_123".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["sessionId"], "cs_123");
        assert_eq!(json["url"], "https://checkout.stripe.com/c/pay/cs_123");
    }

    #[test]
    fn error_response_has_single_field() {
        let json = serde_json::to_value(ErrorResponse::new("Invalid pricing tier")).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Invalid pricing tier"}));
    }
}
