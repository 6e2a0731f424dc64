//! Stripe-specific wire types.
//!
//! These types represent Stripe API objects as they arrive over the wire, plus
//! the form encoding Stripe expects for request bodies.

use serde::{Deserialize, Serialize};

use crate::ports::CheckoutSessionRequest;

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// Stripe Checkout Session object (the fields we read).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeCheckoutSession {
    /// Session ID (cs_...).
    pub id: String,

    /// Hosted checkout URL. Absent once the session is complete or expired.
    #[serde(default)]
    pub url: Option<String>,

    /// Whether the session was created with a live key.
    #[serde(default)]
    pub livemode: bool,
}

/// Stripe error envelope: `{"error": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorEnvelope {
    pub error: StripeErrorBody,
}

/// Stripe error details.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorBody {
    /// Short machine-readable code (resource_missing, ...).
    pub code: Option<String>,

    /// Human-readable message.
    pub message: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Request Encoding
// ════════════════════════════════════════════════════════════════════════════════

/// Encode a checkout session request as Stripe form parameters.
///
/// Stripe takes nested objects and arrays as bracketed keys, e.g.
/// `line_items[0][price]`.
pub fn encode_checkout_form(request: &CheckoutSessionRequest) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = Vec::new();

    for (i, method) in request.payment_method_types.iter().enumerate() {
        params.push((
            format!("payment_method_types[{}]", i),
            method.as_str().to_string(),
        ));
    }

    for (i, item) in request.line_items.iter().enumerate() {
        params.push((format!("line_items[{}][price]", i), item.price.clone()));
        params.push((
            format!("line_items[{}][quantity]", i),
            item.quantity.to_string(),
        ));
    }

    params.push(("mode".to_string(), request.mode.as_str().to_string()));
    params.push(("success_url".to_string(), request.success_url.clone()));
    params.push(("cancel_url".to_string(), request.cancel_url.clone()));

    if let Some(email) = &request.customer_email {
        params.push(("customer_email".to_string(), email.clone()));
    }

    for (key, value) in &request.metadata {
        params.push((format!("metadata[{}]", key), value.clone()));
    }

    params.push((
        "allow_promotion_codes".to_string(),
        request.allow_promotion_codes.to_string(),
    ));
    params.push((
        "billing_address_collection".to_string(),
        request.billing_address_collection.as_str().to_string(),
    ));

    for (i, country) in request.shipping_countries.iter().enumerate() {
        params.push((
            format!("shipping_address_collection[allowed_countries][{}]", i),
            country.clone(),
        ));
    }

    params
}
