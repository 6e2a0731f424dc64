//! CreateCheckoutSessionHandler - Command handler for starting a hosted checkout.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::catalog::Product;
use crate::domain::checkout::{
    CheckoutError, Quantity, RedirectUrls, CHECKOUT_CATEGORY, SHIPPING_COUNTRIES,
};
use crate::ports::{
    BillingAddressCollection, CheckoutMode, CheckoutSession, CheckoutSessionRequest, LineItem,
    PaymentMethodType, PaymentProvider, ProductCatalog,
};

/// Command to start a checkout for one pricing tier.
#[derive(Debug, Clone, Default)]
pub struct CreateCheckoutSessionCommand {
    pub tier: String,
    pub email: Option<String>,
    pub success_url: Option<String>,
    pub cancel_url: Option<String>,
    pub quantity: Option<i64>,
}

/// Result of successful checkout initiation.
#[derive(Debug, Clone)]
pub struct CreateCheckoutSessionResult {
    pub checkout_session: CheckoutSession,
    pub product: Product,
    pub quantity: Quantity,
}

/// Handler for starting a hosted checkout.
///
/// Resolves the tier, then asks the payment provider for a session. Nothing is
/// persisted; the provider owns the session from here on.
pub struct CreateCheckoutSessionHandler {
    catalog: Arc<dyn ProductCatalog>,
    payment_provider: Arc<dyn PaymentProvider>,
    base_url: String,
}

impl CreateCheckoutSessionHandler {
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

    pub async fn handle(
        &self,
        cmd: CreateCheckoutSessionCommand,
    ) -> Result<CreateCheckoutSessionResult, CheckoutError> {
        // 1. Resolve tier; other product lines are treated as unknown
        let product = match self.catalog.resolve(&cmd.tier) {
            Some(product) if product.is_in(CHECKOUT_CATEGORY) => product,
            Some(product) => {
                tracing::warn!(
                    tier = %cmd.tier,
                    category = %product.category,
                    "Checkout rejected: tier belongs to another product line"
                );
                return Err(CheckoutError::invalid_tier(cmd.tier));
            }
            None => {
                tracing::warn!(tier = %cmd.tier, "Checkout rejected: unknown tier");
                return Err(CheckoutError::invalid_tier(cmd.tier));
            }
        };

        // 2. Validate quantity
        let quantity = Quantity::from_optional(cmd.quantity).map_err(|e| {
            tracing::warn!(tier = %cmd.tier, quantity = ?cmd.quantity, "Checkout rejected: invalid quantity");
            e
        })?;

        // 3. Build the provider request
        let urls = RedirectUrls::resolve(&self.base_url, cmd.success_url, cmd.cancel_url);
        let request = build_session_request(&product, &cmd.tier, quantity, cmd.email, urls);

        // 4. Single provider attempt
        let checkout_session = self
            .payment_provider
            .create_checkout_session(request)
            .await
            .map_err(|e| {
                tracing::error!(
                    tier = %cmd.tier,
                    product_id = %product.id,
                    code = %e.code,
                    error = %e.message,
                    "Payment provider failed to create checkout session"
                );
                CheckoutError::from(e)
            })?;

        tracing::info!(
            session_id = %checkout_session.id,
            product_id = %product.id,
            quantity = quantity.get(),
            "Checkout session created"
        );

        Ok(CreateCheckoutSessionResult {
            checkout_session,
            product,
            quantity,
        })
    }
}

fn build_session_request(
    product: &Product,
    tier: &str,
    quantity: Quantity,
    email: Option<String>,
    urls: RedirectUrls,
) -> CheckoutSessionRequest {
    let mut metadata = BTreeMap::new();
    metadata.insert("product_id".to_string(), product.id.clone());
    metadata.insert("product_name".to_string(), product.name.clone());
    metadata.insert("category".to_string(), product.category.to_string());
    metadata.insert("tier".to_string(), tier.to_string());
    metadata.insert("quantity".to_string(), quantity.to_string());

    CheckoutSessionRequest {
        payment_method_types: vec![PaymentMethodType::Card],
        line_items: vec![LineItem {
            price: product.price_id.clone(),
            quantity: quantity.get(),
        }],
        mode: CheckoutMode::Payment,
        success_url: urls.success_url,
        cancel_url: urls.cancel_url,
        customer_email: email.filter(|e| !e.trim().is_empty()),
        metadata,
        allow_promotion_codes: true,
        billing_address_collection: BillingAddressCollection::Required,
        shipping_countries: SHIPPING_COUNTRIES.iter().map(|c| c.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::StaticProductCatalog;
    use crate::adapters::stripe::MockPaymentProvider;
    use crate::domain::catalog::ProductCategory;
    use crate::ports::{PaymentError, PaymentErrorCode};
    use proptest::prelude::*;

    const BASE_URL: &str = "https://cipherintel.io";

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn test_catalog() -> StaticProductCatalog {
        StaticProductCatalog::from_products([
            Product::new(
                "omnipanel-pro",
                "pro",
                "OmniPanel Pro",
                ProductCategory::OmniPanel,
                "price_123",
            ),
            Product::new(
                "cipher-strategy-session",
                "strategy-session",
                "Strategy Session",
                ProductCategory::Consulting,
                "price_consulting",
            ),
        ])
    }

    fn handler_with(provider: MockPaymentProvider) -> CreateCheckoutSessionHandler {
        CreateCheckoutSessionHandler::new(Arc::new(test_catalog()), Arc::new(provider), BASE_URL)
    }

    fn command(tier: &str) -> CreateCheckoutSessionCommand {
        CreateCheckoutSessionCommand {
            tier: tier.to_string(),
            ..Default::default()
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tier Validation
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn unknown_tier_is_rejected_without_provider_call() {
        let provider = MockPaymentProvider::new();
        let handler = handler_with(provider.clone());

        let result = handler.handle(command("unknown")).await;

        assert!(matches!(result, Err(CheckoutError::InvalidTier(t)) if t == "unknown"));
        assert!(!provider.was_called());
    }

    #[tokio::test]
    async fn tier_from_other_product_line_is_rejected() {
        let provider = MockPaymentProvider::new();
        let handler = handler_with(provider.clone());

        let result = handler.handle(command("strategy-session")).await;

        assert!(matches!(result, Err(CheckoutError::InvalidTier(_))));
        assert!(!provider.was_called());
    }

    #[tokio::test]
    async fn empty_tier_is_rejected() {
        let provider = MockPaymentProvider::new();
        let handler = handler_with(provider.clone());

        let result = handler.handle(command("")).await;

        assert!(matches!(result, Err(CheckoutError::InvalidTier(_))));
        assert_eq!(provider.call_count(), 0);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Quantity
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn omitted_quantity_is_one() {
        let provider = MockPaymentProvider::new();
        let handler = handler_with(provider.clone());

        let result = handler.handle(command("pro")).await.unwrap();

        assert_eq!(result.quantity, Quantity::ONE);
        let request = provider.last_request().unwrap();
        assert_eq!(request.line_items.len(), 1);
        assert_eq!(request.line_items[0].quantity, 1);
        assert_eq!(request.metadata["quantity"], "1");
    }

    #[tokio::test]
    async fn zero_quantity_is_rejected_without_provider_call() {
        let provider = MockPaymentProvider::new();
        let handler = handler_with(provider.clone());

        let cmd = CreateCheckoutSessionCommand {
            quantity: Some(0),
            ..command("pro")
        };
        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(CheckoutError::InvalidQuantity(0))));
        assert!(!provider.was_called());
    }

    #[tokio::test]
    async fn quantity_metadata_is_text() {
        let provider = MockPaymentProvider::new();
        let handler = handler_with(provider.clone());

        let cmd = CreateCheckoutSessionCommand {
            quantity: Some(3),
            ..command("pro")
        };
        handler.handle(cmd).await.unwrap();

        let request = provider.last_request().unwrap();
        assert_eq!(request.metadata["quantity"], "3");
        assert_eq!(request.line_items[0].quantity, 3);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Redirect URLs
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn omitted_urls_default_to_base_url() {
        let provider = MockPaymentProvider::new();
        let handler = handler_with(provider.clone());

        handler.handle(command("pro")).await.unwrap();

        let request = provider.last_request().unwrap();
        assert_eq!(
            request.success_url,
            "https://cipherintel.io/checkout/success?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(request.cancel_url, "https://cipherintel.io/pricing?checkout=cancelled");
    }

    #[tokio::test]
    async fn supplied_urls_are_forwarded() {
        let provider = MockPaymentProvider::new();
        let handler = handler_with(provider.clone());

        let cmd = CreateCheckoutSessionCommand {
            success_url: Some("https://cipherintel.io/thanks".to_string()),
            cancel_url: Some("https://cipherintel.io/back".to_string()),
            ..command("pro")
        };
        handler.handle(cmd).await.unwrap();

        let request = provider.last_request().unwrap();
        assert_eq!(request.success_url, "https://cipherintel.io/thanks");
        assert_eq!(request.cancel_url, "https://cipherintel.io/back");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Provider Request Shape
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn pro_tier_scenario_builds_expected_request() {
        let provider = MockPaymentProvider::new();
        provider.set_checkout_session(CheckoutSession {
            id: "cs_test_abc".to_string(),
            url: "https://checkout.stripe.com/c/pay/cs_test_abc".to_string(),
        });
        let handler = handler_with(provider.clone());

        let cmd = CreateCheckoutSessionCommand {
            tier: "pro".to_string(),
            email: Some("a@b.com".to_string()),
            quantity: Some(2),
            ..Default::default()
        };
        let result = handler.handle(cmd).await.unwrap();

        assert_eq!(result.checkout_session.id, "cs_test_abc");
        assert_eq!(
            result.checkout_session.url,
            "https://checkout.stripe.com/c/pay/cs_test_abc"
        );

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(
            request.line_items,
            vec![LineItem {
                price: "price_123".to_string(),
                quantity: 2
            }]
        );
        assert_eq!(request.payment_method_types, vec![PaymentMethodType::Card]);
        assert_eq!(request.mode, CheckoutMode::Payment);
        assert_eq!(request.customer_email.as_deref(), Some("a@b.com"));
        assert!(request.allow_promotion_codes);
        assert_eq!(
            request.billing_address_collection,
            BillingAddressCollection::Required
        );
        assert_eq!(request.shipping_countries.len(), SHIPPING_COUNTRIES.len());
        assert!(request.shipping_countries.contains(&"US".to_string()));
    }

    #[tokio::test]
    async fn metadata_describes_product() {
        let provider = MockPaymentProvider::new();
        let handler = handler_with(provider.clone());

        handler.handle(command("pro")).await.unwrap();

        let metadata = provider.last_request().unwrap().metadata;
        assert_eq!(metadata["product_id"], "omnipanel-pro");
        assert_eq!(metadata["product_name"], "OmniPanel Pro");
        assert_eq!(metadata["category"], "omnipanel");
        assert_eq!(metadata["tier"], "pro");
        assert_eq!(metadata.len(), 5);
    }

    #[tokio::test]
    async fn blank_email_is_not_forwarded() {
        let provider = MockPaymentProvider::new();
        let handler = handler_with(provider.clone());

        let cmd = CreateCheckoutSessionCommand {
            email: Some("  ".to_string()),
            ..command("pro")
        };
        handler.handle(cmd).await.unwrap();

        assert!(provider.last_request().unwrap().customer_email.is_none());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Provider Failures
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn provider_failure_is_reported_once_without_retry() {
        let provider = MockPaymentProvider::failing(PaymentError::network("connection reset"));
        let handler = handler_with(provider.clone());

        let result = handler.handle(command("pro")).await;

        match result {
            Err(CheckoutError::Provider(e)) => assert_eq!(e.code, PaymentErrorCode::NetworkError),
            other => panic!("expected provider error, got {:?}", other),
        }
        assert_eq!(provider.call_count(), 1);
    }

    proptest! {
        #[test]
        fn metadata_quantity_is_always_decimal_text(n in 1i64..=10_000) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let provider = MockPaymentProvider::new();
            let handler = handler_with(provider.clone());

            let cmd = CreateCheckoutSessionCommand { quantity: Some(n), ..command("pro") };
            runtime.block_on(handler.handle(cmd)).unwrap();

            let request = provider.last_request().unwrap();
            prop_assert_eq!(request.metadata["quantity"].clone(), n.to_string());
            prop_assert_eq!(i64::from(request.line_items[0].quantity), n);
        }
    }
}
