use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use cipher_checkout::adapters::http::{build_app, serve, CheckoutAppState};
use cipher_checkout::adapters::{StaticProductCatalog, StripeConfig, StripePaymentAdapter};
use cipher_checkout::config::{AppConfig, PaymentConfig, ServerConfig};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        tracing::error!(error = %format!("{error:#}"), "Checkout service exited with error");
        eprintln!("cipher-checkout: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.server)?;

    config.validate().context("invalid configuration")?;
    info!(
        environment = ?config.server.environment,
        stripe_test_mode = config.payment.is_test_mode(),
        "Configuration loaded"
    );

    let catalog = StaticProductCatalog::builtin();
    info!(products = catalog.len(), "Product catalog ready");

    let payment_provider = StripePaymentAdapter::new(stripe_config(&config.payment))
        .context("failed to build Stripe client")?;
    let state = CheckoutAppState::new(
        Arc::new(catalog),
        Arc::new(payment_provider),
        config.site.base_url(),
    );

    let app = build_app(state, &config.server);
    let addr = config.server.socket_addr()?;
    serve(app, addr).await.context("HTTP server failed")?;

    Ok(())
}

fn stripe_config(payment: &PaymentConfig) -> StripeConfig {
    StripeConfig::new(payment.stripe_api_key.clone())
        .with_base_url(payment.stripe_api_base_url.clone())
        .with_timeout(payment.request_timeout())
}

/// Install the global subscriber. `RUST_LOG` overrides the configured filter.
fn init_tracing(server: &ServerConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .context("invalid log filter")?;

    let registry = tracing_subscriber::registry().with(env_filter);

    // JSON lines in production for the log shipper
    if server.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .try_init()?;
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn stripe_config_carries_payment_settings() {
        let payment = PaymentConfig {
            stripe_api_key: "sk_test_abcd1234".to_string(),
            stripe_api_base_url: "http://127.0.0.1:12111/".to_string(),
            request_timeout_secs: 5,
        };

        let stripe = stripe_config(&payment);
        assert!(stripe.is_test_mode());
        assert_eq!(stripe.api_base_url(), "http://127.0.0.1:12111");
        assert_eq!(stripe.timeout(), Duration::from_secs(5));
    }
}
