//! Post-checkout redirect targets.

/// Path appended to the site base URL when no success URL is supplied.
///
/// `{CHECKOUT_SESSION_ID}` is substituted by the payment provider.
pub const DEFAULT_SUCCESS_PATH: &str = "/checkout/success?session_id={CHECKOUT_SESSION_ID}";

/// Path appended to the site base URL when no cancel URL is supplied.
pub const DEFAULT_CANCEL_PATH: &str = "/pricing?checkout=cancelled";

/// Where the provider sends the customer after checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectUrls {
    pub success_url: String,
    pub cancel_url: String,
}

impl RedirectUrls {
    /// Uses caller URLs where given and falls back to `base_url` + default paths.
    ///
    /// Blank caller URLs count as absent.
    pub fn resolve(
        base_url: &str,
        success_url: Option<String>,
        cancel_url: Option<String>,
    ) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            success_url: non_blank(success_url)
                .unwrap_or_else(|| format!("{}{}", base, DEFAULT_SUCCESS_PATH)),
            cancel_url: non_blank(cancel_url)
                .unwrap_or_else(|| format!("{}{}", base, DEFAULT_CANCEL_PATH)),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_base_url_plus_fixed_paths() {
        let urls = RedirectUrls::resolve("https://cipherintel.io", None, None);
        assert_eq!(
            urls.success_url,
            "https://cipherintel.io/checkout/success?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(urls.cancel_url, "https://cipherintel.io/pricing?checkout=cancelled");
    }

    #[test]
    fn trailing_slash_on_base_is_trimmed() {
        let urls = RedirectUrls::resolve("https://cipherintel.io/", None, None);
        assert_eq!(urls.cancel_url, "https://cipherintel.io/pricing?checkout=cancelled");
    }

    #[test]
    fn caller_urls_win() {
        let urls = RedirectUrls::resolve(
            "https://cipherintel.io",
            Some("https://example.com/ok".to_string()),
            Some("https://example.com/no".to_string()),
        );
        assert_eq!(urls.success_url, "https://example.com/ok");
        assert_eq!(urls.cancel_url, "https://example.com/no");
    }

    #[test]
    fn blank_caller_url_falls_back() {
        let urls = RedirectUrls::resolve(
            "https://cipherintel.io",
            Some("   ".to_string()),
            Some("https://example.com/no".to_string()),
        );
        assert!(urls.success_url.starts_with("https://cipherintel.io/checkout/success"));
        assert_eq!(urls.cancel_url, "https://example.com/no");
    }
}
