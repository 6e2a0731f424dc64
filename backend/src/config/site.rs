//! Public site configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Public site configuration
///
/// The base URL is the origin that default checkout redirects point back to.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// Public origin of the marketing site, e.g. `https://cipherintel.io`
    #[serde(default)]
    pub base_url: String,
}

impl SiteConfig {
    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validate site configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("SITE_BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if *environment == Environment::Production && !self.base_url.starts_with("https://") {
            return Err(ValidationError::BaseUrlMustBeHttps);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(url: &str) -> SiteConfig {
        SiteConfig {
            base_url: url.to_string(),
        }
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        assert_eq!(site("https://cipherintel.io/").base_url(), "https://cipherintel.io");
        assert_eq!(site("https://cipherintel.io").base_url(), "https://cipherintel.io");
    }

    #[test]
    fn test_validation_missing_base_url() {
        assert_eq!(
            site("").validate(&Environment::Development),
            Err(ValidationError::MissingRequired("SITE_BASE_URL"))
        );
    }

    #[test]
    fn test_validation_rejects_non_http_scheme() {
        assert_eq!(
            site("ftp://cipherintel.io").validate(&Environment::Development),
            Err(ValidationError::InvalidBaseUrl)
        );
    }

    #[test]
    fn test_http_allowed_outside_production() {
        assert!(site("http://localhost:4321")
            .validate(&Environment::Development)
            .is_ok());
    }

    #[test]
    fn test_production_requires_https() {
        assert_eq!(
            site("http://cipherintel.io").validate(&Environment::Production),
            Err(ValidationError::BaseUrlMustBeHttps)
        );
        assert!(site("https://cipherintel.io")
            .validate(&Environment::Production)
            .is_ok());
    }
}
