//! Client configuration.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::types::ServiceUrl;

/// Default base URL of the search (pseudonym request) service.
pub const DEFAULT_SEARCH_URL: &str = "http://localhost:9090";

/// Default base URL of the user-management service.
pub const DEFAULT_MANAGEMENT_URL: &str = "http://localhost:8080";

/// Base URLs of the two backend services.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Search service base URL.
    pub search_url: ServiceUrl,
    /// Management service base URL.
    pub management_url: ServiceUrl,
}

impl ClientConfig {
    /// Build a configuration from two URL strings.
    ///
    /// # Errors
    ///
    /// Returns an error if either URL fails [`ServiceUrl`] validation.
    pub fn new(search_url: impl AsRef<str>, management_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            search_url: ServiceUrl::new(search_url)?,
            management_url: ServiceUrl::new(management_url)?,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            search_url: ServiceUrl::new(DEFAULT_SEARCH_URL)
                .unwrap_or_else(|e| unreachable!("default search URL is valid: {e}")),
            management_url: ServiceUrl::new(DEFAULT_MANAGEMENT_URL)
                .unwrap_or_else(|e| unreachable!("default management URL is valid: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_localhost() {
        let config = ClientConfig::default();
        assert_eq!(config.search_url.as_str(), "http://localhost:9090");
        assert_eq!(config.management_url.as_str(), "http://localhost:8080");
    }

    #[test]
    fn rejects_invalid_url() {
        assert!(ClientConfig::new("not a url", DEFAULT_MANAGEMENT_URL).is_err());
    }

    #[test]
    fn deserializes_from_json() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"search_url":"http://client:9090/","management_url":"https://um.example"}"#,
        )
        .unwrap();
        assert_eq!(config.search_url.as_str(), "http://client:9090");
        assert_eq!(config.management_url.as_str(), "https://um.example");
    }
}
