//! Service base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated base URL of a backend service.
///
/// Only absolute `http` and `https` URLs with a host are accepted. The
/// backends are usually reached over plain HTTP inside a private network, so
/// unlike a public API base URL, `http` is allowed for any host.
///
/// # Example
///
/// ```
/// use pseudo_core::ServiceUrl;
///
/// let search = ServiceUrl::new("http://localhost:9090/").unwrap();
/// assert_eq!(search.as_str(), "http://localhost:9090");
/// assert_eq!(
///     search.endpoint(&["requestPseudonym"]).as_str(),
///     "http://localhost:9090/requestPseudonym"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServiceUrl {
    url: Url,
    base: String,
}

impl ServiceUrl {
    /// Create a new service URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ServiceUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Query and fragment make no sense on a base URL
        let mut url = url;
        url.set_query(None);
        url.set_fragment(None);

        let base = url.as_str().trim_end_matches('/').to_string();

        Ok(Self { url, base })
    }

    /// Returns the URL of an endpoint below this base.
    ///
    /// Each segment is appended as one path segment and percent-encoded, so a
    /// segment containing `/` or `?` cannot escape its position.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.url.clone();
        // Infallible: validation rejected cannot-be-a-base URLs
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Returns the base URL as a string, without a trailing slash.
    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.url
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: format!("unsupported scheme '{}'", scheme),
            }
            .into());
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ServiceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)
    }
}

impl FromStr for ServiceUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ServiceUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.base)
    }
}

impl<'de> Deserialize<'de> for ServiceUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ServiceUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ServiceUrl {
    fn as_ref(&self) -> &str {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_http_url() {
        let url = ServiceUrl::new("http://localhost:8080").unwrap();
        assert_eq!(url.host(), Some("localhost"));
        assert_eq!(url.as_str(), "http://localhost:8080");
    }

    #[test]
    fn http_allowed_for_any_host() {
        let url = ServiceUrl::new("http://user-manager:8080").unwrap();
        assert_eq!(url.host(), Some("user-manager"));
    }

    #[test]
    fn normalizes_trailing_slash() {
        let url = ServiceUrl::new("https://um.example.org/").unwrap();
        assert_eq!(url.as_str(), "https://um.example.org");
        assert_eq!(url.to_string(), "https://um.example.org");
    }

    #[test]
    fn endpoint_construction() {
        let url = ServiceUrl::new("http://localhost:8080").unwrap();
        assert_eq!(
            url.endpoint(&["enroll", "42"]).as_str(),
            "http://localhost:8080/enroll/42"
        );
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let url = ServiceUrl::new("https://gateway.example/um/").unwrap();
        assert_eq!(
            url.endpoint(&["setup"]).as_str(),
            "https://gateway.example/um/setup"
        );
    }

    #[test]
    fn endpoint_encodes_segments() {
        let url = ServiceUrl::new("http://localhost:8080").unwrap();
        assert_eq!(
            url.endpoint(&["enroll", "a/b?c"]).as_str(),
            "http://localhost:8080/enroll/a%2Fb%3Fc"
        );
    }

    #[test]
    fn drops_query_and_fragment() {
        let url = ServiceUrl::new("http://localhost:9090/?x=1#top").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9090");
    }

    #[test]
    fn invalid_scheme() {
        assert!(ServiceUrl::new("ftp://localhost").is_err());
        assert!(ServiceUrl::new("file:///tmp/x").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ServiceUrl::new("/setup").is_err());
    }

    #[test]
    fn serde_round_trip_validates() {
        let url: ServiceUrl = serde_json::from_str(r#""http://localhost:9090/""#).unwrap();
        assert_eq!(serde_json::to_string(&url).unwrap(), r#""http://localhost:9090""#);
        assert!(serde_json::from_str::<ServiceUrl>(r#""mailto:x@y""#).is_err());
    }
}
