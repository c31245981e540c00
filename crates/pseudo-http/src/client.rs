//! Shared HTTP client plumbing.

use reqwest::{Response, Url};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use pseudo_core::error::{Error, ProtocolError, TransportError};
use pseudo_core::{Result, ServiceUrl};

use crate::endpoints::ErrorDetailResponse;

/// HTTP client bound to one service base URL.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base: ServiceUrl,
}

impl HttpClient {
    /// Create a new client for the given service.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the TLS backend cannot be initialised.
    pub fn new(base: ServiceUrl) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pseudo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport_error)?;

        Ok(Self::with_client(client, base))
    }

    /// Create a client on top of an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, base: ServiceUrl) -> Self {
        Self { client, base }
    }

    /// Returns the service URL this client is configured for.
    pub fn base(&self) -> &ServiceUrl {
        &self.base
    }

    /// POST a JSON body and decode a JSON response.
    ///
    /// Non-2xx responses become [`ProtocolError::Status`].
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn post_json<B, R>(&self, segments: &[&str], body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(segments);
        debug!(%url, "POST (json)");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            decode_json(response).await
        } else {
            Err(Error::Protocol(parse_error_response(response).await))
        }
    }

    /// POST with no body and hand back the raw response, whatever its status.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn post_empty(&self, url: Url, query: &[(&str, &str)]) -> Result<Response> {
        debug!(%url, "POST");

        let mut request = self.client.post(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(transport_error)?;
        trace!(status = %response.status(), "response");
        Ok(response)
    }
}

/// Read a response body and decode it as JSON.
///
/// A failed body read is a transport error; a body that is not JSON is a
/// decode error.
pub(crate) async fn decode_json<R: DeserializeOwned>(response: Response) -> Result<R> {
    let text = response.text().await.map_err(transport_error)?;
    Ok(serde_json::from_str(&text)?)
}

/// Read a response body as plain text.
pub(crate) async fn read_text(response: Response) -> Result<String> {
    response.text().await.map_err(transport_error)
}

/// The reason phrase the response carried.
///
/// hyper only keeps the phrase from the status line when it differs from the
/// canonical one, so the canonical phrase fills in otherwise. A status with
/// neither yields an empty string.
pub(crate) fn status_text(response: &Response) -> String {
    match response.extensions().get::<hyper::ext::ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let message = err.to_string();
    let err = if err.is_timeout() {
        TransportError::Timeout { message }
    } else if err.is_connect() {
        TransportError::Connection { message }
    } else {
        TransportError::Http { message }
    };
    Error::Transport(err)
}

async fn parse_error_response(response: Response) -> ProtocolError {
    let status = response.status().as_u16();

    // Try the services' {"detail": ..} error format
    let detail = match response.json::<ErrorDetailResponse>().await {
        Ok(body) => body.into_message(),
        Err(_) => None,
    };

    ProtocolError::Status { status, detail }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let base = ServiceUrl::new("http://localhost:9090").unwrap();
        let client = HttpClient::new(base.clone()).unwrap();
        assert_eq!(client.base(), &base);
    }
}
