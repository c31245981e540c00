//! Search service client.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use pseudo_core::{Result, SearchRequest, SearchResult, SearchService, ServiceUrl};

use crate::client::HttpClient;
use crate::endpoints::REQUEST_PSEUDONYM;

/// Client for the pseudonym search service.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: HttpClient,
}

impl HttpSearchClient {
    /// Create a search client for the given service URL.
    pub fn new(base: ServiceUrl) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(base)?,
        })
    }

    /// Create a search client that reuses an existing HTTP client.
    pub fn with_client(client: HttpClient) -> Self {
        Self { client }
    }

    /// Returns the service URL for this client.
    pub fn url(&self) -> &ServiceUrl {
        self.client.base()
    }
}

#[async_trait]
impl SearchService for HttpSearchClient {
    #[instrument(skip(self, request), fields(keywords = ?request.keywords.names(), fuzzy = request.is_fuzzy))]
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult> {
        debug!("Requesting pseudonym");

        let response: Value = self.client.post_json(&[REQUEST_PSEUDONYM], request).await?;
        let result = SearchResult::from_response(response)?;

        debug!("Search returned a match");
        Ok(result)
    }
}
