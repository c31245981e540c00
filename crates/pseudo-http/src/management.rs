//! User-management service client.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use pseudo_core::{
    ManagementOperation, ManagementOutcome, ManagementService, OutputSink, Result, ServiceUrl,
};

use crate::client::{HttpClient, decode_json, read_text, status_text};
use crate::endpoints::{ENROLL, REVOKE, SETUP, USER_ID_PARAM};

/// Client for the user-management service.
///
/// Every outcome is written to the injected [`OutputSink`].
#[derive(Clone)]
pub struct HttpManagementClient {
    client: HttpClient,
    sink: Arc<dyn OutputSink>,
}

impl HttpManagementClient {
    /// Create a management client for the given service URL.
    pub fn new(base: ServiceUrl, sink: Arc<dyn OutputSink>) -> Result<Self> {
        Ok(Self::with_client(HttpClient::new(base)?, sink))
    }

    /// Create a management client that reuses an existing HTTP client.
    pub fn with_client(client: HttpClient, sink: Arc<dyn OutputSink>) -> Self {
        Self { client, sink }
    }

    /// Returns the service URL for this client.
    pub fn url(&self) -> &ServiceUrl {
        self.client.base()
    }

    async fn send(&self, operation: &ManagementOperation) -> Result<reqwest::Response> {
        let base = self.client.base();
        match operation {
            ManagementOperation::Enroll(user_id) => {
                let url = base.endpoint(&[ENROLL, user_id.as_str()]);
                self.client.post_empty(url, &[]).await
            }
            ManagementOperation::Revoke(user_id) => {
                let url = base.endpoint(&[REVOKE]);
                self.client
                    .post_empty(url, &[(USER_ID_PARAM, user_id.as_str())])
                    .await
            }
            ManagementOperation::Setup => {
                let url = base.endpoint(&[SETUP]);
                self.client.post_empty(url, &[]).await
            }
        }
    }
}

#[async_trait]
impl ManagementService for HttpManagementClient {
    #[instrument(skip(self, operation), fields(%operation))]
    async fn execute(&self, operation: ManagementOperation) -> Result<ManagementOutcome> {
        let response = self.send(&operation).await?;
        let status = response.status();

        let outcome = if status.is_success() {
            let value: Value = decode_json(response).await?;
            info!(status = status.as_u16(), "Management call succeeded");
            ManagementOutcome::Success { value }
        } else {
            let status_text = status_text(&response);
            let body = read_text(response).await?;
            warn!(status = status.as_u16(), %status_text, "Management call rejected");
            ManagementOutcome::Failure {
                status: status.as_u16(),
                status_text,
                body,
            }
        };

        let surface = operation.surface();
        debug!(%surface, "Displaying outcome");
        self.sink.display(surface, &outcome.message(&operation));

        Ok(outcome)
    }
}

impl fmt::Debug for HttpManagementClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpManagementClient")
            .field("client", &self.client)
            .field("sink", &"<dyn OutputSink>")
            .finish()
    }
}
