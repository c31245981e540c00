//! Search service trait.

use async_trait::async_trait;

use crate::Result;
use crate::search::{Record, SearchRequest, SearchResult};

/// A pseudonym search service.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Send one search request and return the first match.
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult>;

    /// Build a request from a record and three keyword flags aligned with
    /// `name`, `surname`, `sid`, then send it.
    async fn submit_search(
        &self,
        record: Record,
        flags: [bool; 3],
        fuzzy: bool,
    ) -> Result<SearchResult> {
        let request = SearchRequest::from_flags(record, flags, fuzzy);
        self.search(&request).await
    }
}
