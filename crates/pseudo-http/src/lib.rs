//! pseudo-http - reqwest-backed clients for the search and management
//! services.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use pseudo_core::{ClientConfig, ManagementService, Record, SearchService, UserId};
//! use pseudo_http::{HttpManagementClient, HttpSearchClient};
//!
//! # async fn example() -> pseudo_core::Result<()> {
//! let config = ClientConfig::default();
//!
//! let search = HttpSearchClient::new(config.search_url.clone())?;
//! let result = search
//!     .submit_search(Record::new("Ada", "Lovelace", "s-1815"), [true, true, false], false)
//!     .await?;
//! println!("{}", result.match_metadata);
//!
//! let sink = Arc::new(|surface: pseudo_core::Surface, message: &str| {
//!     println!("[{surface}] {message}");
//! });
//! let management = HttpManagementClient::new(config.management_url.clone(), sink)?;
//! management.enroll(&UserId::from(42u64)).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod endpoints;
mod management;
mod search;

pub use client::HttpClient;
pub use management::HttpManagementClient;
pub use search::HttpSearchClient;
