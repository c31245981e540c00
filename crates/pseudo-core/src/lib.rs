//! pseudo-core - Core types and traits for the pseudonym search and
//! user-management clients.
//!
//! This crate does no I/O. It defines the request and response model shared
//! by every client, the unified [`Error`] type, and the traits that network
//! implementations (see `pseudo-http`) provide.

pub mod config;
pub mod error;
pub mod management;
pub mod search;
pub mod traits;
pub mod types;

pub use config::ClientConfig;
pub use error::Error;
pub use management::{ManagementOperation, ManagementOutcome, Surface};
pub use search::{KeywordField, KeywordSelection, Record, SearchRequest, SearchResult};
pub use traits::{ManagementService, OutputSink, SearchService};
pub use types::{ServiceUrl, UserId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
