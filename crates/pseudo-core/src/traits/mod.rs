//! Core traits for the search and management services.

mod management;
mod output;
mod search;

pub use management::ManagementService;
pub use output::{OutputSink, RecordingSink};
pub use search::SearchService;
