//! Validated identifier and address types.

mod service_url;
mod user_id;

pub use service_url::ServiceUrl;
pub use user_id::UserId;
