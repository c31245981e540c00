//! Endpoint paths and wire types.

use serde::Deserialize;
use serde_json::Value;

/// Search service: request a pseudonym for a record.
pub const REQUEST_PSEUDONYM: &str = "requestPseudonym";

/// Management service: enroll a user, `/enroll/{user_id}`.
pub const ENROLL: &str = "enroll";

/// Management service: revoke a user, `/revoke?user_id=..`.
pub const REVOKE: &str = "revoke";

/// Management service: generate system parameters.
pub const SETUP: &str = "setup";

/// Query parameter carrying the user for revocation.
pub const USER_ID_PARAM: &str = "user_id";

/// Error body raised by the services, `{"detail": ..}`.
///
/// `detail` is usually a string, but validation failures carry a list of
/// objects.
#[derive(Debug, Deserialize)]
pub struct ErrorDetailResponse {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorDetailResponse {
    pub fn into_message(self) -> Option<String> {
        match self.detail? {
            Value::String(s) => Some(s),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}
