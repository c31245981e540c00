//! User-management operations and their displayable outcomes.

mod render;

use std::fmt;

use serde_json::Value;

use crate::types::UserId;

pub use render::render_value;

/// A named place where management outcome messages are displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Enrollment and revocation results.
    Results,
    /// System setup results.
    SetupResults,
}

impl Surface {
    /// Identifier of the display location.
    pub fn id(self) -> &'static str {
        match self {
            Surface::Results => "results",
            Surface::SetupResults => "setup-results",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One call against the management service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ManagementOperation {
    /// Roll a user out: `POST /enroll/{user_id}`.
    Enroll(UserId),
    /// Revoke a user: `POST /revoke?user_id={user_id}`.
    Revoke(UserId),
    /// Generate the system parameters: `POST /setup`.
    Setup,
}

impl ManagementOperation {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            ManagementOperation::Enroll(_) => "enroll",
            ManagementOperation::Revoke(_) => "revoke",
            ManagementOperation::Setup => "setup",
        }
    }

    /// Where the outcome of this operation is displayed.
    pub fn surface(&self) -> Surface {
        match self {
            ManagementOperation::Enroll(_) | ManagementOperation::Revoke(_) => Surface::Results,
            ManagementOperation::Setup => Surface::SetupResults,
        }
    }

    /// Message prefix for a successful call.
    pub fn success_prefix(&self) -> &'static str {
        // Wording is matched by existing consumers, typos included
        match self {
            ManagementOperation::Enroll(_) => "Enrollment was successfull",
            ManagementOperation::Revoke(_) => "Revokation was successfull",
            ManagementOperation::Setup => "Setup was successfull",
        }
    }

    /// The user this operation targets, if any.
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            ManagementOperation::Enroll(id) | ManagementOperation::Revoke(id) => Some(id),
            ManagementOperation::Setup => None,
        }
    }
}

impl fmt::Display for ManagementOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.user_id() {
            Some(id) => write!(f, "{} {}", self.name(), id),
            None => f.write_str(self.name()),
        }
    }
}

/// Result of a management call that reached the service.
#[derive(Clone, Debug, PartialEq)]
pub enum ManagementOutcome {
    /// 2xx response with its decoded JSON body.
    Success { value: Value },
    /// Non-2xx response with its raw text body.
    Failure {
        status: u16,
        status_text: String,
        body: String,
    },
}

impl ManagementOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ManagementOutcome::Success { .. })
    }

    /// The human-readable message for this outcome.
    ///
    /// Success renders as `"<prefix>: <value>"`; failure renders as the status
    /// phrase immediately followed by the body, with no separator.
    pub fn message(&self, operation: &ManagementOperation) -> String {
        match self {
            ManagementOutcome::Success { value } => {
                format!("{}: {}", operation.success_prefix(), render_value(value))
            }
            ManagementOutcome::Failure {
                status_text, body, ..
            } => format!("{}{}", status_text, body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn setup_success_message() {
        let outcome = ManagementOutcome::Success { value: json!("ok") };
        assert_eq!(
            outcome.message(&ManagementOperation::Setup),
            "Setup was successfull: ok"
        );
    }

    #[test]
    fn enroll_and_revoke_success_messages() {
        let outcome = ManagementOutcome::Success { value: json!(true) };
        assert_eq!(
            outcome.message(&ManagementOperation::Enroll("7".into())),
            "Enrollment was successfull: true"
        );
        assert_eq!(
            outcome.message(&ManagementOperation::Revoke("7".into())),
            "Revokation was successfull: true"
        );
    }

    #[test]
    fn failure_message_concatenates_status_and_body() {
        let outcome = ManagementOutcome::Failure {
            status: 404,
            status_text: "Not Found".to_string(),
            body: "not found".to_string(),
        };
        assert!(!outcome.is_success());
        assert_eq!(
            outcome.message(&ManagementOperation::Revoke("1".into())),
            "Not Foundnot found"
        );
    }

    #[test]
    fn surfaces() {
        assert_eq!(ManagementOperation::Enroll("1".into()).surface().id(), "results");
        assert_eq!(ManagementOperation::Revoke("1".into()).surface().id(), "results");
        assert_eq!(ManagementOperation::Setup.surface().id(), "setup-results");
    }

    #[test]
    fn display_names_target() {
        assert_eq!(ManagementOperation::Enroll(42u64.into()).to_string(), "enroll 42");
        assert_eq!(ManagementOperation::Setup.to_string(), "setup");
    }
}
