//! Management service trait.

use async_trait::async_trait;

use crate::Result;
use crate::management::{ManagementOperation, ManagementOutcome};
use crate::types::UserId;

/// A user-management service.
///
/// Implementations display every outcome that reaches them on the
/// operation's [`Surface`](crate::Surface), then return it. Transport and
/// decode failures are returned as `Err` and display nothing.
#[async_trait]
pub trait ManagementService: Send + Sync {
    /// Run one management operation.
    async fn execute(&self, operation: ManagementOperation) -> Result<ManagementOutcome>;

    /// Enroll a user.
    async fn enroll(&self, user_id: &UserId) -> Result<ManagementOutcome> {
        self.execute(ManagementOperation::Enroll(user_id.clone()))
            .await
    }

    /// Revoke a user.
    async fn revoke(&self, user_id: &UserId) -> Result<ManagementOutcome> {
        self.execute(ManagementOperation::Revoke(user_id.clone()))
            .await
    }

    /// Run the system setup.
    async fn setup(&self) -> Result<ManagementOutcome> {
        self.execute(ManagementOperation::Setup).await
    }
}
