//! Revoke command implementation.

use anyhow::{Context, Result};
use clap::Args;

use pseudo_core::{ManagementOperation, ManagementService, UserId};
use pseudo_http::HttpManagementClient;

#[derive(Args, Debug)]
pub struct RevokeArgs {
    /// Identifier of the user to revoke
    pub user_id: String,
}

pub async fn run(args: RevokeArgs, client: &HttpManagementClient) -> Result<()> {
    let user_id = UserId::new(args.user_id);
    let outcome = client
        .revoke(&user_id)
        .await
        .context("Failed to revoke user")?;

    super::check(&ManagementOperation::Revoke(user_id), outcome)
}
