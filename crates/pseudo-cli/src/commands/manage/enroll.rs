//! Enroll command implementation.

use anyhow::{Context, Result};
use clap::Args;

use pseudo_core::{ManagementOperation, ManagementService, UserId};
use pseudo_http::HttpManagementClient;

#[derive(Args, Debug)]
pub struct EnrollArgs {
    /// Identifier of the user to enroll
    pub user_id: String,
}

pub async fn run(args: EnrollArgs, client: &HttpManagementClient) -> Result<()> {
    let user_id = UserId::new(args.user_id);
    let outcome = client
        .enroll(&user_id)
        .await
        .context("Failed to enroll user")?;

    super::check(&ManagementOperation::Enroll(user_id), outcome)
}
