//! Setup command implementation.

use anyhow::{Context, Result};
use clap::Args;

use pseudo_core::{ManagementOperation, ManagementService};
use pseudo_http::HttpManagementClient;

#[derive(Args, Debug)]
pub struct SetupArgs {}

pub async fn run(_args: SetupArgs, client: &HttpManagementClient) -> Result<()> {
    let outcome = client.setup().await.context("Failed to run setup")?;
    super::check(&ManagementOperation::Setup, outcome)
}
