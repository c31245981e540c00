//! Management subcommand implementations.

mod enroll;
mod revoke;
mod setup;

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};

use pseudo_core::{ClientConfig, ManagementOperation, ManagementOutcome};
use pseudo_http::HttpManagementClient;

use crate::output::{self, TerminalSink};

#[derive(Args, Debug)]
pub struct ManageCommand {
    #[command(subcommand)]
    pub command: ManageSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ManageSubcommand {
    /// Enroll a user so it can request pseudonyms
    Enroll(enroll::EnrollArgs),

    /// Revoke a user's access
    Revoke(revoke::RevokeArgs),

    /// Generate the system parameters
    Setup(setup::SetupArgs),
}

pub async fn handle(cmd: ManageCommand, config: &ClientConfig) -> Result<()> {
    let client = HttpManagementClient::new(config.management_url.clone(), Arc::new(TerminalSink))
        .context("Failed to create management client")?;

    match cmd.command {
        ManageSubcommand::Enroll(args) => enroll::run(args, &client).await,
        ManageSubcommand::Revoke(args) => revoke::run(args, &client).await,
        ManageSubcommand::Setup(args) => setup::run(args, &client).await,
    }
}

/// Turn a rejected call into a non-zero exit. The message itself was already
/// displayed by the sink.
fn check(operation: &ManagementOperation, outcome: ManagementOutcome) -> Result<()> {
    match outcome {
        ManagementOutcome::Success { .. } => Ok(()),
        ManagementOutcome::Failure { status, .. } => {
            output::error(&format!("{} was rejected", operation));
            bail!("management service answered HTTP {}", status)
        }
    }
}
