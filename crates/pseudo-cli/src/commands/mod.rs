//! Subcommand implementations.

pub mod manage;
pub mod search;
