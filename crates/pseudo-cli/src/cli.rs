//! CLI argument definitions.

use clap::{Parser, Subcommand};

use pseudo_core::config::{DEFAULT_MANAGEMENT_URL, DEFAULT_SEARCH_URL};

use crate::commands::manage::ManageCommand;
use crate::commands::search::SearchArgs;

/// Request pseudonyms and manage users of the searchable-encryption vault.
#[derive(Parser, Debug)]
#[command(name = "pseudo")]
#[command(
    author,
    version = env!("PSEUDO_VERSION"),
    long_version = concat!(env!("PSEUDO_VERSION"), " (commit ", env!("PSEUDO_COMMIT"), ")"),
    about,
    long_about = None
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Search service base URL
    #[arg(long, global = true, env = "PSEUDO_SEARCH_URL", default_value = DEFAULT_SEARCH_URL)]
    pub search_url: String,

    /// Management service base URL
    #[arg(long, global = true, env = "PSEUDO_MANAGEMENT_URL", default_value = DEFAULT_MANAGEMENT_URL)]
    pub management_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Request a pseudonym for a record
    Search(SearchArgs),

    /// User management operations
    Manage(ManageCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn long_version_names_commit() {
        let long = Cli::command().render_long_version();
        assert!(long.contains(env!("PSEUDO_VERSION")));
        assert!(long.contains(concat!("(commit ", env!("PSEUDO_COMMIT"), ")")));
    }

    #[test]
    fn parses_search_flags() {
        let cli = Cli::try_parse_from([
            "pseudo",
            "search",
            "--name",
            "A",
            "--sid",
            "C",
            "--name-keyword",
            "--sid-keyword",
            "--fuzzy",
        ])
        .unwrap();

        let Commands::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.keyword_flags(), [true, false, true]);
        assert!(args.fuzzy);
        assert_eq!(args.record().surname, "");
    }

    #[test]
    fn global_url_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pseudo",
            "manage",
            "setup",
            "--management-url",
            "http://um:8080",
        ])
        .unwrap();
        assert_eq!(cli.management_url, "http://um:8080");
    }
}
