//! Search command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use pseudo_core::{ClientConfig, Record, SearchService};
use pseudo_http::HttpSearchClient;

use crate::output;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// First name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Surname
    #[arg(long, default_value = "")]
    pub surname: String,

    /// Student/subject identifier
    #[arg(long, default_value = "")]
    pub sid: String,

    /// Use the first name as a search keyword
    #[arg(long)]
    pub name_keyword: bool,

    /// Use the surname as a search keyword
    #[arg(long)]
    pub surname_keyword: bool,

    /// Use the identifier as a search keyword
    #[arg(long)]
    pub sid_keyword: bool,

    /// Tolerate approximate keyword matches
    #[arg(long)]
    pub fuzzy: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl SearchArgs {
    pub fn record(&self) -> Record {
        Record::new(&self.name, &self.surname, &self.sid)
    }

    /// Keyword flags in record key order.
    pub fn keyword_flags(&self) -> [bool; 3] {
        [self.name_keyword, self.surname_keyword, self.sid_keyword]
    }
}

pub async fn run(args: SearchArgs, config: &ClientConfig) -> Result<()> {
    let client = HttpSearchClient::new(config.search_url.clone())
        .context("Failed to create search client")?;

    eprintln!("{}", "Requesting pseudonym...".dimmed());

    let result = client
        .submit_search(args.record(), args.keyword_flags(), args.fuzzy)
        .await
        .context("Search request failed")?;

    if args.pretty {
        output::json_pretty(&result)?;
    } else {
        output::json(&result)?;
    }
    output::success("Search completed");

    Ok(())
}
