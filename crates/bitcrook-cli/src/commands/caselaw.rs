//! Caselaw search command implementation.

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Args};
use colored::Colorize;

use caselaw::endpoints::DEFAULT_ENDPOINT;
use caselaw::{CaselawClient, ClientConfig, Record};

use crate::output;

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("query").required(true).args(["term", "next"])))]
pub struct CaselawArgs {
    /// Search term (party names, citations or free text)
    pub term: Option<String>,

    /// Fetch the page behind a cursor printed by an earlier search
    #[arg(long, value_name = "CURSOR")]
    pub next: Option<String>,

    /// Case search API endpoint
    #[arg(long, env = "BITCROOK_CASELAW_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Print the raw response as JSON
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: CaselawArgs) -> Result<()> {
    let config = ClientConfig::with_endpoint(&args.endpoint).context("Invalid endpoint")?;
    let client = CaselawClient::new(config).context("Failed to create HTTP client")?;

    let response = match (&args.next, &args.term) {
        (Some(cursor), _) => client
            .fetch_page(cursor)
            .await
            .context("Failed to fetch results page")?,
        (None, Some(term)) => {
            eprintln!("{}", "Searching...".dimmed());
            client
                .search(term)
                .await
                .context("Failed to search cases")?
        }
        (None, None) => bail!("Either a search term or --next is required"),
    };

    if args.pretty {
        return output::json_pretty(&response);
    }
    if args.json {
        return output::json(&response);
    }

    if response.is_empty() {
        eprintln!("{}", "No cases found.".dimmed());
        return Ok(());
    }

    for record in &response.results {
        print_record(record);
        println!();
    }

    eprintln!("{}: {}", "Total matches".dimmed(), response.count);
    if let Some(next) = &response.next {
        eprintln!("{}: {}", "Next cursor".dimmed(), next);
    }

    Ok(())
}

fn print_record(record: &Record) {
    let title = if record.name_abbreviation.is_empty() {
        &record.name
    } else {
        &record.name_abbreviation
    };
    output::heading(title);

    let decided = record
        .decided_on()
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| record.decision_date.clone());
    output::field("Decided", &decided);
    output::field("Court", &record.court.name);
    output::field("Jurisdiction", &record.jurisdiction.name_long);
    if let Some(citation) = record.primary_citation() {
        output::field("Citation", &citation.cite);
    }
    output::field("Docket", &record.docket_number);
    output::field("URL", &record.frontend_url);
}
