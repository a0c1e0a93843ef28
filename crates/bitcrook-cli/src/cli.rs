//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::caselaw::CaselawArgs;

/// Open-source intelligence lookups against public record APIs.
#[derive(Parser, Debug)]
#[command(name = "bitcrook")]
#[command(author, version = crate::VERSION, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search court records on the Caselaw Access Project
    Caselaw(CaselawArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_caselaw_search() {
        let cli = Cli::try_parse_from(["bitcrook", "-vv", "caselaw", "privacy", "--json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Caselaw(args) = cli.command;
        assert_eq!(args.term.as_deref(), Some("privacy"));
        assert!(args.json);
    }

    #[test]
    fn term_or_next_is_required() {
        assert!(Cli::try_parse_from(["bitcrook", "caselaw"]).is_err());
        assert!(Cli::try_parse_from(["bitcrook", "caselaw", "--next", "https://x/"]).is_ok());
    }
}
