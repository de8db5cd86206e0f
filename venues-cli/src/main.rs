//! `venues` - manage Oktoberfest venue minions from the command line.

use std::io::{self, IsTerminal};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use venues_cli::{result_to_exit, run, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new(
            "venues=debug,venues_cli=debug,venues_sdk=debug,minions_entity=debug,minions_fields=debug",
        )
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let exit_code = result_to_exit(run(cli).await);
    std::process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use venues_cli::Commands;

    #[test]
    fn test_cli_parsing_requires_subcommand() {
        assert!(Cli::try_parse_from(["venues"]).is_err());
    }

    #[test]
    fn test_cli_parsing_debug() {
        let cli = Cli::parse_from(["venues", "--debug", "info"]);
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Info));
    }

    #[test]
    fn test_cli_parsing_search() {
        let cli = Cli::parse_from(["venues", "search", "hofbräu festzelt", "--json"]);
        match cli.command {
            Commands::Search { query, json } => {
                assert_eq!(query, "hofbräu festzelt");
                assert!(json);
            }
            _ => panic!("Expected Search command"),
        }
    }
}
