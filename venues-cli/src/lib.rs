//! Venues CLI
//!
//! The `venues` binary maps subcommands onto the entity operations and
//! file storage from `minions-entity`, using the venue types declared in
//! `venues-sdk`.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Any error (unknown type, not found, malformed input, failed validation, I/O)

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod display;
pub mod error;

pub use cli::{Cli, Commands, TypesCommands};
pub use config::StoreConfig;
pub use context::CliContext;
pub use error::{result_to_exit, CliError, CliResult};

/// Build the context for a parsed command line and run it.
pub async fn run(cli: Cli) -> CliResult<()> {
    let store = StoreConfig::from_env(cli.store);
    let ctx = CliContext::new(store, cli.debug)?;
    commands::dispatch(&ctx, cli.command).await
}
