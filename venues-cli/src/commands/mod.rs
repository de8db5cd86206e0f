//! Command implementations, one module per subcommand.

pub mod create;
pub mod delete;
pub mod info;
pub mod input;
pub mod list;
pub mod search;
pub mod show;
pub mod stats;
pub mod types;
pub mod update;
pub mod validate;

use crate::cli::{Commands, TypesCommands};
use crate::context::CliContext;
use crate::error::CliResult;

/// Actor recorded on entities written by the CLI
pub const CLI_ACTOR: &str = "cli";

/// Run one parsed subcommand against the context.
pub async fn dispatch(ctx: &CliContext, command: Commands) -> CliResult<()> {
    match command {
        Commands::Info => info::run_info(ctx),
        Commands::Types { command } => match command {
            TypesCommands::List => types::run_list(ctx),
            TypesCommands::Show { slug } => types::run_show(ctx, &slug),
        },
        Commands::Create(args) => create::run_create(ctx, args).await,
        Commands::List(args) => list::run_list(ctx, args).await,
        Commands::Show { id, json } => show::run_show(ctx, &id, json).await,
        Commands::Update(args) => update::run_update(ctx, args).await,
        Commands::Delete { id, hard } => delete::run_delete(ctx, &id, hard).await,
        Commands::Search { query, json } => search::run_search(ctx, &query, json).await,
        Commands::Validate { file } => validate::run_validate(ctx, &file).await,
        Commands::Stats => stats::run_stats(ctx).await,
    }
}
