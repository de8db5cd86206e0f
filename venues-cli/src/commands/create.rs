//! `create <type>`

use colored::Colorize;
use minions_entity::{create_minion, CreateMinionInput, MinionStatus};
use minions_fields::MinionType;
use serde_json::{Map, Value};

use super::input::{load_fields, split_tags, supplied};
use super::CLI_ACTOR;
use crate::cli::CreateArgs;
use crate::context::CliContext;
use crate::error::CliResult;

/// Title precedence: explicit title, then the `title` field, then `name`, then the type name.
/// Empty strings are skipped at every step.
pub fn derive_title(
    explicit: Option<&str>,
    fields: &Map<String, Value>,
    minion_type: &MinionType,
) -> String {
    supplied(explicit)
        .map(String::from)
        .or_else(|| string_field(fields, "title"))
        .or_else(|| string_field(fields, "name"))
        .unwrap_or_else(|| minion_type.name.clone())
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    supplied(fields.get(key).and_then(Value::as_str)).map(String::from)
}

pub async fn run_create(ctx: &CliContext, args: CreateArgs) -> CliResult<()> {
    let minion_type = ctx.find_type(&args.type_slug)?;
    let fields = load_fields(args.data.as_deref(), args.file.as_deref()).await?;
    let title = derive_title(args.title.as_deref(), &fields, minion_type);
    let tags = supplied(args.tags.as_deref())
        .map(split_tags)
        .unwrap_or_default();

    let input = CreateMinionInput::new(title)
        .with_fields(fields)
        .with_status(args.status.unwrap_or(MinionStatus::Active))
        .with_priority(args.priority)
        .with_tags(tags)
        .created_by(CLI_ACTOR);

    let (minion, validation) = create_minion(input, minion_type);
    if !validation.valid {
        for e in &validation.errors {
            tracing::warn!(field = %e.field, "{}", e.message);
        }
    }

    let storage = ctx.storage().await?;
    storage.set(&minion).await?;
    tracing::debug!(id = %minion.id, type_id = %minion_type.id, "minion created");

    println!();
    println!(
        "  {}",
        format!("✔ Created {} {}", minion_type.icon, minion_type.name).green()
    );
    println!("  {}    {}", "ID:".dimmed(), minion.id);
    println!("  {} {}", "Title:".dimmed(), minion.title);
    println!(
        "  {}  {}",
        "Path:".dimmed(),
        minion.shard_path(ctx.store_dir())?.display()
    );
    println!();
    Ok(())
}
