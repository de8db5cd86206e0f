//! `update <id>`

use colored::Colorize;
use minions_entity::{update_minion, Minion, MinionPatch};
use serde_json::{Map, Value};

use super::input::{parse_object, split_tags, supplied};
use super::CLI_ACTOR;
use crate::cli::UpdateArgs;
use crate::context::CliContext;
use crate::display::value_text;
use crate::error::{CliError, CliResult};

/// Shallow merge: keys in `data` replace existing ones, everything else is kept.
pub fn merge_fields(existing: &Map<String, Value>, data: Map<String, Value>) -> Map<String, Value> {
    let mut merged = existing.clone();
    merged.extend(data);
    merged
}

/// Patch holding only the supplied options, plus one change line per change.
/// Empty `--data`, `--title` and `--tags` values count as not supplied.
pub fn build_patch(existing: &Minion, args: UpdateArgs) -> CliResult<(MinionPatch, Vec<String>)> {
    let mut patch = MinionPatch::new().updated_by(CLI_ACTOR);
    let mut changes = Vec::new();

    if let Some(data) = supplied(args.data.as_deref()) {
        let data = parse_object(data, "--data")?;
        for (key, value) in &data {
            changes.push(format!("fields.{key} → {}", value_text(value)));
        }
        patch = patch.with_fields(merge_fields(&existing.fields, data));
    }
    if let Some(status) = args.status {
        changes.push(format!("status → {status}"));
        patch = patch.with_status(status);
    }
    if let Some(priority) = args.priority {
        changes.push(format!("priority → {priority}"));
        patch = patch.with_priority(priority);
    }
    if let Some(title) = supplied(args.title.as_deref()) {
        changes.push(format!("title → {title}"));
        patch = patch.with_title(title);
    }
    if let Some(tags) = supplied(args.tags.as_deref()) {
        let tags = split_tags(tags);
        changes.push(format!("tags → {}", tags.join(", ")));
        patch = patch.with_tags(tags);
    }
    Ok((patch, changes))
}

pub async fn run_update(ctx: &CliContext, args: UpdateArgs) -> CliResult<()> {
    let storage = ctx.storage().await?;
    let existing = storage
        .get(&args.id)
        .await?
        .ok_or_else(|| CliError::not_found(&args.id))?;

    let (patch, changes) = build_patch(&existing, args)?;
    if patch.is_empty() {
        tracing::debug!(id = %existing.id, "no attributes supplied, only updatedAt changes");
    }
    let updated = update_minion(&existing, patch);
    storage.set(&updated).await?;
    tracing::debug!(id = %updated.id, changes = changes.len(), "minion updated");

    println!();
    println!("  {} Updated {}", "✔".green(), updated.title.bold());
    for change in &changes {
        println!("    {}", change.dimmed());
    }
    println!();
    Ok(())
}
