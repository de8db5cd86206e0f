//! `show <id>`

use colored::Colorize;
use minions_entity::Minion;
use minions_fields::TypeRegistry;

use crate::context::CliContext;
use crate::display::{print_json, type_label, value_text};
use crate::error::{CliError, CliResult};

/// Lines of the human-readable detail view.
pub fn detail_lines(registry: &TypeRegistry, minion: &Minion) -> Vec<String> {
    let (icon, slug) = type_label(registry, minion);
    let status = minion.status.map(|s| s.as_str()).unwrap_or("-");
    let priority = minion.priority.map(|p| p.as_str()).unwrap_or("-");

    let mut lines = vec![
        format!("  {}  {}", icon, minion.title.bold()),
        format!("  {} {}  {} {}", "Type:".dimmed(), slug, "ID:".dimmed(), minion.id),
        format!(
            "  {} {}  {} {}",
            "Status:".dimmed(),
            status,
            "Priority:".dimmed(),
            priority
        ),
        format!(
            "  {} {}  {} {}",
            "Created:".dimmed(),
            minion.created_at.to_rfc3339(),
            "Updated:".dimmed(),
            minion.updated_at.to_rfc3339()
        ),
    ];
    if !minion.tags.is_empty() {
        lines.push(format!("  {} {}", "Tags:".dimmed(), minion.tags.join(", ")));
    }
    if let Some(description) = &minion.description {
        lines.push(format!("  {} {}", "Description:".dimmed(), description));
    }
    if let Some(deleted_at) = minion.deleted_at {
        let by = minion.deleted_by.as_deref().unwrap_or("unknown");
        lines.push(
            format!("  Deleted: {} by {}", deleted_at.to_rfc3339(), by)
                .red()
                .to_string(),
        );
    }
    lines.push(String::new());
    lines.push(format!("  {}", "Fields:".bold()));
    for (key, value) in &minion.fields {
        lines.push(format!("    {} {}", format!("{key}:").dimmed(), value_text(value)));
    }
    lines
}

pub async fn run_show(ctx: &CliContext, id: &str, json: bool) -> CliResult<()> {
    let minion = ctx
        .storage()
        .await?
        .get(id)
        .await?
        .ok_or_else(|| CliError::not_found(id))?;

    if json {
        print_json(&minion)?;
        return Ok(());
    }

    println!();
    for line in detail_lines(ctx.registry(), &minion) {
        println!("{line}");
    }
    println!();
    Ok(())
}
