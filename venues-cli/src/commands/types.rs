//! `types list` and `types show`.

use colored::Colorize;

use crate::context::CliContext;
use crate::display::colored_kind;
use crate::error::CliResult;

pub fn run_list(ctx: &CliContext) -> CliResult<()> {
    println!();
    println!(
        "  {}",
        format!("{} MinionTypes available:", ctx.registry().len()).bold()
    );
    println!();
    for t in ctx.registry().types() {
        println!(
            "  {}  {} {}",
            t.icon,
            t.name.bold(),
            format!("({})", t.slug).dimmed()
        );
        if !t.description.is_empty() {
            println!("     {}", t.description.dimmed());
        }
        println!(
            "     {}",
            format!("{} fields: {}", t.schema.len(), t.field_names().join(", ")).dimmed()
        );
        println!();
    }
    Ok(())
}

pub fn run_show(ctx: &CliContext, slug: &str) -> CliResult<()> {
    let t = ctx.find_type(slug)?;

    println!();
    println!("  {}  {}", t.icon, t.name.bold());
    if !t.description.is_empty() {
        println!("  {}", t.description.dimmed());
    }
    println!();
    println!("  {} {}", "ID:".dimmed(), t.id);
    println!("  {} {}", "Slug:".dimmed(), t.slug);
    println!();
    println!("  {}", "Fields:".bold());
    println!();
    for field in &t.schema {
        let marker = if field.required { "*".red() } else { " ".normal() };
        let description = field
            .description
            .as_deref()
            .map(|d| format!(" {}", d.dimmed()))
            .unwrap_or_default();
        println!(
            "    {} {}  {}{}",
            marker,
            field.name,
            colored_kind(field.kind),
            description
        );
        if !field.options.is_empty() {
            println!("        {}", field.options.join(" | ").dimmed());
        }
    }
    println!();
    Ok(())
}
