use colored::Colorize;

use crate::context::CliContext;
use crate::display::{print_json, print_summary};
use crate::error::CliResult;

pub async fn run_search(ctx: &CliContext, query: &str, json: bool) -> CliResult<()> {
    let results = ctx.storage().await?.search(query).await?;
    tracing::debug!(query, hits = results.len(), "search finished");

    if json {
        print_json(&results)?;
        return Ok(());
    }

    if results.is_empty() {
        println!("{}", format!("\n  No results for \"{query}\".\n").dimmed());
        return Ok(());
    }

    println!();
    println!("  {}", format!("{} result(s) for \"{query}\":", results.len()).bold());
    println!();
    for minion in &results {
        print_summary(ctx.registry(), minion);
    }
    println!();
    Ok(())
}
