//! `stats`

use colored::Colorize;
use minions_entity::{StorageAdapter, StorageFilter};
use minions_fields::{MinionType, TypeRegistry};

use crate::context::CliContext;
use crate::display::bar;
use crate::error::CliResult;

/// Live entity count per registered type, in registry order.
pub async fn count_by_type<'a>(
    storage: &dyn StorageAdapter,
    registry: &'a TypeRegistry,
) -> CliResult<Vec<(&'a MinionType, usize)>> {
    let mut counts = Vec::with_capacity(registry.len());
    for t in registry.types() {
        let n = storage.list(&StorageFilter::new().with_type(t.id.clone())).await?.len();
        counts.push((t, n));
    }
    Ok(counts)
}

pub async fn run_stats(ctx: &CliContext) -> CliResult<()> {
    let counts = count_by_type(ctx.storage().await?, ctx.registry()).await?;
    let total: usize = counts.iter().map(|(_, n)| n).sum();

    println!();
    println!("  {}", "Minion Statistics:".bold());
    println!();
    for (t, n) in &counts {
        println!("  {}  {:<22} {:>4}  {}", t.icon, t.name, n, bar(*n));
    }
    println!();
    println!("  {} {} Minion(s)", "Total:".bold(), total);
    println!("  {} {}", "Store:".dimmed(), ctx.store_dir().display());
    println!();
    Ok(())
}
