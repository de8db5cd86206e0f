//! `list [type]`

use colored::Colorize;
use minions_entity::StorageFilter;

use crate::cli::ListArgs;
use crate::context::CliContext;
use crate::display::{print_json, print_summary};
use crate::error::CliResult;

/// Build the storage filter for the given arguments; resolves the type slug.
pub fn build_filter(ctx: &CliContext, args: &ListArgs) -> CliResult<StorageFilter> {
    let mut filter = StorageFilter::new();
    if let Some(slug) = &args.type_slug {
        filter = filter.with_type(ctx.find_type(slug)?.id.clone());
    }
    if let Some(status) = args.status {
        filter = filter.with_status(status);
    }
    if let Some(limit) = args.limit {
        filter = filter.with_limit(usize::try_from(limit).unwrap_or(usize::MAX));
    }
    Ok(filter)
}

pub async fn run_list(ctx: &CliContext, args: ListArgs) -> CliResult<()> {
    let filter = build_filter(ctx, &args)?;
    let minions = ctx.storage().await?.list(&filter).await?;

    if args.json {
        print_json(&minions)?;
        return Ok(());
    }

    if minions.is_empty() {
        println!("{}", "\n  No Minions found.\n".dimmed());
        return Ok(());
    }

    println!();
    for minion in &minions {
        print_summary(ctx.registry(), minion);
    }
    println!();
    Ok(())
}
