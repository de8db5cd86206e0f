use colored::Colorize;
use venues_sdk::{DESCRIPTION, PROJECT_NAME};

use crate::context::CliContext;
use crate::error::CliResult;

/// Print static project metadata. Never touches storage.
pub fn run_info(ctx: &CliContext) -> CliResult<()> {
    println!();
    println!("  {}", PROJECT_NAME.bold());
    println!("  {}", DESCRIPTION.dimmed());
    println!();
    println!("  {}    {}", "SDK:".dimmed(), "venues-sdk".cyan());
    println!("  {}    {}", "CLI:".dimmed(), "venues-cli".cyan());
    println!("  {}{}", "Version: ".dimmed(), ctx.client().version());
    println!("  {}  {}", "Store:".dimmed(), ctx.store_dir().display());
    println!("  {}  {}", "Types:".dimmed(), ctx.registry().len());
    println!();
    Ok(())
}
