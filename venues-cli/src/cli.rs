//! CLI definition for the `venues` command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use minions_entity::{MinionPriority, MinionStatus};

/// Tent definitions, capacities, reservation rules, and opening schedules for Oktoberfest
#[derive(Parser, Debug)]
#[command(name = "venues")]
#[command(version)]
#[command(
    about = "Tent definitions, capacities, reservation rules, and opening schedules for Oktoberfest"
)]
pub struct Cli {
    /// Enable debug logging to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Storage root directory (overrides MINIONS_STORE)
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show project info
    Info,
    /// Inspect MinionType schemas
    Types {
        #[command(subcommand)]
        command: TypesCommands,
    },
    /// Create a new Minion of the specified type
    Create(CreateArgs),
    /// List all Minions, optionally filtered by type
    #[command(visible_alias = "ls")]
    List(ListArgs),
    /// Show a Minion by ID
    Show {
        /// Minion ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update fields on an existing Minion
    Update(UpdateArgs),
    /// Soft-delete a Minion (set deletedAt timestamp)
    Delete {
        /// Minion ID
        id: String,
        /// Permanently remove the file from disk
        #[arg(long)]
        hard: bool,
    },
    /// Full-text search across all Minions
    Search {
        /// Search terms; every term must match
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a JSON file against its MinionType schema
    Validate {
        /// Path to a Minion JSON document
        file: PathBuf,
    },
    /// Show statistics about stored Minions
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum TypesCommands {
    /// List all available MinionTypes
    #[command(visible_alias = "ls")]
    List,
    /// Show detailed schema for a MinionType
    Show {
        /// Type slug, e.g. tent
        slug: String,
    },
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Type slug, e.g. tent
    #[arg(value_name = "TYPE")]
    pub type_slug: String,
    /// Field data as JSON string
    #[arg(short, long, value_name = "JSON")]
    pub data: Option<String>,
    /// Read field data from a JSON file (takes precedence over --data)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Minion title
    #[arg(short, long)]
    pub title: Option<String>,
    /// Status: active, todo, in_progress, completed, cancelled
    #[arg(short, long)]
    pub status: Option<MinionStatus>,
    /// Priority: low, medium, high, urgent
    #[arg(short, long)]
    pub priority: Option<MinionPriority>,
    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list Minions of this type slug
    #[arg(value_name = "TYPE")]
    pub type_slug: Option<String>,
    /// Filter by status
    #[arg(long)]
    pub status: Option<MinionStatus>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
    /// Max results
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Minion ID
    pub id: String,
    /// Fields to update as JSON (merged over existing fields)
    #[arg(short, long, value_name = "JSON")]
    pub data: Option<String>,
    /// Update status
    #[arg(short, long)]
    pub status: Option<MinionStatus>,
    /// Update priority
    #[arg(short, long)]
    pub priority: Option<MinionPriority>,
    /// Update title
    #[arg(short, long)]
    pub title: Option<String>,
    /// Replace tags (comma-separated)
    #[arg(long)]
    pub tags: Option<String>,
}
