//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Keel - reversible schema migrations
#[derive(Parser, Debug)]
#[command(name = "keel")]
#[command(version)]
#[command(about = "Keel - reversible schema migrations", long_about = None)]
pub struct Cli {
    /// Path to the configuration file (defaults to keel.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply all pending migrations
    Up,

    /// Roll back the most recent migration
    Down,

    /// Roll back all applied migrations
    Clear,

    /// Force the tracked version without running migrations
    Force(ForceArgs),

    /// Diff declared models against the database and write a migration pair
    Create(CreateArgs),
}

/// Arguments for the `force` command
#[derive(Args, Debug)]
pub struct ForceArgs {
    /// Version to force
    pub version: i64,
}

/// Arguments for the `create` command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name for the generated migration
    pub name: String,

    /// Override the migrations directory
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}
