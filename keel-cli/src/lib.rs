//! # keel-cli
//!
//! Command dispatch for Keel migrations: `up`, `down`, `clear`,
//! `force <version>`, and `create <name>`.
//!
//! This crate is a library by design. The host application owns `main`, the
//! database connection, and the migration-execution engine; it parses
//! arguments with [`cli::Cli`], bundles its collaborators into a
//! [`commands::MigrationContext`], and calls [`commands::run`]:
//!
//! ```rust,ignore
//! use clap::Parser;
//! use keel_cli::{cli::Cli, commands, config::Config};
//!
//! fn main() {
//!     let cli = Cli::parse();
//!     let config = commands::load_config(&cli).unwrap_or_default();
//!     let mut ctx = commands::MigrationContext::new(inspector, runner, models, config);
//!     if let Err(e) = commands::run(cli, &mut ctx) {
//!         keel_cli::output::error(&e.to_string());
//!         std::process::exit(1);
//!     }
//! }
//! ```
//!
//! Only `create` touches the diff engine; the other commands pass through to
//! the external runner, which alone tracks applied-version state.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod runner;

// Re-exports
pub use cli::{Cli, Command, CreateArgs, ForceArgs};
pub use commands::{MigrationContext, load_config, run};
pub use config::{CONFIG_FILE_NAME, Config, DatabaseConfig, MigrationsConfig};
pub use error::{CliError, CliResult};
pub use runner::MigrationRunner;
