//! Command dispatch.
//!
//! The host application owns `main`, the database handles, and the execution
//! engine; it hands them over in a [`MigrationContext`] and forwards parsed
//! arguments here. Only `create` runs the diff engine — everything else is a
//! pass-through to the external runner.

use std::time::Instant;

use keel_migrate::{Dialect, Migrator, ScriptWriter, SchemaInspector};
use keel_schema::StaticModels;

use crate::cli::{Cli, Command, CreateArgs};
use crate::config::Config;
use crate::error::CliResult;
use crate::output;
use crate::runner::MigrationRunner;

/// Everything a command needs: the live connection's inspector, the external
/// execution engine, the declared models, and configuration.
pub struct MigrationContext<I, R> {
    /// Live-schema inspector wrapping the host's connection.
    pub inspector: I,
    /// External migration-execution engine.
    pub runner: R,
    /// Declared models, also consulted for dependency auto-discovery.
    pub models: StaticModels,
    /// Loaded configuration.
    pub config: Config,
}

impl<I: SchemaInspector, R: MigrationRunner> MigrationContext<I, R> {
    /// Bundle the host's collaborators into a context.
    pub fn new(inspector: I, runner: R, models: StaticModels, config: Config) -> Self {
        Self {
            inspector,
            runner,
            models,
            config,
        }
    }
}

/// Load configuration honoring the `--config` override.
pub fn load_config(cli: &Cli) -> CliResult<Config> {
    match &cli.config {
        Some(path) => Config::load(path),
        None => Config::load_or_default(std::path::Path::new(crate::config::CONFIG_FILE_NAME)),
    }
}

/// Run the parsed command against the context.
pub fn run<I: SchemaInspector, R: MigrationRunner>(
    cli: Cli,
    ctx: &mut MigrationContext<I, R>,
) -> CliResult<()> {
    let started = Instant::now();

    match &cli.command {
        Command::Up => ctx.runner.up()?,
        Command::Down => ctx.runner.down_one()?,
        Command::Clear => ctx.runner.clear()?,
        Command::Force(args) => ctx.runner.force(args.version)?,
        Command::Create(args) => create(ctx, args)?,
    }

    output::info(&format!("finished after {:?}", started.elapsed()));
    Ok(())
}

/// Diff the declared models and persist the resulting pair, if any.
fn create<I: SchemaInspector, R>(
    ctx: &mut MigrationContext<I, R>,
    args: &CreateArgs,
) -> CliResult<()> {
    let MigrationContext {
        inspector,
        models,
        config,
        ..
    } = ctx;

    let dialect = Dialect::parse(&config.database.provider)?;
    let targets = models.targets();

    let mut migrator = Migrator::new(dialect, &mut *inspector, &*models);
    let script = migrator.auto_migrate(targets)?;

    if script.is_empty() {
        output::info("no schema changes detected");
        return Ok(());
    }

    let dir = args
        .dir
        .clone()
        .unwrap_or_else(|| config.migrations.dir.clone());
    let writer = ScriptWriter::new(dir);
    match writer.write(&args.name, &script)? {
        Some(pair) => {
            output::success(&format!("migration '{}' created", args.name));
            output::kv("up", &pair.up.display().to_string());
            output::kv("down", &pair.down.display().to_string());
        }
        None => output::info("no schema changes detected"),
    }

    Ok(())
}
