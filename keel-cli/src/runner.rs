//! Boundary to the external migration-execution engine.
//!
//! Keel only ever generates pending migration pairs; applying them — and
//! tracking the currently applied version — belongs to whatever engine the
//! host wires in behind this trait. Each method maps to one engine operation.

use crate::error::CliResult;

/// The external engine that applies migration files and tracks versions.
pub trait MigrationRunner {
    /// Apply all pending migrations.
    fn up(&mut self) -> CliResult<()>;

    /// Roll back the most recent migration.
    fn down_one(&mut self) -> CliResult<()>;

    /// Roll back all applied migrations.
    fn clear(&mut self) -> CliResult<()>;

    /// Force the tracked version without running migrations.
    fn force(&mut self, version: i64) -> CliResult<()>;
}
