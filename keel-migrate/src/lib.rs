//! # keel-migrate
//!
//! The Keel diff-and-plan engine: compares declared table models against the
//! live structure of a relational database and generates one reversible
//! migration — a paired forward ("up") and reverse ("down") SQL script.
//!
//! ```text
//! ┌──────────────┐     ┌────────────────┐     ┌──────────────┐
//! │ Model defs   │────▶│ Dependency     │────▶│ Schema       │
//! │ (keel-schema)│     │ ordering       │     │ differ       │
//! └──────────────┘     └────────────────┘     └──────┬───────┘
//!                                                    │
//!        ┌────────────────┐     ┌────────────────┐   │
//!        │ Live schema    │────▶│ Column change  │◀──┤
//!        │ inspector      │     │ detection      │   │
//!        └────────────────┘     └────────────────┘   ▼
//!                              ┌────────────────┐  ┌──────────────┐
//!                              │ Script writer  │◀─│ DDL builder  │
//!                              │ (up/down pair) │  │ (templates)  │
//!                              └────────────────┘  └──────────────┘
//! ```
//!
//! The engine only ever *generates* a pending migration pair; applying
//! migrations and tracking the currently applied version is the job of an
//! external execution engine consuming the written files. Likewise the
//! introspection queries themselves live with the database driver, behind
//! [`SchemaInspector`].
//!
//! A run is synchronous and strictly sequential: one introspection query at a
//! time against a connection the run exclusively owns.
//!
//! ## Example
//!
//! ```rust,ignore
//! use keel_migrate::{Dialect, Migrator, ScriptWriter};
//! use keel_schema::{ColumnDef, ModelDef};
//!
//! let users = ModelDef::new("users")
//!     .column(ColumnDef::new("id", "bigserial").primary_key())
//!     .column(ColumnDef::new("email", "varchar(255)").size(255).not_null());
//!
//! let mut migrator = Migrator::new(Dialect::Postgres, inspector, ());
//! let script = migrator.auto_migrate(vec![users.into()])?;
//!
//! // Empty scripts mean "already in sync" and write no files.
//! let writer = ScriptWriter::new("migrations/sql");
//! if let Some(pair) = writer.write("create_users", &script)? {
//!     println!("wrote {}", pair.up.display());
//! }
//! ```

pub mod change;
pub mod diff;
pub mod error;
pub mod file;
pub mod inspect;
pub mod order;
pub mod sql;

// Re-exports
pub use diff::{MigrationScript, Migrator, MigratorOptions};
pub use error::{MigrateResult, MigrationError};
pub use file::{DEFAULT_MIGRATIONS_DIR, ScriptEntry, ScriptPair, ScriptWriter, parse_script_name};
pub use inspect::{LiveColumn, SchemaInspector};
pub use order::reorder_models;
pub use sql::{Dialect, SqlArg, StatementBuilder};
