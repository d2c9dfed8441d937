//! Live-schema inspection boundary.
//!
//! The queries themselves live with the database driver; the engine only
//! consumes their results through [`SchemaInspector`]. Every method is a
//! single synchronous query against the run's exclusively owned connection —
//! the diff never overlaps schema queries, and results are fetched fresh on
//! every run (the live schema may have changed in between).

use crate::error::MigrateResult;

/// A column as reported by database introspection.
///
/// Structurally comparable to a declared column, but sourced from the
/// database. Attributes an engine does not report stay `None` and are then
/// exempt from change detection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveColumn {
    /// Column name.
    pub name: String,
    /// Raw database type name (e.g. `varchar(255)`, `int4`).
    pub type_name: String,
    /// Reported length.
    pub length: Option<u32>,
    /// Reported decimal precision.
    pub precision: Option<u32>,
    /// Whether the column accepts NULL.
    pub nullable: Option<bool>,
    /// Whether the column carries a UNIQUE constraint.
    pub unique: Option<bool>,
    /// Reported default value expression.
    pub default: Option<String>,
    /// Column comment.
    pub comment: Option<String>,
}

impl LiveColumn {
    /// Create a live column with a name and type; everything else unreported.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            ..Self::default()
        }
    }
}

/// Answers questions about the current structure of the database.
///
/// Implementations wrap a live connection and run one introspection query per
/// call (information-schema lookups or the engine's equivalent). Failures
/// abort the whole diff run; the engine never continues past a failed query.
pub trait SchemaInspector {
    /// Whether `table` exists as a base table.
    fn table_exists(&mut self, table: &str) -> MigrateResult<bool>;

    /// Names of all base tables in the current schema.
    fn table_names(&mut self) -> MigrateResult<Vec<String>>;

    /// Columns of `table`.
    fn columns(&mut self, table: &str) -> MigrateResult<Vec<LiveColumn>>;

    /// Names of the indexes on `table`.
    fn index_names(&mut self, table: &str) -> MigrateResult<Vec<String>>;
}

impl<I: SchemaInspector + ?Sized> SchemaInspector for &mut I {
    fn table_exists(&mut self, table: &str) -> MigrateResult<bool> {
        (**self).table_exists(table)
    }

    fn table_names(&mut self) -> MigrateResult<Vec<String>> {
        (**self).table_names()
    }

    fn columns(&mut self, table: &str) -> MigrateResult<Vec<LiveColumn>> {
        (**self).columns(table)
    }

    fn index_names(&mut self, table: &str) -> MigrateResult<Vec<String>> {
        (**self).index_names(table)
    }
}
