//! Declared column descriptors.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A column as declared by a model.
///
/// The `db_type` string is the literal database type and may carry a
/// parenthesized size suffix (`varchar(255)`, `decimal(10,2)`); the diff
/// engine inspects that suffix when deciding whether a live column needs
/// altering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column name.
    pub name: SmolStr,
    /// Literal database type string.
    pub db_type: String,
    /// Declared size (e.g. varchar length).
    pub size: Option<u32>,
    /// Declared decimal precision.
    pub precision: Option<u32>,
    /// Whether the column rejects NULL.
    pub not_null: bool,
    /// Whether the column carries a UNIQUE constraint.
    pub unique: bool,
    /// Whether the column is part of the primary key.
    pub primary_key: bool,
    /// Default value expression.
    pub default: Option<String>,
    /// Column comment.
    pub comment: Option<String>,
    /// Excluded from generated DDL entirely.
    pub skip_migration: bool,
}

impl ColumnDef {
    /// Create a new column with a name and database type.
    pub fn new(name: impl Into<SmolStr>, db_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            db_type: db_type.into(),
            size: None,
            precision: None,
            not_null: false,
            unique: false,
            primary_key: false,
            default: None,
            comment: None,
            skip_migration: false,
        }
    }

    /// Set the declared size.
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the declared decimal precision.
    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Mark the column NOT NULL.
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Mark the column UNIQUE.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Mark the column as (part of) the primary key.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Set the default value expression.
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the column comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Exclude the column from generated DDL.
    pub fn skip_migration(mut self) -> Self {
        self.skip_migration = true;
        self
    }

    /// Get the column name as a string.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
