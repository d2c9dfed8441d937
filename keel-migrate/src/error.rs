//! Error types for the migration engine.

use thiserror::Error;

/// Result type alias for migration operations.
pub type MigrateResult<T> = Result<T, MigrationError>;

/// Errors that can occur while diffing or packaging migrations.
///
/// Nearly every failure aborts the whole run: a partial migration file is
/// worse than no file. A run that finds no differences is not an error — it
/// yields an empty script.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// File system error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A live-schema query failed.
    #[error("Introspection failed: {0}")]
    Introspection(String),

    /// A named column was not found in the model's column list.
    #[error("No column named '{column}' in model for table '{table}'")]
    UnknownColumn {
        /// Table whose model was consulted.
        table: String,
        /// The missing column.
        column: String,
    },

    /// No DDL mapping exists for the requested database engine.
    #[error("Unsupported database dialect: {0}")]
    UnsupportedDialect(String),

    /// Invalid migration name or file format.
    #[error("Invalid migration: {0}")]
    InvalidMigration(String),
}

impl MigrationError {
    /// Create an introspection error.
    pub fn introspection(msg: impl Into<String>) -> Self {
        Self::Introspection(msg.into())
    }

    /// Create an unknown-column error.
    pub fn unknown_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Create an invalid-migration error.
    pub fn invalid_migration(msg: impl Into<String>) -> Self {
        Self::InvalidMigration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_column_display() {
        let err = MigrationError::unknown_column("users", "emial");
        let msg = err.to_string();
        assert!(msg.contains("users"));
        assert!(msg.contains("emial"));
    }

    #[test]
    fn test_unsupported_dialect_display() {
        let err = MigrationError::UnsupportedDialect("oracle".to_string());
        assert!(err.to_string().contains("oracle"));
    }
}
