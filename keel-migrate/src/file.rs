//! Migration file packaging.
//!
//! A non-empty script pair is persisted as two flat files,
//! `<version>_<name>.up.sql` and `<version>_<name>.down.sql`, in the
//! migrations directory the external execution engine consumes. An empty
//! pair writes nothing.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use crate::diff::MigrationScript;
use crate::error::{MigrateResult, MigrationError};

/// Default migrations directory, relative to the working directory.
pub const DEFAULT_MIGRATIONS_DIR: &str = "migrations/sql";

/// Paths of a written migration pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptPair {
    /// Version stamp shared by both files.
    pub version: String,
    /// Migration name.
    pub name: String,
    /// Path of the up script.
    pub up: PathBuf,
    /// Path of the down script.
    pub down: PathBuf,
}

/// A migration pair found on disk.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScriptEntry {
    /// Version stamp.
    pub version: String,
    /// Migration name.
    pub name: String,
}

/// Writes migration script pairs into a directory.
#[derive(Debug, Clone)]
pub struct ScriptWriter {
    dir: PathBuf,
}

impl ScriptWriter {
    /// Create a writer targeting `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The migrations directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Generate a version stamp from the current UTC time.
    pub fn generate_version() -> String {
        Utc::now().format("%Y%m%d%H%M%S").to_string()
    }

    /// Write a script pair under a freshly generated version stamp.
    ///
    /// An empty script is a silent no-op: nothing is written, `None` is
    /// returned, and callers log as they see fit.
    pub fn write(&self, name: &str, script: &MigrationScript) -> MigrateResult<Option<ScriptPair>> {
        self.write_versioned(&Self::generate_version(), name, script)
    }

    /// Write a script pair under an explicit version stamp.
    pub fn write_versioned(
        &self,
        version: &str,
        name: &str,
        script: &MigrationScript,
    ) -> MigrateResult<Option<ScriptPair>> {
        if script.is_empty() {
            info!("empty migration script; nothing to write");
            return Ok(None);
        }
        if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
            return Err(MigrationError::invalid_migration(format!(
                "migration name must be non-empty and contain only alphanumerics, '_' or '-': {:?}",
                name
            )));
        }

        fs::create_dir_all(&self.dir)?;

        let up = self.dir.join(format!("{}_{}.up.sql", version, name));
        let down = self.dir.join(format!("{}_{}.down.sql", version, name));
        fs::write(&up, &script.up)?;
        fs::write(&down, &script.down)?;

        info!(up = %up.display(), down = %down.display(), "migration pair written");
        Ok(Some(ScriptPair {
            version: version.to_string(),
            name: name.to_string(),
            up,
            down,
        }))
    }

    /// Enumerate the migration pairs already on disk, ordered by version.
    pub fn list(&self) -> MigrateResult<Vec<ScriptEntry>> {
        let mut entries = Vec::new();
        if !self.dir.exists() {
            return Ok(entries);
        }

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if !file_name.ends_with(".up.sql") {
                continue;
            }
            let (version, name) = parse_script_name(file_name)?;
            entries.push(ScriptEntry { version, name });
        }

        entries.sort();
        Ok(entries)
    }
}

impl Default for ScriptWriter {
    fn default() -> Self {
        Self::new(DEFAULT_MIGRATIONS_DIR)
    }
}

/// Parse a migration file name into its (version, name) parts.
///
/// Expected format: `<14-digit version>_<name>.up.sql` (or `.down.sql`).
pub fn parse_script_name(file_name: &str) -> MigrateResult<(String, String)> {
    let stem = file_name
        .strip_suffix(".up.sql")
        .or_else(|| file_name.strip_suffix(".down.sql"))
        .ok_or_else(|| {
            MigrationError::invalid_migration(format!(
                "expected an .up.sql or .down.sql file: {}",
                file_name
            ))
        })?;

    let (version, name) = stem.split_once('_').ok_or_else(|| {
        MigrationError::invalid_migration(format!(
            "expected <version>_<name> format: {}",
            file_name
        ))
    })?;

    if version.len() != 14 || !version.chars().all(|c| c.is_ascii_digit()) {
        return Err(MigrationError::invalid_migration(format!(
            "invalid version stamp (expected 14-digit timestamp): {}",
            version
        )));
    }

    Ok((version.to_string(), name.to_string()))
}
