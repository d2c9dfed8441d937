//! Schema diffing and migration planning.
//!
//! [`Migrator::auto_migrate`] compares declared models against the live
//! database and produces one reversible migration script pair: tables that do
//! not exist are created (dropped in the down script), existing tables are
//! altered column by column, and live tables absent from the declared set are
//! suggested as drops in the down script only.
//!
//! Two reversals are intentionally incomplete and documented rather than
//! patched over: in-place column alterations carry no generated reverse, and
//! the down script for a dropped column re-adds the column without a type
//! (introspection alone cannot recover it).

use std::collections::HashSet;

use keel_schema::{ColumnDef, IndexDef, ModelDef, ModelProvider, ModelTarget, RelationKind};
use tracing::{debug, info};

use crate::change;
use crate::error::{MigrateResult, MigrationError};
use crate::inspect::SchemaInspector;
use crate::order::reorder_models;
use crate::sql::{Dialect, SqlArg, StatementBuilder};

/// The generated forward/reverse SQL pair.
///
/// Both bodies are empty for a no-change run; otherwise each is wrapped in a
/// single `BEGIN; … COMMIT;` transaction boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MigrationScript {
    /// SQL applying the migration.
    pub up: String,
    /// SQL rolling the migration back.
    pub down: String,
}

impl MigrationScript {
    /// An empty (no-change) script pair.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether both bodies are blank — the legitimate no-op outcome.
    pub fn is_empty(&self) -> bool {
        self.up.trim().is_empty() && self.down.trim().is_empty()
    }
}

/// Tunables for a migration run.
#[derive(Debug, Clone)]
pub struct MigratorOptions {
    /// Emit CREATE INDEX statements after CREATE TABLE rather than inlining
    /// index clauses into the table definition.
    pub create_index_after_create_table: bool,
    /// Live tables never suggested for dropping (the execution engine's
    /// version-tracking table lives here).
    pub internal_tables: Vec<String>,
}

impl Default for MigratorOptions {
    fn default() -> Self {
        Self {
            create_index_after_create_table: true,
            internal_tables: vec!["schema_migrations".to_string()],
        }
    }
}

/// The diff engine: plans one migration per invocation.
///
/// A run issues a strictly sequential series of introspection queries against
/// the inspector's connection; the connection is treated as exclusively owned
/// for the duration of the run.
pub struct Migrator<I, P> {
    inspector: I,
    provider: P,
    builder: StatementBuilder,
    options: MigratorOptions,
}

impl<I: SchemaInspector, P: ModelProvider> Migrator<I, P> {
    /// Create a migrator for `dialect`.
    pub fn new(dialect: Dialect, inspector: I, provider: P) -> Self {
        Self {
            inspector,
            provider,
            builder: StatementBuilder::new(dialect),
            options: MigratorOptions::default(),
        }
    }

    /// Replace the default options.
    pub fn with_options(mut self, options: MigratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Diff the declared targets against the live schema.
    ///
    /// Returns the up/down pair, or an empty script when nothing differs.
    /// Any lookup or introspection failure aborts the whole run — no partial
    /// script is ever returned.
    pub fn auto_migrate(&mut self, targets: Vec<ModelTarget>) -> MigrateResult<MigrationScript> {
        let mut up = String::new();
        let mut down = String::new();

        // Live tables nobody declares: removing unmanaged tables is only ever
        // suggested as a reversal artifact, never applied forward.
        let declared: HashSet<String> = targets
            .iter()
            .map(|t| t.table_name().to_string())
            .collect();
        for table in self.inspector.table_names()? {
            if declared.contains(&table) || self.options.internal_tables.contains(&table) {
                continue;
            }
            debug!(table = %table, "live table absent from declared models; drop suggested in down script");
            down.push_str("-- Drop Table\n");
            down.push_str(
                &self
                    .builder
                    .stmt("DROP TABLE IF EXISTS ?", &[SqlArg::table(&table)]),
            );
        }

        for target in reorder_models(&self.provider, targets, true) {
            let Some(model) = target.model() else {
                continue;
            };
            if self.inspector.table_exists(model.table_name())? {
                debug!(table = %model.table_name(), "table exists; diffing columns and indexes");
                let (u, d) = self.alter_table(model)?;
                up.push_str(&u);
                up.push('\n');
                down.push_str(&d);
                down.push('\n');
            } else {
                debug!(table = %model.table_name(), "table missing; generating CREATE TABLE");
                let (u, d) = self.create_table(model)?;
                up.push_str(&u);
                up.push('\n');
                down.push_str(&d);
                down.push('\n');
            }
        }

        if up.trim().is_empty() && down.trim().is_empty() {
            info!("no schema changes detected");
            return Ok(MigrationScript::empty());
        }

        Ok(MigrationScript {
            up: format!("BEGIN;\n\n{}\nCOMMIT;", up),
            down: format!("BEGIN;\n\n{}\nCOMMIT;", down),
        })
    }

    /// Full CREATE TABLE for a missing table, plus its DROP TABLE reverse.
    fn create_table(&self, model: &ModelDef) -> MigrateResult<(String, String)> {
        let mut template = String::from("-- Create Table\nCREATE TABLE ? (");
        let mut args = vec![SqlArg::table(model.table_name())];
        let mut has_pk_in_type = false;

        for col in model.migratable_columns() {
            template.push_str("? ?,");
            has_pk_in_type =
                has_pk_in_type || col.db_type.to_uppercase().contains("PRIMARY KEY");
            args.push(SqlArg::column(col.name()));
            args.push(SqlArg::expr(self.builder.column_definition(col)));
        }

        let pk: Vec<&ColumnDef> = model
            .migratable_columns()
            .filter(|c| c.primary_key)
            .collect();
        if !has_pk_in_type && !pk.is_empty() {
            template.push_str("PRIMARY KEY ?,");
            args.push(SqlArg::columns(pk.iter().map(|c| c.name().to_string())));
        }

        if !self.options.create_index_after_create_table {
            for idx in &model.indexes {
                self.check_index_columns(model, idx)?;
                if let Some(class) = &idx.class {
                    template.push_str(class);
                    template.push(' ');
                } else if idx.unique {
                    template.push_str("UNIQUE ");
                }
                template.push_str("INDEX ? ?");
                if let Some(option) = &idx.option {
                    template.push(' ');
                    template.push_str(option);
                }
                template.push(',');
                args.push(SqlArg::column(idx.name()));
                args.push(self.builder.index_columns(idx));
            }
        }

        for rel in &model.relations {
            if rel.kind != RelationKind::BelongsTo {
                continue;
            }
            let Some(fk) = &rel.foreign_key else {
                continue;
            };
            template.push_str("CONSTRAINT ? FOREIGN KEY ? REFERENCES ??");
            if let Some(action) = &fk.on_delete {
                template.push_str(" ON DELETE ");
                template.push_str(action);
            }
            if let Some(action) = &fk.on_update {
                template.push_str(" ON UPDATE ");
                template.push_str(action);
            }
            template.push(',');
            args.push(SqlArg::column(fk.name.as_str()));
            args.push(SqlArg::columns(fk.columns.iter().map(|c| c.to_string())));
            args.push(SqlArg::table(fk.ref_table.as_str()));
            args.push(SqlArg::columns(
                fk.ref_columns.iter().map(|c| c.to_string()),
            ));
        }

        let template = format!("{})", template.trim_end_matches(','));
        let mut up = self.builder.stmt(&template, &args);
        let down = self.builder.stmt(
            "-- Drop Table\nDROP TABLE IF EXISTS ?",
            &[SqlArg::table(model.table_name())],
        );

        if self.options.create_index_after_create_table {
            for idx in &model.indexes {
                let (create_idx, _) = self.create_index(model, idx)?;
                up.push_str(&create_idx);
            }
        }

        Ok((up, down))
    }

    /// ALTER set for an existing table.
    fn alter_table(&mut self, model: &ModelDef) -> MigrateResult<(String, String)> {
        let table = model.table_name();
        let live_columns = self.inspector.columns(table)?;

        let mut up_drops = String::new();
        let mut down_readds = String::new();
        let mut alter_up = String::new();
        let mut revert_down = String::new();

        let mut added: HashSet<&str> = HashSet::new();

        for col in model.migratable_columns() {
            match live_columns.iter().find(|lc| lc.name == col.name()) {
                None => {
                    added.insert(col.name());
                    alter_up.push_str(&self.add_column(table, col));
                    revert_down.push_str(&self.drop_column(table, col.name()));
                }
                Some(live) => {
                    if change::requires_alter(col, live) {
                        alter_up.push_str(&self.alter_column(table, col));
                    }
                }
            }
        }

        // Columns present live but gone from the model. The re-add in the
        // down script carries no type: introspection alone cannot recover it.
        let mut removed: HashSet<&str> = HashSet::new();
        for live in &live_columns {
            if model.get_column(&live.name).is_none() && !removed.contains(live.name.as_str()) {
                up_drops.push_str(&self.drop_column(table, &live.name));
                down_readds.push_str(&self.builder.stmt(
                    "ALTER TABLE ? ADD ?",
                    &[SqlArg::table(table), SqlArg::column(&live.name)],
                ));
                removed.insert(live.name.as_str());
            }
        }

        let live_indexes = self.inspector.index_names(table)?;
        for idx in &model.indexes {
            if live_indexes.iter().any(|n| n == idx.name()) {
                continue;
            }
            let (create_idx, drop_idx) = self.create_index(model, idx)?;
            alter_up.push_str(&create_idx);
            // Skip the down-script drop when the index leads on a column
            // added in this run: after rollback that column no longer exists.
            let leads_on_new = idx.leading_column().is_some_and(|c| added.contains(c));
            if !leads_on_new {
                revert_down.push_str(&drop_idx);
            }
        }

        Ok((
            format!("{}{}", up_drops, alter_up),
            format!("{}{}", down_readds, revert_down),
        ))
    }

    fn add_column(&self, table: &str, column: &ColumnDef) -> String {
        self.builder.stmt(
            "ALTER TABLE ? ADD ? ?",
            &[
                SqlArg::table(table),
                SqlArg::column(column.name()),
                SqlArg::expr(self.builder.column_definition(column)),
            ],
        )
    }

    fn drop_column(&self, table: &str, column: &str) -> String {
        self.builder.stmt(
            "ALTER TABLE ? DROP COLUMN ?",
            &[SqlArg::table(table), SqlArg::column(column)],
        )
    }

    /// In-place alteration. Emitted into the up body only; attribute changes
    /// have no generated reverse.
    fn alter_column(&self, table: &str, column: &ColumnDef) -> String {
        match self.builder.dialect() {
            Dialect::MySql => self.builder.stmt(
                "ALTER TABLE ? MODIFY COLUMN ? ?",
                &[
                    SqlArg::table(table),
                    SqlArg::column(column.name()),
                    SqlArg::expr(self.builder.column_definition(column)),
                ],
            ),
            _ => self.builder.stmt(
                "ALTER TABLE ? ALTER COLUMN ? TYPE ?",
                &[
                    SqlArg::table(table),
                    SqlArg::column(column.name()),
                    SqlArg::expr(column.db_type.clone()),
                ],
            ),
        }
    }

    /// CREATE INDEX and its DROP INDEX reverse.
    fn create_index(&self, model: &ModelDef, idx: &IndexDef) -> MigrateResult<(String, String)> {
        self.check_index_columns(model, idx)?;

        let mut template = String::from("CREATE ");
        if let Some(class) = &idx.class {
            template.push_str(class);
            template.push(' ');
        } else if idx.unique {
            template.push_str("UNIQUE ");
        }
        template.push_str("INDEX ? ON ?");
        if self.builder.dialect() == Dialect::Postgres {
            if let Some(index_type) = &idx.index_type {
                template.push_str(" USING ");
                template.push_str(index_type);
            }
        }
        template.push_str(" ?");
        if self.builder.dialect() == Dialect::MySql {
            if let Some(index_type) = &idx.index_type {
                template.push_str(" USING ");
                template.push_str(index_type);
            }
            if let Some(comment) = &idx.comment {
                template.push_str(&format!(" COMMENT '{}'", comment.replace('\'', "''")));
            }
        }
        if let Some(option) = &idx.option {
            template.push(' ');
            template.push_str(option);
        }

        let args = [
            SqlArg::column(idx.name()),
            SqlArg::table(model.table_name()),
            self.builder.index_columns(idx),
        ];
        let up = self.builder.stmt(&template, &args);
        let down = match self.builder.dialect() {
            Dialect::MySql => self.builder.stmt(
                "DROP INDEX ? ON ?",
                &[SqlArg::column(idx.name()), SqlArg::table(model.table_name())],
            ),
            _ => self
                .builder
                .stmt("DROP INDEX IF EXISTS ?", &[SqlArg::column(idx.name())]),
        };
        Ok((up, down))
    }

    /// Every named index column must exist in the model's column list.
    fn check_index_columns(&self, model: &ModelDef, idx: &IndexDef) -> MigrateResult<()> {
        for col in &idx.columns {
            if col.expression.is_none() && model.get_column(col.name.as_str()).is_none() {
                return Err(MigrationError::unknown_column(
                    model.table_name(),
                    col.name.as_str(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use keel_schema::{IndexDef, RelationDef};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::inspect::LiveColumn;

    #[derive(Default)]
    struct FakeDb {
        tables: BTreeMap<String, Vec<LiveColumn>>,
        indexes: BTreeMap<String, Vec<String>>,
    }

    impl FakeDb {
        fn with_table(mut self, name: &str, columns: Vec<LiveColumn>) -> Self {
            self.tables.insert(name.to_string(), columns);
            self
        }

        fn with_index(mut self, table: &str, index: &str) -> Self {
            self.indexes
                .entry(table.to_string())
                .or_default()
                .push(index.to_string());
            self
        }
    }

    impl SchemaInspector for FakeDb {
        fn table_exists(&mut self, table: &str) -> MigrateResult<bool> {
            Ok(self.tables.contains_key(table))
        }

        fn table_names(&mut self) -> MigrateResult<Vec<String>> {
            Ok(self.tables.keys().cloned().collect())
        }

        fn columns(&mut self, table: &str) -> MigrateResult<Vec<LiveColumn>> {
            Ok(self.tables.get(table).cloned().unwrap_or_default())
        }

        fn index_names(&mut self, table: &str) -> MigrateResult<Vec<String>> {
            Ok(self.indexes.get(table).cloned().unwrap_or_default())
        }
    }

    struct FailingDb;

    impl SchemaInspector for FailingDb {
        fn table_exists(&mut self, _table: &str) -> MigrateResult<bool> {
            Err(MigrationError::introspection("connection reset"))
        }

        fn table_names(&mut self) -> MigrateResult<Vec<String>> {
            Err(MigrationError::introspection("connection reset"))
        }

        fn columns(&mut self, _table: &str) -> MigrateResult<Vec<LiveColumn>> {
            Err(MigrationError::introspection("connection reset"))
        }

        fn index_names(&mut self, _table: &str) -> MigrateResult<Vec<String>> {
            Err(MigrationError::introspection("connection reset"))
        }
    }

    fn users_model() -> ModelDef {
        ModelDef::new("users")
            .column(ColumnDef::new("id", "bigint").primary_key())
            .column(
                ColumnDef::new("email", "varchar(255)")
                    .size(255)
                    .not_null()
                    .unique(),
            )
            .index(IndexDef::new("idx_users_email").column("email"))
    }

    fn users_live() -> Vec<LiveColumn> {
        vec![
            LiveColumn::new("id", "bigint"),
            LiveColumn {
                length: Some(255),
                nullable: Some(false),
                unique: Some(true),
                ..LiveColumn::new("email", "varchar(255)")
            },
        ]
    }

    fn migrator<I: SchemaInspector>(db: I) -> Migrator<I, ()> {
        Migrator::new(Dialect::Postgres, db, ())
    }

    #[test]
    fn test_create_table_for_missing_table() {
        let script = migrator(FakeDb::default())
            .auto_migrate(vec![users_model().into()])
            .unwrap();

        assert!(script.up.starts_with("BEGIN;"));
        assert!(script.up.trim_end().ends_with("COMMIT;"));
        assert!(script.up.contains("-- Create Table"));
        assert!(script.up.contains("CREATE TABLE \"users\""));
        assert!(
            script
                .up
                .contains("\"email\" varchar(255) NOT NULL UNIQUE")
        );
        assert!(script.up.contains("PRIMARY KEY (\"id\")"));
        assert!(script.up.contains("CREATE INDEX \"idx_users_email\""));
        assert!(script.down.contains("DROP TABLE IF EXISTS \"users\""));
        assert!(!script.down.contains("DROP INDEX"));
    }

    #[test]
    fn test_matching_schema_is_a_noop() {
        let db = FakeDb::default()
            .with_table("users", users_live())
            .with_index("users", "idx_users_email");

        let script = migrator(db).auto_migrate(vec![users_model().into()]).unwrap();

        assert!(script.is_empty());
        assert_eq!(script.up, "");
        assert_eq!(script.down, "");
    }

    #[test]
    fn test_second_run_after_apply_is_empty() {
        // First run: empty database, full create.
        let first = migrator(FakeDb::default())
            .auto_migrate(vec![users_model().into()])
            .unwrap();
        assert!(!first.is_empty());

        // "Apply" the plan by mirroring the declared schema live, then rerun.
        let db = FakeDb::default()
            .with_table("users", users_live())
            .with_index("users", "idx_users_email");
        let second = migrator(db).auto_migrate(vec![users_model().into()]).unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn test_excluded_table_drop_is_down_only() {
        let db = FakeDb::default()
            .with_table("users", users_live())
            .with_index("users", "idx_users_email")
            .with_table("legacy", vec![LiveColumn::new("id", "bigint")])
            .with_table("schema_migrations", vec![LiveColumn::new("version", "bigint")]);

        let script = migrator(db).auto_migrate(vec![users_model().into()]).unwrap();

        assert!(!script.up.contains("legacy"));
        assert!(script.down.contains("DROP TABLE IF EXISTS \"legacy\""));
        // The execution engine's own table is never suggested for dropping.
        assert!(!script.down.contains("schema_migrations"));
        // Both bodies are wrapped once anything is emitted.
        assert!(script.up.starts_with("BEGIN;"));
        assert!(script.down.starts_with("BEGIN;"));
    }

    #[test]
    fn test_added_column_and_reverse_drop() {
        let db = FakeDb::default()
            .with_table("users", users_live())
            .with_index("users", "idx_users_email");

        let model = users_model().column(ColumnDef::new("age", "integer"));
        let script = migrator(db).auto_migrate(vec![model.into()]).unwrap();

        assert!(script.up.contains("ALTER TABLE \"users\" ADD \"age\" integer"));
        assert!(script.down.contains("ALTER TABLE \"users\" DROP COLUMN \"age\""));
    }

    #[test]
    fn test_dropped_column_reverse_is_typeless() {
        let mut live = users_live();
        live.push(LiveColumn::new("nickname", "varchar(64)"));
        let db = FakeDb::default()
            .with_table("users", live)
            .with_index("users", "idx_users_email");

        let script = migrator(db).auto_migrate(vec![users_model().into()]).unwrap();

        assert!(
            script
                .up
                .contains("ALTER TABLE \"users\" DROP COLUMN \"nickname\"")
        );
        // Type information is not recoverable from introspection alone.
        assert!(script.down.contains("ALTER TABLE \"users\" ADD \"nickname\";"));
    }

    #[test]
    fn test_index_on_added_column_skips_down_drop() {
        let db = FakeDb::default()
            .with_table("users", users_live())
            .with_index("users", "idx_users_email");

        let model = users_model()
            .column(ColumnDef::new("age", "integer"))
            .index(IndexDef::new("idx_users_age").column("age"));
        let script = migrator(db).auto_migrate(vec![model.into()]).unwrap();

        assert!(script.up.contains("CREATE INDEX \"idx_users_age\""));
        assert!(!script.down.contains("DROP INDEX IF EXISTS \"idx_users_age\""));
    }

    #[test]
    fn test_index_on_existing_column_keeps_down_drop() {
        let db = FakeDb::default().with_table("users", users_live());

        let script = migrator(db).auto_migrate(vec![users_model().into()]).unwrap();

        assert!(script.up.contains("CREATE INDEX \"idx_users_email\""));
        assert!(script.down.contains("DROP INDEX IF EXISTS \"idx_users_email\""));
    }

    #[test]
    fn test_skip_migration_column_never_appears() {
        // Declared but skip-flagged, absent live: no ADD. Present live while
        // declared skip-flagged: no DROP either.
        let mut live = users_live();
        live.push(LiveColumn::new("cached_rank", "integer"));
        let db = FakeDb::default()
            .with_table("users", live)
            .with_index("users", "idx_users_email");

        let model = users_model()
            .column(ColumnDef::new("cached_rank", "integer").skip_migration())
            .column(ColumnDef::new("cached_score", "integer").skip_migration());
        let script = migrator(db).auto_migrate(vec![model.into()]).unwrap();

        assert!(!script.up.contains("cached_rank"));
        assert!(!script.up.contains("cached_score"));
        assert!(!script.down.contains("cached_rank"));
        assert!(!script.down.contains("cached_score"));
    }

    #[test]
    fn test_skip_migration_column_not_in_create_table() {
        let model = ModelDef::new("events")
            .column(ColumnDef::new("id", "bigint").primary_key())
            .column(ColumnDef::new("debug_blob", "text").skip_migration());

        let script = migrator(FakeDb::default())
            .auto_migrate(vec![model.into()])
            .unwrap();

        assert!(!script.up.contains("debug_blob"));
    }

    #[test]
    fn test_altered_column_emits_up_only() {
        let mut live = users_live();
        // Database still allows NULL where the model forbids it.
        live[1].nullable = Some(true);
        let db = FakeDb::default()
            .with_table("users", live)
            .with_index("users", "idx_users_email");

        let script = migrator(db).auto_migrate(vec![users_model().into()]).unwrap();

        assert!(
            script
                .up
                .contains("ALTER TABLE \"users\" ALTER COLUMN \"email\" TYPE varchar(255)")
        );
        assert!(!script.down.contains("ALTER COLUMN"));
    }

    #[test]
    fn test_foreign_keys_and_dependency_order_in_create() {
        let users = users_model();
        let posts = ModelDef::new("posts")
            .column(ColumnDef::new("id", "bigint").primary_key())
            .column(ColumnDef::new("user_id", "bigint").not_null())
            .relation(
                RelationDef::belongs_to("users", "fk_posts_user", vec!["user_id"], vec!["id"])
                    .with_foreign_key(
                        keel_schema::ForeignKey::new(
                            "fk_posts_user",
                            vec!["user_id"],
                            "users",
                            vec!["id"],
                        )
                        .on_delete("CASCADE"),
                    ),
            );

        // Input order deliberately reversed; the resolver fixes it.
        let script = migrator(FakeDb::default())
            .auto_migrate(vec![posts.into(), users.into()])
            .unwrap();

        assert!(script.up.contains(
            "CONSTRAINT \"fk_posts_user\" FOREIGN KEY (\"user_id\") REFERENCES \"users\"(\"id\") ON DELETE CASCADE"
        ));
        let users_pos = script.up.find("CREATE TABLE \"users\"").unwrap();
        let posts_pos = script.up.find("CREATE TABLE \"posts\"").unwrap();
        assert!(users_pos < posts_pos);
    }

    #[test]
    fn test_unknown_index_column_fails_the_run() {
        let model = users_model().index(IndexDef::new("idx_users_phantom").column("phantom"));

        let err = migrator(FakeDb::default())
            .auto_migrate(vec![model.into()])
            .unwrap_err();

        assert!(matches!(err, MigrationError::UnknownColumn { .. }));
    }

    #[test]
    fn test_introspection_failure_aborts() {
        let err = migrator(FailingDb)
            .auto_migrate(vec![users_model().into()])
            .unwrap_err();

        assert!(matches!(err, MigrationError::Introspection(_)));
    }

    #[test]
    fn test_mysql_dialect_quoting_and_modify() {
        let mut live = users_live();
        live[1].nullable = Some(true);
        let db = FakeDb::default()
            .with_table("users", live)
            .with_index("users", "idx_users_email");

        let script = Migrator::new(Dialect::MySql, db, ())
            .auto_migrate(vec![users_model().into()])
            .unwrap();

        assert!(script.up.contains(
            "ALTER TABLE `users` MODIFY COLUMN `email` varchar(255) NOT NULL UNIQUE"
        ));
    }

    #[test]
    fn test_raw_table_target_counts_as_declared() {
        let db = FakeDb::default().with_table("legacy", vec![LiveColumn::new("id", "bigint")]);

        let script = migrator(db)
            .auto_migrate(vec![ModelTarget::table("legacy")])
            .unwrap();

        // Acknowledged by name: no drop suggested, nothing else to do.
        assert!(script.is_empty());
    }
}
