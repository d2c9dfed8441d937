//! Model definitions (one per desired database table).

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::column::ColumnDef;
use crate::index::IndexDef;
use crate::relation::RelationDef;

/// The declared shape of one database table.
///
/// Column order is preserved and drives the column order of generated
/// CREATE TABLE statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDef {
    /// Table name.
    pub table: SmolStr,
    /// Ordered column list.
    pub columns: Vec<ColumnDef>,
    /// Declared indexes.
    pub indexes: Vec<IndexDef>,
    /// Declared relationships.
    pub relations: Vec<RelationDef>,
}

impl ModelDef {
    /// Create a new model for `table`.
    pub fn new(table: impl Into<SmolStr>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            indexes: Vec::new(),
            relations: Vec::new(),
        }
    }

    /// Append a column.
    pub fn column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    /// Append an index.
    pub fn index(mut self, index: IndexDef) -> Self {
        self.indexes.push(index);
        self
    }

    /// Append a relationship.
    pub fn relation(mut self, relation: RelationDef) -> Self {
        self.relations.push(relation);
        self
    }

    /// Get the table name as a string.
    pub fn table_name(&self) -> &str {
        self.table.as_str()
    }

    /// Look up a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Look up an index by name.
    pub fn get_index(&self, name: &str) -> Option<&IndexDef> {
        self.indexes.iter().find(|i| i.name == name)
    }

    /// Columns participating in the primary key, in declaration order.
    pub fn primary_key_columns(&self) -> Vec<&ColumnDef> {
        self.columns.iter().filter(|c| c.primary_key).collect()
    }

    /// Columns that take part in migrations (skip-flagged columns filtered out).
    pub fn migratable_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| !c.skip_migration)
    }
}

/// One entry in a migration run: a full model, or a bare table name.
///
/// Bare names pass through dependency ordering untouched and produce no DDL
/// of their own; they exist so a run can acknowledge tables it does not
/// manage structurally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModelTarget {
    /// A fully described model.
    Model(ModelDef),
    /// A raw table name.
    Table(SmolStr),
}

impl ModelTarget {
    /// A bare table-name target.
    pub fn table(name: impl Into<SmolStr>) -> Self {
        ModelTarget::Table(name.into())
    }

    /// The table name this target refers to.
    pub fn table_name(&self) -> &str {
        match self {
            ModelTarget::Model(m) => m.table_name(),
            ModelTarget::Table(name) => name.as_str(),
        }
    }

    /// The model, when this target carries one.
    pub fn model(&self) -> Option<&ModelDef> {
        match self {
            ModelTarget::Model(m) => Some(m),
            ModelTarget::Table(_) => None,
        }
    }
}

impl From<ModelDef> for ModelTarget {
    fn from(model: ModelDef) -> Self {
        ModelTarget::Model(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> ModelDef {
        ModelDef::new("users")
            .column(ColumnDef::new("id", "bigserial").primary_key())
            .column(ColumnDef::new("email", "varchar(255)").not_null())
            .column(ColumnDef::new("shadow", "text").skip_migration())
            .index(IndexDef::new("idx_users_email").column("email"))
    }

    #[test]
    fn test_lookups() {
        let model = users();
        assert!(model.get_column("email").is_some());
        assert!(model.get_column("missing").is_none());
        assert!(model.get_index("idx_users_email").is_some());
        assert_eq!(model.primary_key_columns().len(), 1);
    }

    #[test]
    fn test_migratable_columns_filters_skip_flag() {
        let model = users();
        let names: Vec<&str> = model.migratable_columns().map(|c| c.name()).collect();
        assert_eq!(names, vec!["id", "email"]);
    }

    #[test]
    fn test_target_table_name() {
        assert_eq!(ModelTarget::from(users()).table_name(), "users");
        assert_eq!(ModelTarget::table("legacy").table_name(), "legacy");
    }
}
