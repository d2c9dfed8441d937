//! Declared relationships between models.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// The kind of a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationKind {
    /// This model holds a foreign key to the related table.
    BelongsTo,
    /// The related table holds a foreign key back to this model (single row).
    HasOne,
    /// The related table holds a foreign key back to this model (many rows).
    HasMany,
    /// Linked through a join table; neither side holds the constraint.
    ManyToMany,
}

/// A foreign-key constraint: local columns referencing another table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Constraint name.
    pub name: SmolStr,
    /// Local columns.
    pub columns: Vec<SmolStr>,
    /// Referenced table.
    pub ref_table: SmolStr,
    /// Referenced columns.
    pub ref_columns: Vec<SmolStr>,
    /// ON DELETE action.
    pub on_delete: Option<String>,
    /// ON UPDATE action.
    pub on_update: Option<String>,
}

impl ForeignKey {
    /// Create a new foreign key constraint.
    pub fn new(
        name: impl Into<SmolStr>,
        columns: Vec<impl Into<SmolStr>>,
        ref_table: impl Into<SmolStr>,
        ref_columns: Vec<impl Into<SmolStr>>,
    ) -> Self {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            ref_table: ref_table.into(),
            ref_columns: ref_columns.into_iter().map(Into::into).collect(),
            on_delete: None,
            on_update: None,
        }
    }

    /// Set the ON DELETE action.
    pub fn on_delete(mut self, action: impl Into<String>) -> Self {
        self.on_delete = Some(action.into());
        self
    }

    /// Set the ON UPDATE action.
    pub fn on_update(mut self, action: impl Into<String>) -> Self {
        self.on_update = Some(action.into());
        self
    }
}

/// A declared relationship edge.
///
/// Only `BelongsTo` relations carry a constraint emitted into DDL; the other
/// kinds exist for dependency ordering (who must be created first) and, for
/// `ManyToMany`, to pull the join table into the migration set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationDef {
    /// Relationship kind.
    pub kind: RelationKind,
    /// The related table.
    pub table: SmolStr,
    /// Foreign-key constraint owned by this model, if any.
    pub foreign_key: Option<ForeignKey>,
    /// Join table name for many-to-many relations.
    pub join_table: Option<SmolStr>,
}

impl RelationDef {
    /// A relation where this model holds a foreign key to `table`.
    pub fn belongs_to(
        table: impl Into<SmolStr>,
        constraint: impl Into<SmolStr>,
        columns: Vec<impl Into<SmolStr>>,
        ref_columns: Vec<impl Into<SmolStr>>,
    ) -> Self {
        let table = table.into();
        Self {
            kind: RelationKind::BelongsTo,
            foreign_key: Some(ForeignKey::new(
                constraint,
                columns,
                table.clone(),
                ref_columns,
            )),
            table,
            join_table: None,
        }
    }

    /// A relation where `table` holds a single-row foreign key back to this model.
    pub fn has_one(table: impl Into<SmolStr>) -> Self {
        Self {
            kind: RelationKind::HasOne,
            table: table.into(),
            foreign_key: None,
            join_table: None,
        }
    }

    /// A relation where `table` holds a foreign key back to this model.
    pub fn has_many(table: impl Into<SmolStr>) -> Self {
        Self {
            kind: RelationKind::HasMany,
            table: table.into(),
            foreign_key: None,
            join_table: None,
        }
    }

    /// A many-to-many relation to `table` through `join_table`.
    pub fn many_to_many(table: impl Into<SmolStr>, join_table: impl Into<SmolStr>) -> Self {
        Self {
            kind: RelationKind::ManyToMany,
            table: table.into(),
            foreign_key: None,
            join_table: Some(join_table.into()),
        }
    }

    /// Replace the generated foreign key (e.g. to add ON DELETE).
    pub fn with_foreign_key(mut self, foreign_key: ForeignKey) -> Self {
        self.foreign_key = Some(foreign_key);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_belongs_to() {
        let rel = RelationDef::belongs_to("users", "fk_posts_user", vec!["user_id"], vec!["id"]);

        assert_eq!(rel.kind, RelationKind::BelongsTo);
        assert_eq!(rel.table, "users");
        let fk = rel.foreign_key.unwrap();
        assert_eq!(fk.ref_table, "users");
        assert_eq!(fk.columns, vec![SmolStr::new("user_id")]);
    }

    #[test]
    fn test_many_to_many_carries_join_table() {
        let rel = RelationDef::many_to_many("tags", "post_tags");
        assert_eq!(rel.kind, RelationKind::ManyToMany);
        assert_eq!(rel.join_table.as_deref(), Some("post_tags"));
        assert!(rel.foreign_key.is_none());
    }

    #[test]
    fn test_foreign_key_actions() {
        let fk = ForeignKey::new("fk_x", vec!["a"], "t", vec!["id"])
            .on_delete("CASCADE")
            .on_update("SET NULL");
        assert_eq!(fk.on_delete.as_deref(), Some("CASCADE"));
        assert_eq!(fk.on_update.as_deref(), Some("SET NULL"));
    }
}
