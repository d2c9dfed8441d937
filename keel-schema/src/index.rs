//! Declared index descriptors.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Sort direction for an index column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// One entry in an index's column list.
///
/// When `expression` is set it replaces the column reference entirely
/// (functional indexes); `length` limits the indexed prefix on engines that
/// support it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexColumn {
    /// Column name.
    pub name: SmolStr,
    /// Sort direction.
    pub sort: Option<SortOrder>,
    /// Raw SQL expression replacing the column reference.
    pub expression: Option<String>,
    /// Indexed prefix length.
    pub length: Option<u32>,
    /// Collation.
    pub collate: Option<String>,
}

impl IndexColumn {
    /// Create a plain index column entry.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            sort: None,
            expression: None,
            length: None,
            collate: None,
        }
    }

    /// Set the sort direction.
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set a raw SQL expression.
    pub fn expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    /// Set the indexed prefix length.
    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the collation.
    pub fn collate(mut self, collate: impl Into<String>) -> Self {
        self.collate = Some(collate.into());
        self
    }
}

/// A declared index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDef {
    /// Index name.
    pub name: SmolStr,
    /// Ordered column list.
    pub columns: Vec<IndexColumn>,
    /// Whether this is a unique index.
    pub unique: bool,
    /// Index class (e.g. `UNIQUE`, `FULLTEXT`), prepended to `INDEX`.
    pub class: Option<String>,
    /// Index type (e.g. `btree`, `hash`), emitted as `USING <type>`.
    pub index_type: Option<String>,
    /// Trailing storage option text.
    pub option: Option<String>,
    /// Index comment.
    pub comment: Option<String>,
}

impl IndexDef {
    /// Create a new index.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            unique: false,
            class: None,
            index_type: None,
            option: None,
            comment: None,
        }
    }

    /// Append a plain column.
    pub fn column(mut self, name: impl Into<SmolStr>) -> Self {
        self.columns.push(IndexColumn::new(name));
        self
    }

    /// Append a fully specified column entry.
    pub fn index_column(mut self, column: IndexColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Mark the index unique.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Set the index class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the index type.
    pub fn index_type(mut self, index_type: impl Into<String>) -> Self {
        self.index_type = Some(index_type.into());
        self
    }

    /// Set the trailing storage option text.
    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.option = Some(option.into());
        self
    }

    /// Set the index comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Get the index name as a string.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Name of the first column, if any.
    pub fn leading_column(&self) -> Option<&str> {
        self.columns.first().map(|c| c.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_builder() {
        let idx = IndexDef::new("idx_users_email")
            .column("email")
            .unique()
            .index_type("btree");

        assert_eq!(idx.name(), "idx_users_email");
        assert!(idx.unique);
        assert_eq!(idx.leading_column(), Some("email"));
        assert_eq!(idx.index_type.as_deref(), Some("btree"));
    }

    #[test]
    fn test_index_column_options() {
        let idx = IndexDef::new("idx_posts_title").index_column(
            IndexColumn::new("title")
                .sort(SortOrder::Desc)
                .length(16)
                .collate("C"),
        );

        let col = &idx.columns[0];
        assert_eq!(col.sort, Some(SortOrder::Desc));
        assert_eq!(col.length, Some(16));
        assert_eq!(col.collate.as_deref(), Some("C"));
    }

    #[test]
    fn test_leading_column_empty() {
        assert_eq!(IndexDef::new("idx_empty").leading_column(), None);
    }
}
