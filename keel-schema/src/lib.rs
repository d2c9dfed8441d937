//! # keel-schema
//!
//! Declarative table descriptors for the Keel migration engine.
//!
//! A [`ModelDef`] is the in-memory description of a desired database table:
//! its columns, its indexes, and its relationships to other tables. The diff
//! engine in `keel-migrate` consumes these descriptors and nothing else — how
//! they are produced (hand-built, derived, loaded from a schema file) is the
//! host application's business. Anything that can describe itself as a table
//! implements [`TableSchema`]; a set of descriptors keyed by table name
//! implements [`ModelProvider`].
//!
//! ## Example
//!
//! ```rust
//! use keel_schema::{ColumnDef, IndexDef, ModelDef, RelationDef, StaticModels};
//!
//! let users = ModelDef::new("users")
//!     .column(ColumnDef::new("id", "bigserial").primary_key())
//!     .column(ColumnDef::new("email", "varchar(255)").size(255).not_null().unique())
//!     .index(IndexDef::new("idx_users_email").column("email").unique());
//!
//! let posts = ModelDef::new("posts")
//!     .column(ColumnDef::new("id", "bigserial").primary_key())
//!     .column(ColumnDef::new("user_id", "bigint").not_null())
//!     .relation(RelationDef::belongs_to(
//!         "users",
//!         "fk_posts_user",
//!         vec!["user_id"],
//!         vec!["id"],
//!     ));
//!
//! let mut models = StaticModels::new();
//! models.insert(users);
//! models.insert(posts);
//! ```

pub mod column;
pub mod index;
pub mod model;
pub mod provider;
pub mod relation;

// Re-exports
pub use column::ColumnDef;
pub use index::{IndexColumn, IndexDef, SortOrder};
pub use model::{ModelDef, ModelTarget};
pub use provider::{ModelProvider, StaticModels, TableSchema};
pub use relation::{ForeignKey, RelationDef, RelationKind};
