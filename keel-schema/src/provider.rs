//! Capability boundaries: describing models and looking them up by table name.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::model::{ModelDef, ModelTarget};

/// Something that can describe itself as a table schema.
///
/// How a type produces its descriptor — attribute macros, a hand-written
/// builder, a schema file — is deliberately outside this crate; the migration
/// engine depends only on the resulting [`ModelDef`].
pub trait TableSchema {
    /// The declared table shape.
    fn describe() -> ModelDef;
}

/// Source of model descriptors, keyed by table name.
///
/// Dependency auto-discovery asks the provider for models that are referenced
/// by a relationship but absent from the requested migration set.
pub trait ModelProvider {
    /// Descriptor for `table`, if this provider knows it.
    fn model(&self, table: &str) -> Option<ModelDef>;
}

impl<P: ModelProvider + ?Sized> ModelProvider for &P {
    fn model(&self, table: &str) -> Option<ModelDef> {
        (**self).model(table)
    }
}

/// A provider that knows nothing. Useful when auto-discovery is off.
impl ModelProvider for () {
    fn model(&self, _table: &str) -> Option<ModelDef> {
        None
    }
}

/// An insertion-ordered, in-memory model catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticModels {
    models: IndexMap<SmolStr, ModelDef>,
}

impl StaticModels {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a model, replacing any previous model for the same table.
    pub fn insert(&mut self, model: ModelDef) {
        self.models.insert(model.table.clone(), model);
    }

    /// Register a type that describes itself as a table schema.
    pub fn register<T: TableSchema>(&mut self) {
        self.insert(T::describe());
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// All models as migration targets, in insertion order.
    pub fn targets(&self) -> Vec<ModelTarget> {
        self.models
            .values()
            .cloned()
            .map(ModelTarget::Model)
            .collect()
    }

    /// Iterate the registered models in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelDef> {
        self.models.values()
    }
}

impl ModelProvider for StaticModels {
    fn model(&self, table: &str) -> Option<ModelDef> {
        self.models.get(table).cloned()
    }
}

impl FromIterator<ModelDef> for StaticModels {
    fn from_iter<I: IntoIterator<Item = ModelDef>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for model in iter {
            catalog.insert(model);
        }
        catalog
    }
}
