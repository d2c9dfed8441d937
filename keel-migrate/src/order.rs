//! Dependency ordering of migration targets.
//!
//! Tables referenced by a foreign key must be created before the tables that
//! reference them (and dropped in the reverse order, which falls out of the
//! generated down scripts). Ordering walks each requested model's
//! relationships and inserts dependencies ahead of dependents.
//!
//! Cycles are broken by truncation, not reported as errors: a table already
//! visited is never reprocessed, so the first visit's position wins. A
//! diagnostic is logged when a genuine cycle is cut (as opposed to a diamond,
//! where revisiting is normal).

use std::collections::{HashMap, HashSet};

use keel_schema::{ModelDef, ModelProvider, ModelTarget, RelationKind};
use smol_str::SmolStr;
use tracing::{debug, warn};

struct Node {
    model: ModelDef,
    depends: Vec<SmolStr>,
}

struct Resolver<'a> {
    provider: &'a dyn ModelProvider,
    auto_add: bool,
    /// Tables whose relationships have been parsed.
    parsed: HashSet<SmolStr>,
    nodes: HashMap<SmolStr, Node>,
    /// Insertion requests, in input order.
    queue: Vec<SmolStr>,
    /// Tables already placed (or being placed) in the output.
    visited: HashSet<SmolStr>,
    /// Tables currently on the insertion stack; a revisit here is a cycle.
    in_progress: HashSet<SmolStr>,
    ordered: Vec<SmolStr>,
}

impl<'a> Resolver<'a> {
    fn new(provider: &'a dyn ModelProvider, auto_add: bool) -> Self {
        Self {
            provider,
            auto_add,
            parsed: HashSet::new(),
            nodes: HashMap::new(),
            queue: Vec::new(),
            visited: HashSet::new(),
            in_progress: HashSet::new(),
            ordered: Vec::new(),
        }
    }

    /// Record a model's dependency edges.
    ///
    /// For every relationship: a foreign key owned by this model (to a table
    /// other than itself) is a dependency; has-one/has-many marks the related
    /// table as depended-upon; many-to-many queues the join table and, unless
    /// the related model is already depended-upon (a reflexive pairing, whose
    /// own node is expanded in place instead), depends on the related table.
    fn parse(&mut self, model: &ModelDef, add_to_list: bool) {
        if self.parsed.contains(model.table_name()) {
            return;
        }
        self.parsed.insert(model.table.clone());

        let mut depends: Vec<SmolStr> = Vec::new();
        let mut depended_on: HashSet<SmolStr> = HashSet::new();
        let mut joins: Vec<(SmolStr, Option<SmolStr>)> = Vec::new();

        for rel in &model.relations {
            match rel.kind {
                RelationKind::BelongsTo => {
                    if let Some(fk) = &rel.foreign_key {
                        if fk.ref_table != model.table {
                            depends.push(fk.ref_table.clone());
                        }
                    }
                }
                RelationKind::HasOne | RelationKind::HasMany => {
                    depended_on.insert(rel.table.clone());
                }
                RelationKind::ManyToMany => {
                    joins.push((rel.table.clone(), rel.join_table.clone()));
                }
            }
        }

        for (related, join) in joins {
            if depended_on.contains(&related) {
                if let Some(model) = self.provider.model(&related) {
                    self.parse(&model, false);
                }
            } else {
                depends.push(related);
            }
            if let Some(join) = join {
                depends.push(join);
            }
        }

        self.nodes.insert(
            model.table.clone(),
            Node {
                model: model.clone(),
                depends,
            },
        );
        if add_to_list {
            self.queue.push(model.table.clone());
        }
    }

    /// Place `name` in the output, dependencies first.
    fn insert(&mut self, name: &SmolStr) {
        if self.visited.contains(name) {
            if self.in_progress.contains(name) {
                warn!(table = %name, "circular table dependency; ordering truncated");
            }
            return;
        }
        self.visited.insert(name.clone());
        self.in_progress.insert(name.clone());

        if self.auto_add {
            if !self.nodes.contains_key(name) {
                if let Some(model) = self.provider.model(name) {
                    debug!(table = %name, "auto-discovered dependency model");
                    self.parse(&model, false);
                }
            }
            let depends = self
                .nodes
                .get(name)
                .map(|n| n.depends.clone())
                .unwrap_or_default();
            for dep in &depends {
                self.insert(dep);
            }
        }

        self.in_progress.remove(name);
        self.ordered.push(name.clone());
    }
}

/// Order migration targets so that referenced tables precede referencing ones.
///
/// With `auto_add` set (full-schema migration), dependency models missing
/// from the input are pulled from the provider and inserted; without it
/// (explicit table creation), only the given set is ordered and nothing new
/// is discovered — in that mode the input order is preserved.
///
/// Raw table-name targets pass through untouched, ahead of the ordered
/// models. A dependency the provider cannot describe is emitted as a raw name.
pub fn reorder_models(
    provider: &dyn ModelProvider,
    targets: Vec<ModelTarget>,
    auto_add: bool,
) -> Vec<ModelTarget> {
    let mut resolver = Resolver::new(provider, auto_add);
    let mut results: Vec<ModelTarget> = Vec::new();

    for target in targets {
        match target {
            ModelTarget::Table(name) => results.push(ModelTarget::Table(name)),
            ModelTarget::Model(model) => resolver.parse(&model, true),
        }
    }

    let queue = resolver.queue.clone();
    for name in &queue {
        resolver.insert(name);
    }

    for name in &resolver.ordered {
        match resolver.nodes.get(name) {
            Some(node) => results.push(ModelTarget::Model(node.model.clone())),
            None => results.push(ModelTarget::Table(name.clone())),
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use keel_schema::{ColumnDef, RelationDef, StaticModels};

    use super::*;

    fn table_names(targets: &[ModelTarget]) -> Vec<String> {
        targets.iter().map(|t| t.table_name().to_string()).collect()
    }

    fn position(names: &[String], table: &str) -> usize {
        names
            .iter()
            .position(|n| n == table)
            .unwrap_or_else(|| panic!("{table} missing from {names:?}"))
    }

    fn simple(table: &str) -> ModelDef {
        ModelDef::new(table).column(ColumnDef::new("id", "bigint").primary_key())
    }

    #[test]
    fn test_referenced_table_precedes_referencing() {
        let a = simple("a");
        let b = simple("b").relation(RelationDef::belongs_to("a", "fk_b_a", vec!["a_id"], vec!["id"]));

        let ordered = reorder_models(&(), vec![b.into(), a.into()], true);
        assert_eq!(table_names(&ordered), vec!["a", "b"]);
    }

    #[test]
    fn test_many_to_many_ordering() {
        // A plain; B references A; C is many-to-many with B through J.
        let a = simple("a");
        let b = simple("b").relation(RelationDef::belongs_to("a", "fk_b_a", vec!["a_id"], vec!["id"]));
        let c = simple("c").relation(RelationDef::many_to_many("b", "j"));
        let j = simple("j")
            .relation(RelationDef::belongs_to("b", "fk_j_b", vec!["b_id"], vec!["id"]))
            .relation(RelationDef::belongs_to("c", "fk_j_c", vec!["c_id"], vec!["id"]));

        let mut provider = StaticModels::new();
        provider.insert(j.clone());

        let ordered = reorder_models(
            &provider,
            vec![a.into(), b.into(), c.into()],
            true,
        );
        let names = table_names(&ordered);

        assert!(position(&names, "a") < position(&names, "b"));
        assert!(position(&names, "b") < position(&names, "c"));
        assert!(position(&names, "b") < position(&names, "j"));
    }

    #[test]
    fn test_reflexive_many_to_many_expands_instead_of_requeueing() {
        // B both owns the collection of C rows and pairs with C through J:
        // C is expanded in place, not treated as an external dependency.
        let b = simple("b")
            .relation(RelationDef::has_many("c"))
            .relation(RelationDef::many_to_many("c", "j"));
        let c = simple("c");
        let j = simple("j");

        let mut provider = StaticModels::new();
        provider.insert(c);
        provider.insert(j);

        let ordered = reorder_models(&provider, vec![b.into()], true);
        let names = table_names(&ordered);

        assert!(names.contains(&"j".to_string()));
        assert!(names.contains(&"b".to_string()));
        assert!(!names.contains(&"c".to_string()));
        assert!(position(&names, "j") < position(&names, "b"));
    }

    #[test]
    fn test_cycle_is_truncated_not_fatal() {
        let a = simple("a").relation(RelationDef::belongs_to("b", "fk_a_b", vec!["b_id"], vec!["id"]));
        let b = simple("b").relation(RelationDef::belongs_to("a", "fk_b_a", vec!["a_id"], vec!["id"]));

        let ordered = reorder_models(&(), vec![a.into(), b.into()], true);
        let names = table_names(&ordered);

        assert_eq!(names.len(), 2);
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_self_reference_is_ignored() {
        let node = simple("nodes").relation(RelationDef::belongs_to(
            "nodes",
            "fk_nodes_parent",
            vec!["parent_id"],
            vec!["id"],
        ));

        let ordered = reorder_models(&(), vec![node.into()], true);
        assert_eq!(table_names(&ordered), vec!["nodes"]);
    }

    #[test]
    fn test_raw_table_names_pass_through_first() {
        let a = simple("a");
        let ordered = reorder_models(
            &(),
            vec![ModelTarget::table("legacy"), a.into()],
            true,
        );
        assert_eq!(table_names(&ordered), vec!["legacy", "a"]);
        assert!(ordered[0].model().is_none());
    }

    #[test]
    fn test_non_auto_mode_preserves_input_order() {
        let a = simple("a");
        let b = simple("b").relation(RelationDef::belongs_to("a", "fk_b_a", vec!["a_id"], vec!["id"]));

        let ordered = reorder_models(&(), vec![b.into(), a.into()], false);
        assert_eq!(table_names(&ordered), vec!["b", "a"]);
    }

    #[test]
    fn test_auto_discovery_pulls_models_from_provider() {
        let a = simple("a");
        let b = simple("b").relation(RelationDef::belongs_to("a", "fk_b_a", vec!["a_id"], vec!["id"]));

        let mut provider = StaticModels::new();
        provider.insert(a);

        let ordered = reorder_models(&provider, vec![b.into()], true);
        assert_eq!(table_names(&ordered), vec!["a", "b"]);
        // The discovered dependency carries its full model.
        assert!(ordered[0].model().is_some());
    }

    #[test]
    fn test_unknown_dependency_is_emitted_as_raw_name() {
        let b = simple("b").relation(RelationDef::belongs_to("a", "fk_b_a", vec!["a_id"], vec!["id"]));

        let ordered = reorder_models(&(), vec![b.into()], true);
        assert_eq!(table_names(&ordered), vec!["a", "b"]);
        assert!(ordered[0].model().is_none());
    }
}
