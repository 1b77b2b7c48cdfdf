//! Per-vertex conflict flags derived from coverage and conflict set.

use crate::model::tree::VertexIndex;
use crate::model::GeneTree;
use crate::reconcile::conflict::{has_multi_locus_species, ConflictSet};
use crate::reconcile::coverage::CoverageTable;
use crate::reconcile::label::Label;
use std::collections::BTreeSet;

// =#========================================================================#=
// NODE FLAGS
// =#========================================================================#=
/// Side table of per-vertex conflict flags, parallel to a tree's vertex
/// arena and keyed by [VertexIndex].
///
/// Two independent predicates are stored per covered vertex:
/// - `reconcilable_cc` (*global*): no label on this branch belongs to a
///   conflicting component of the label graph. Set for every vertex with
///   non-empty coverage.
/// - `reconcilable` (*local*): no species has two or more distinct loci
///   among this vertex's own labels (a same-branch multi-locus collision).
///   Set only for covered *internal* vertices; a leaf's label set is always
///   a single label, so there are no pairs to consider.
///
/// The two predicates are computed independently and can disagree.
/// Uncovered vertices have neither flag set.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeFlags {
    reconcilable_cc: Vec<Option<bool>>,
    reconcilable: Vec<Option<bool>>,
}

impl NodeFlags {
    fn new(num_vertices: usize) -> Self {
        NodeFlags {
            reconcilable_cc: vec![None; num_vertices],
            reconcilable: vec![None; num_vertices],
        }
    }

    /// Returns the global flag: whether no label covering this vertex is
    /// part of a conflicting component. `None` for uncovered vertices.
    pub fn reconcilable_cc(&self, vertex: VertexIndex) -> Option<bool> {
        self.reconcilable_cc[vertex]
    }

    /// Returns the local flag: whether this vertex's own labels contain no
    /// same-branch multi-locus collision. `None` for uncovered vertices
    /// and for leaves.
    pub fn reconcilable(&self, vertex: VertexIndex) -> Option<bool> {
        self.reconcilable[vertex]
    }

    /// Returns the number of vertex slots in this table.
    pub fn num_vertices(&self) -> usize {
        self.reconcilable_cc.len()
    }

    /// Renders this vertex's flags as the body of an extended-Newick
    /// `[&...]` comment, or `None` if no flag is set.
    ///
    /// # Example output
    /// `reconcilable=false,reconcilable_cc=false`
    pub fn comment(&self, vertex: VertexIndex) -> Option<String> {
        match (self.reconcilable[vertex], self.reconcilable_cc[vertex]) {
            (None, None) => None,
            (local, cc) => {
                let mut parts = Vec::new();
                if let Some(local) = local {
                    parts.push(format!("reconcilable={}", local));
                }
                if let Some(cc) = cc {
                    parts.push(format!("reconcilable_cc={}", cc));
                }
                Some(parts.join(","))
            }
        }
    }
}

// ============================================================================
// Annotation
// ============================================================================
/// Computes per-vertex conflict flags for every covered vertex of the tree.
///
/// First forms the union of all labels appearing in any conflicting
/// component; then, for every vertex with non-empty coverage, sets the
/// global `reconcilable_cc` flag, and for covered internal vertices
/// additionally the local `reconcilable` flag (see [NodeFlags]).
///
/// # Arguments
/// * `tree` - The gene tree
/// * `coverage` - Per-vertex label coverage
/// * `conflicts` - The conflicting components of the label graph
pub fn annotate_tree(
    tree: &GeneTree,
    coverage: &CoverageTable,
    conflicts: &ConflictSet,
) -> NodeFlags {
    let conflicting_labels: BTreeSet<&Label> =
        conflicts.iter().flat_map(|c| c.labels()).collect();

    let mut flags = NodeFlags::new(tree.num_vertices());
    for vertex in 0..tree.num_vertices() {
        let labels = coverage.labels_of(vertex);
        if labels.is_empty() {
            continue;
        }

        let in_conflicting_cc = labels.iter().any(|l| conflicting_labels.contains(l));
        flags.reconcilable_cc[vertex] = Some(!in_conflicting_cc);

        // A leaf always has a single label, so there are no pairs to consider
        if tree.vertex(vertex).is_leaf() {
            continue;
        }
        flags.reconcilable[vertex] = Some(!has_multi_locus_species(labels));
    }

    flags
}
