//! Per-vertex locus coverage: the partial locus coverage tree.

use crate::model::tree::VertexIndex;
use crate::model::GeneTree;
use crate::reconcile::group::Groupings;
use crate::reconcile::label::Label;
use std::collections::BTreeSet;

// =#========================================================================#=
// COVERAGE TABLE
// =#========================================================================#=
/// Side table mapping each vertex of a tree to the set of [Label]s whose
/// propagation path passes through it.
///
/// Stored as a vector parallel to the tree's vertex arena, keyed by
/// [VertexIndex], so the annotation lives outside the tree itself and the
/// caller's tree is never mutated. Every vertex starts with an empty set.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageTable {
    labels: Vec<BTreeSet<Label>>,
}

impl CoverageTable {
    /// Creates a table with an empty label set for every vertex of `tree`.
    pub fn empty_for(tree: &GeneTree) -> Self {
        CoverageTable {
            labels: vec![BTreeSet::new(); tree.num_vertices()],
        }
    }

    /// Returns the labels covering the given vertex.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn labels_of(&self, vertex: VertexIndex) -> &BTreeSet<Label> {
        &self.labels[vertex]
    }

    /// Returns whether any label covers the given vertex.
    pub fn is_covered(&self, vertex: VertexIndex) -> bool {
        !self.labels[vertex].is_empty()
    }

    /// Returns the number of vertex slots in this table.
    pub fn num_vertices(&self) -> usize {
        self.labels.len()
    }

    fn add(&mut self, vertex: VertexIndex, label: Label) {
        self.labels[vertex].insert(label);
    }
}

// ============================================================================
// Propagation
// ============================================================================
/// Propagates each label onto the branches between its leaves and their
/// lowest common ancestor, producing the partial locus coverage tree.
///
/// For each (label, leaf list) group, the walk from a leaf visits the leaf,
/// its parent, and so on up to but *excluding* the LCA of the group. A label
/// whose group has a single leaf is its own LCA, so the walk adds nothing:
/// singleton loci never mark any branch and can never participate in a
/// conflict edge.
///
/// # Arguments
/// * `tree` - The gene tree
/// * `groupings` - Leaves grouped by label, as from
///   [group_leaves](crate::reconcile::group::group_leaves)
pub fn propagate_labels(tree: &GeneTree, groupings: &Groupings) -> CoverageTable {
    let mut coverage = CoverageTable::empty_for(tree);

    for (label, leaves) in groupings {
        let Some(lca) = tree.lca(leaves) else {
            continue;
        };

        for &leaf in leaves {
            // Walk visits leaf, leaf.parent, ... and stops before the LCA
            for vertex in tree.ancestors(leaf) {
                if vertex == lca {
                    break;
                }
                coverage.add(vertex, label.clone());
            }
        }
    }

    coverage
}
