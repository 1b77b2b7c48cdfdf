//! Grouping of a tree's leaves by (species, locus) label.

use crate::model::tree::VertexIndex;
use crate::model::GeneTree;
use crate::reconcile::error::FormatError;
use crate::reconcile::label::{Label, MappingMode};
use indexmap::IndexMap;

/// Leaves of a tree grouped by [Label].
///
/// Iteration order is insertion order, i.e. the order in which labels first
/// appear during leaf traversal. Leaves sharing a label are listed in
/// traversal order. Downstream correctness never depends on this order;
/// canonical output ordering comes from [Label]'s lexicographic `Ord`.
pub type Groupings = IndexMap<Label, Vec<VertexIndex>>;

/// Groups the tree's leaves by their (species, locus) label.
///
/// Single pass over the leaves in stable left-to-right traversal order.
///
/// # Arguments
/// * `tree` - The gene tree whose leaves to group
/// * `mapping` - How leaf names encode their fields
///
/// # Errors
/// [FormatError::LeafFieldCount] if any leaf name does not split into
/// exactly 3 fields under `mapping`. A single malformed leaf invalidates
/// the whole analysis; no leaves are skipped silently.
pub fn group_leaves(tree: &GeneTree, mapping: MappingMode) -> Result<Groupings, FormatError> {
    let mut groupings = Groupings::new();
    for leaf in tree.leaves() {
        let name = leaf.name().expect("leaf vertex has a name");
        let label = mapping.parse_label(name)?;
        groupings.entry(label).or_default().push(leaf.index());
    }
    Ok(groupings)
}
