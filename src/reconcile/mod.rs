//! Conflict-detection pipeline deciding whether a gene tree is reconcilable.
//!
//! A gene tree with multiple sampled loci per species is *reconcilable* if
//! its topology is consistent with each species carrying exactly one
//! evolutionary history per locus. Loci that interleave on the tree signal a
//! labeling or orthology conflict.
//!
//! # Pipeline
//! [`check_reconciliation`] runs the stages leaves-first, each consuming the
//! previous stage's output:
//!
//! 1. [group::group_leaves] — parses leaf names into (species, locus)
//!    [Label]s and groups leaves by label.
//! 2. [coverage::propagate_labels] — marks, for each label, every branch
//!    between its leaves and their LCA as covered by the label
//!    (the partial locus coverage tree).
//! 3. [graph::build_label_graph] — derives the label conflict graph:
//!    two labels are connected if some vertex is covered by both.
//! 4. [conflict::find_conflicts] — flags connected components in which one
//!    species contributes two or more distinct loci.
//! 5. [annotate::annotate_tree] (optional) — computes per-vertex conflict
//!    flags for inspection and visualization.
//!
//! All stages are deterministic, synchronous and single-threaded; all
//! intermediate structures are created fresh per invocation and the
//! caller's tree is never mutated (annotations are side tables keyed by
//! vertex index).
//!
//! # Example
//! ```
//! use plect::newick::parse_str;
//! use plect::reconcile::{check_reconciliation, MappingMode, ReconcileOptions};
//!
//! let tree = parse_str("(((gallus-1-a1,gallus-2-b1),(gallus-1-a2,gallus-2-b2)));")?;
//! let options = ReconcileOptions::new().with_conflicts();
//! let result = check_reconciliation(&tree, MappingMode::SpeciesLocusIndividual, &options)?;
//!
//! assert!(!result.is_reconcilable);
//! assert_eq!(result.conflicts.unwrap().len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod annotate;
pub mod conflict;
pub mod coverage;
pub mod error;
pub mod graph;
pub mod group;
pub mod label;

pub use annotate::NodeFlags;
pub use conflict::{ConflictComponent, ConflictSet};
pub use coverage::CoverageTable;
pub use error::FormatError;
pub use graph::LabelGraph;
pub use group::Groupings;
pub use label::{Label, MappingMode};

use crate::model::GeneTree;
use tracing::debug;

// =#========================================================================#=
// RECONCILE OPTIONS
// =#========================================================================#=
/// Options for [check_reconciliation]: which optional stages to run and
/// which diagnostics to include in the result.
///
/// # Construction
/// * [`new()`](Self::new) — all options off (verdict only)
/// * [`with_annotation()`](Self::with_annotation) — compute per-vertex flags
/// * [`with_conflicts()`](Self::with_conflicts) — include the conflict set
/// * [`with_graph()`](Self::with_graph) — include the label conflict graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Compute per-vertex conflict flags and return coverage + flags
    pub annotate: bool,
    /// Include the canonicalized conflict set in the result
    pub include_conflicts: bool,
    /// Include the label conflict graph in the result
    pub include_graph: bool,
}

impl ReconcileOptions {
    /// Creates options with all optional outputs off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests per-vertex conflict flags (and the coverage table they are
    /// derived from) in the result.
    pub fn with_annotation(mut self) -> Self {
        self.annotate = true;
        self
    }

    /// Requests the canonicalized conflict set in the result.
    pub fn with_conflicts(mut self) -> Self {
        self.include_conflicts = true;
        self
    }

    /// Requests the label conflict graph in the result.
    pub fn with_graph(mut self) -> Self {
        self.include_graph = true;
        self
    }
}

// =#========================================================================#=
// RECONCILIATION RESULT
// =#========================================================================#=
/// Result bundle of a reconciliation check.
///
/// The boolean verdict is always present; the other fields are populated
/// only when requested via [ReconcileOptions].
#[derive(Debug, Clone)]
pub struct Reconciliation {
    /// Whether the tree contains no conflicting component
    pub is_reconcilable: bool,
    /// Conflicting components, canonicalized
    /// (only with [ReconcileOptions::with_conflicts])
    pub conflicts: Option<ConflictSet>,
    /// The label conflict graph
    /// (only with [ReconcileOptions::with_graph])
    pub graph: Option<LabelGraph>,
    /// Per-vertex label coverage
    /// (only with [ReconcileOptions::with_annotation])
    pub coverage: Option<CoverageTable>,
    /// Per-vertex conflict flags
    /// (only with [ReconcileOptions::with_annotation])
    pub flags: Option<NodeFlags>,
}

// ============================================================================
// Orchestrator (pub)
// ============================================================================
/// Checks whether the given gene tree is reconcilable.
///
/// Runs the full pipeline (grouping, propagation, graph construction,
/// conflict detection, and optionally annotation) and returns a
/// [Reconciliation] bundle. An empty or single-leaf tree degenerates
/// gracefully to a reconcilable verdict.
///
/// Invoking the pipeline twice on the same tree with the same mode yields
/// an identical verdict and identical canonicalized conflict set.
///
/// # Arguments
/// * `tree` - The gene tree to check
/// * `mapping` - How leaf names encode their (species, locus, individual)
///   fields
/// * `options` - Which optional stages to run and diagnostics to include
///
/// # Errors
/// [FormatError] if any leaf name does not split into exactly 3 fields
/// under `mapping`. The call aborts without partial results.
pub fn check_reconciliation(
    tree: &GeneTree,
    mapping: MappingMode,
    options: &ReconcileOptions,
) -> Result<Reconciliation, FormatError> {
    let groupings = group::group_leaves(tree, mapping)?;
    debug!(
        leaves = tree.num_leaves(),
        labels = groupings.len(),
        "grouped leaves"
    );

    let coverage = coverage::propagate_labels(tree, &groupings);
    let leg = graph::build_label_graph(&coverage, &groupings);
    debug!(
        nodes = leg.num_labels(),
        edges = leg.num_edges(),
        "built label conflict graph"
    );

    let conflicts = conflict::find_conflicts(&leg);
    let is_reconcilable = conflicts.is_empty();
    debug!(
        conflicting_components = conflicts.len(),
        reconcilable = is_reconcilable,
        "checked components"
    );

    let (coverage, flags) = if options.annotate {
        let flags = annotate::annotate_tree(tree, &coverage, &conflicts);
        (Some(coverage), Some(flags))
    } else {
        (None, None)
    };

    Ok(Reconciliation {
        is_reconcilable,
        conflicts: options.include_conflicts.then_some(conflicts),
        graph: options.include_graph.then_some(leg),
        coverage,
        flags,
    })
}
