//! Plect detects locus conflicts in multi-locus gene trees.
//!
//! Given a gene tree in which each leaf names its species, locus and
//! individual, this crate decides whether the tree is *reconcilable*:
//! whether the topology is consistent with each species carrying exactly
//! one evolutionary history per locus, or whether loci interleave on the
//! tree in a way that signals a labeling or orthology conflict.
//! Core functionality provided:
//! - Reconciliation check: [`reconcile::check_reconciliation`] runs the
//!   conflict-detection pipeline (leaf grouping, label propagation, label
//!   conflict graph, conflicting components) and returns a structured
//!   result with optional diagnostics.
//! - Tree model: [`GeneTree`] stores vertices in an arena with
//!   parent/child navigation, stable leaf enumeration, ancestor walks and
//!   LCA queries. Multifurcations and unary chains are supported.
//!   See [`crate::model`] for details.
//! - Newick I/O: parse single strings or whole files of semicolon-separated
//!   trees, and write trees back, optionally with per-vertex conflict flags
//!   as `[&...]` annotation comments. See [`crate::newick`].
//!
//! Limitations:
//! - Leaf names must encode exactly three fields (species, locus,
//!   individual) under one of the four [MappingMode]s
//! - Trees are checked as given; conflicting trees are not repaired
//!
//! # Usage patterns
//! 1. The crate root provides quick access to parsing with default
//!    settings, see [`parse_newick_str`] and [`parse_newick_file`].
//! 2. Configure the check via [`ReconcileOptions`] for diagnostics beyond
//!    the boolean verdict.
//!
//! ## Example
//!
//! Check a single gene tree:
//! ```
//! use plect::{check_reconciliation, parse_newick_str, MappingMode, ReconcileOptions};
//!
//! let tree = parse_newick_str("((gallus-1-a,gallus-1-b),(meleagris-1-a,meleagris-2-a));")?;
//! let result = check_reconciliation(
//!     &tree,
//!     MappingMode::SpeciesLocusIndividual,
//!     &ReconcileOptions::new(),
//! )?;
//! assert!(result.is_reconcilable);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod model;
pub mod newick;
pub mod reconcile;

pub use model::GeneTree;
pub use reconcile::check_reconciliation;
pub use reconcile::{Label, MappingMode, Reconciliation, ReconcileOptions};

use crate::newick::NewickError;
use std::path::Path;

// ============================================================================
// Quick Newick API
// ============================================================================
/// Parse a single Newick string, returning a [GeneTree].
///
/// See [`newick::parse_str`] for full documentation of this convenience function.
pub fn parse_newick_str<S: AsRef<str>>(newick: S) -> Result<GeneTree, NewickError> {
    newick::parse_str(newick)
}

/// Parse a file containing a semicolon-separated list of Newick strings,
/// returning a vector of [GeneTree].
///
/// See [`newick::parse_file`] for full documentation of this convenience function.
pub fn parse_newick_file<P: AsRef<Path>>(path: P) -> Result<Vec<GeneTree>, NewickError> {
    newick::parse_file(path)
}
