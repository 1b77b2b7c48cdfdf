//! Error type for the reconciliation pipeline's validated boundary.

use crate::reconcile::label::MappingMode;
use thiserror::Error;

/// Error raised while mapping leaf names to (species, locus) labels.
///
/// Both kinds are unrecoverable for the call: a single malformed leaf name
/// invalidates the whole analysis, which aborts without partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// A leaf name did not split into exactly the three expected fields
    /// under the chosen mapping mode.
    #[error("leaf name '{name}' does not split into 3 fields under mapping mode '{mode}'")]
    LeafFieldCount {
        /// The offending leaf name
        name: String,
        /// The mapping mode it was split under
        mode: MappingMode,
    },

    /// The mapping mode string is not one of the recognized values.
    #[error("mapping mode not supported: '{0}' (expected one of: sli, sil, sli_, sil_)")]
    UnknownMode(String),
}
