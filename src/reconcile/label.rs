//! Species-locus labels and leaf-name mapping modes.

use crate::reconcile::error::FormatError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// =#========================================================================#=
// LABEL
// =#========================================================================#=
/// A sampled gene copy's species of origin and locus of origin.
///
/// Equality, ordering and hashing are structural, lexicographic on
/// `(species, locus)`, so labels can key maps and sets and sorted label
/// sequences are canonical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Label {
    /// Species of origin
    pub species: String,
    /// Locus of origin within the species
    pub locus: String,
}

impl Label {
    /// Creates a new label.
    pub fn new<S: Into<String>, L: Into<String>>(species: S, locus: L) -> Self {
        Label {
            species: species.into(),
            locus: locus.into(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.species, self.locus)
    }
}

// =#========================================================================#=
// MAPPING MODE
// =#========================================================================#=
/// How a leaf name encodes its (species, locus, individual) fields.
///
/// Four modes are supported, differing in field order and separator
/// character:
///
/// | Mode string | Leaf name format |
/// |-------------|------------------|
/// | `sli` | `species-locus-individual` |
/// | `sil` | `species-individual-locus` |
/// | `sli_` | `species_locus_individual` |
/// | `sil_` | `species_individual_locus` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MappingMode {
    /// `species-locus-individual`
    SpeciesLocusIndividual,
    /// `species-individual-locus`
    SpeciesIndividualLocus,
    /// `species_locus_individual`
    SpeciesLocusIndividualUnderscore,
    /// `species_individual_locus`
    SpeciesIndividualLocusUnderscore,
}

impl MappingMode {
    /// Returns the separator character between the fields of a leaf name.
    pub fn separator(&self) -> char {
        match self {
            MappingMode::SpeciesLocusIndividual | MappingMode::SpeciesIndividualLocus => '-',
            MappingMode::SpeciesLocusIndividualUnderscore
            | MappingMode::SpeciesIndividualLocusUnderscore => '_',
        }
    }

    /// Returns whether the locus field comes before the individual field.
    fn locus_first(&self) -> bool {
        matches!(
            self,
            MappingMode::SpeciesLocusIndividual | MappingMode::SpeciesLocusIndividualUnderscore
        )
    }

    /// Splits a leaf name into its (species, locus) [Label].
    ///
    /// The name must split into exactly 3 fields under this mode's
    /// separator; the individual field is not part of the label.
    ///
    /// # Arguments
    /// * `name` - The leaf name to split
    ///
    /// # Errors
    /// [FormatError::LeafFieldCount] naming the offending leaf and mode if
    /// the name does not have exactly 3 fields.
    pub fn parse_label(&self, name: &str) -> Result<Label, FormatError> {
        let fields: Vec<&str> = name.split(self.separator()).collect();
        match fields.as_slice() {
            [species, second, third] => {
                let locus = if self.locus_first() { second } else { third };
                Ok(Label::new(*species, *locus))
            }
            _ => Err(FormatError::LeafFieldCount {
                name: name.to_string(),
                mode: *self,
            }),
        }
    }

    /// Returns the mode string, as accepted by [FromStr].
    pub fn as_str(&self) -> &'static str {
        match self {
            MappingMode::SpeciesLocusIndividual => "sli",
            MappingMode::SpeciesIndividualLocus => "sil",
            MappingMode::SpeciesLocusIndividualUnderscore => "sli_",
            MappingMode::SpeciesIndividualLocusUnderscore => "sil_",
        }
    }
}

impl fmt::Display for MappingMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MappingMode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sli" => Ok(MappingMode::SpeciesLocusIndividual),
            "sil" => Ok(MappingMode::SpeciesIndividualLocus),
            "sli_" => Ok(MappingMode::SpeciesLocusIndividualUnderscore),
            "sil_" => Ok(MappingMode::SpeciesIndividualLocusUnderscore),
            other => Err(FormatError::UnknownMode(other.to_string())),
        }
    }
}
