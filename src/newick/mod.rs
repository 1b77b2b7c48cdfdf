//! Newick format parser and writer for gene trees.
//!
//! This module parses Newick format strings into [GeneTree]s and writes
//! them back, optionally with per-vertex annotation comments.
//!
//! # Quick API
//! * [`parse_str`] - parses a single string, returns a [GeneTree]
//! * [`parse_all_str`] - parses a semicolon-separated list of trees
//! * [`parse_file`] - parses a file of Newick strings
//! * [`to_newick`] / [`to_newick_with`] - serialize a tree (with comments)
//!
//! # Format
//! The Newick format has the following simple grammar:
//! * `tree ::= vertex ';'`
//! * `vertex ::= leaf | internal_vertex`
//! * `internal_vertex ::= '(' vertex (',' vertex)* ')' [name] [branch_length]`
//! * `leaf ::= label [branch_length]`
//! * `branch_length ::= ':' number`
//!
//! Furthermore:
//! * Internal vertices may have any positive number of children, so
//!   multifurcations and unary chains (e.g. `((A,B));`) parse as written
//! * A name on an internal vertex (commonly a support value) is discarded
//! * Whitespace can occur between elements,
//!   just not within an unquoted label or a branch_length
//! * Comments are square brackets and can occur anywhere whitespace can,
//!   including `[&key=value,...]` annotation comments, which are skipped
//!   on input (the [writer](to_newick_with) can emit them)
//! * Labels may be single quoted, with `''` as escaped quote

pub mod error;
pub mod parser;
pub mod writer;

pub use error::{NewickError, NewickErrorKind};
pub use writer::{escape_label, to_newick, to_newick_with};

use crate::model::GeneTree;
use parser::Cursor;
use std::path::Path;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a single Newick string to obtain a [GeneTree].
///
/// # Arguments
/// * `newick` - The Newick format string to parse
///
/// # Returns
/// * [GeneTree] - Tree parsed from the string
/// * [NewickError] - If the string is not valid Newick format
///
/// # Example
/// ```
/// use plect::newick::parse_str;
///
/// let tree = parse_str("((gallus_1_a,gallus_2_b),meleagris_1_c);")?;
/// assert_eq!(tree.num_leaves(), 3);
/// # Ok::<(), plect::newick::NewickError>(())
/// ```
pub fn parse_str<S: AsRef<str>>(newick: S) -> Result<GeneTree, NewickError> {
    let mut cursor = Cursor::for_str(newick.as_ref());
    parser::parse_tree(&mut cursor)
}

/// Parses a string containing a semicolon-separated list of Newick trees.
///
/// Multiple trees can appear on the same line or across multiple lines,
/// and `[...]` comments and whitespace are fine.
///
/// # Arguments
/// * `newick` - String with zero or more semicolon-terminated Newick trees
///
/// # Returns
/// * `Vec<GeneTree>` - All parsed trees (empty for blank input)
/// * [NewickError] - If any tree fails to parse
pub fn parse_all_str<S: AsRef<str>>(newick: S) -> Result<Vec<GeneTree>, NewickError> {
    let mut cursor = Cursor::for_str(newick.as_ref());
    parser::parse_all(&mut cursor)
}

/// Parses a Newick file eagerly and returns all trees.
///
/// This is a convenience function to parse a file containing a
/// semicolon-separated list of Newick strings.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///   with semicolon-separated list of Newick strings
///
/// # Returns
/// * `Vec<GeneTree>` - All parsed trees
/// * [NewickError] - If file reading fails or Newick format is invalid
///
/// # Example
/// ```no_run
/// use plect::newick::parse_file;
///
/// let trees = parse_file("gene_families.nwk")?;
/// println!("Parsed {} trees", trees.len());
/// # Ok::<(), plect::newick::NewickError>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<GeneTree>, NewickError> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| NewickError::bare(NewickErrorKind::Io(e.to_string())))?;
    parse_all_str(source)
}
