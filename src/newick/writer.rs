//! Newick format writing for gene trees.

use crate::model::tree::{GeneTree, VertexIndex};
use crate::model::vertex::BranchLength;

/// Returns the Newick representation of this tree with closing semicolon.
///
/// # Arguments
/// * `tree` - The [GeneTree] to serialize
///
/// # Returns
/// A Newick format string terminated with `;`. Returns an empty string for
/// a tree without a root.
///
/// # Example
/// ```
/// use plect::model::GeneTree;
/// use plect::newick::to_newick;
///
/// let mut tree = GeneTree::new();
/// let a = tree.add_leaf("A".to_string(), None);
/// let b = tree.add_leaf("B".to_string(), None);
/// let root = tree.add_internal(vec![a, b], None);
/// tree.set_root(root);
///
/// assert_eq!(to_newick(&tree), "(A,B);");
/// ```
pub fn to_newick(tree: &GeneTree) -> String {
    to_newick_with(tree, |_| None)
}

/// Returns the Newick representation of this tree, attaching an
/// extended-Newick comment `[&...]` to each vertex for which `comment`
/// returns text.
///
/// The comment is placed after a leaf's name or an internal vertex's closing
/// parenthesis and before the branch length, matching the
/// `[&key=value,...]` annotation convention of extended Newick strings.
///
/// # Arguments
/// * `tree` - The [GeneTree] to serialize
/// * `comment` - Called per vertex; returns the comment body (without
///   brackets) or `None` for no comment
pub fn to_newick_with<F>(tree: &GeneTree, comment: F) -> String
where
    F: Fn(VertexIndex) -> Option<String>,
{
    if !tree.is_root_set() {
        return String::new();
    }

    let mut newick = String::with_capacity(tree.num_vertices() * 12);
    build_newick(tree, &mut newick, tree.root_index(), &comment);
    newick.push(';');
    newick
}

/// Recursive helper for building the Newick string.
fn build_newick<F>(tree: &GeneTree, newick: &mut String, index: VertexIndex, comment: &F)
where
    F: Fn(VertexIndex) -> Option<String>,
{
    let vertex = &tree[index];

    if let Some(children) = vertex.children() {
        newick.push('(');
        for (i, &child) in children.iter().enumerate() {
            if i > 0 {
                newick.push(',');
            }
            build_newick(tree, newick, child, comment);
        }
        newick.push(')');
    } else if let Some(name) = vertex.name() {
        newick.push_str(&escape_label(name));
    }

    if let Some(text) = comment(index) {
        newick.push_str("[&");
        newick.push_str(&text);
        newick.push(']');
    }

    build_newick_branch_length(newick, vertex.branch_length());
}

/// Helper for adding branch lengths
fn build_newick_branch_length(newick: &mut String, branch_length: Option<BranchLength>) {
    if let Some(branch_length) = branch_length {
        newick.push(':');
        newick.push_str(&branch_length.to_string());
    }
}

/// Escapes a label for safe use in Newick strings.
///
/// Labels containing delimiter characters are wrapped in single quotes, with
/// internal single quotes escaped by doubling them. Other labels are
/// returned verbatim; in particular underscores are kept as-is, since leaf
/// names may encode fields separated by `_`.
///
/// # Examples
/// ```
/// # use plect::newick::escape_label;
/// assert_eq!(escape_label("Pukeko"), "Pukeko");
/// assert_eq!(escape_label("gallus_g1_a"), "gallus_g1_a");
/// assert_eq!(escape_label("Pu[ke]ko"), "'Pu[ke]ko'");
/// assert_eq!(escape_label("Baillon's Crake"), "'Baillon''s Crake'");
/// ```
pub fn escape_label(label: &str) -> String {
    let needs_quoting = label.chars().any(|c| {
        matches!(
            c,
            ' ' | ',' | ';' | '\t' | '\n' | '\r' | '(' | ')' | ':' | '[' | ']' | '\''
        )
    });

    if needs_quoting {
        format!("'{}'", label.replace('\'', "''"))
    } else {
        label.to_string()
    }
}
