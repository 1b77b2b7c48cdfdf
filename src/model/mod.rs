//! Data model for gene trees.
//!
//! # Tree representation
//! Trees are represented by [GeneTree], which uses the arena pattern to
//! store [Vertex] nodes. Each vertex is either `Internal` or `Leaf`,
//! referenced by [VertexIndex]; the root is the vertex without a parent.
//! Internal vertices may have any positive number of children, so
//! multifurcating trees and unary chains are representable, and a tree may
//! degenerate to a single leaf or be entirely empty.
//!
//! # Building trees
//! Trees are typically constructed by the [Newick parser](crate::newick),
//! bottom-up via [`GeneTree::add_leaf`] and [`GeneTree::add_internal`],
//! finished with [`GeneTree::set_root`].
//!
//! # Navigation
//! Besides parent/child accessors, [GeneTree] offers pre-order traversal,
//! stable left-to-right leaf enumeration, ancestor walks and lowest common
//! ancestor queries — the operations the
//! [reconciliation pipeline](crate::reconcile) is built on.

pub mod tree;
pub mod vertex;

pub use tree::GeneTree;
pub use tree::VertexIndex;
pub use vertex::BranchLength;
pub use vertex::Vertex;
