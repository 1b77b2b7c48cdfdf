//! The label conflict graph (LEG) over a tree's labels.

use crate::reconcile::coverage::CoverageTable;
use crate::reconcile::group::Groupings;
use crate::reconcile::label::Label;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Dfs;
use std::collections::HashMap;

// =#========================================================================#=
// LABEL GRAPH
// =#========================================================================#=
/// Undirected simple graph over [Label]s; an edge means the two labels'
/// coverage paths share a branch of the tree.
///
/// Thin wrapper around a petgraph [UnGraph], keeping a label-to-node map so
/// nodes are unique per label and edge insertion by label is idempotent.
#[derive(Debug, Clone, Default)]
pub struct LabelGraph {
    graph: UnGraph<Label, ()>,
    indices: HashMap<Label, NodeIndex>,
}

impl LabelGraph {
    /// Creates a new, empty label graph.
    pub fn new() -> Self {
        LabelGraph {
            graph: UnGraph::default(),
            indices: HashMap::new(),
        }
    }

    /// Adds a node for `label` if not yet present and returns its index.
    pub fn add_label(&mut self, label: &Label) -> NodeIndex {
        match self.indices.get(label) {
            Some(&index) => index,
            None => {
                let index = self.graph.add_node(label.clone());
                self.indices.insert(label.clone(), index);
                index
            }
        }
    }

    /// Adds an edge between two labels, adding their nodes if necessary.
    /// Re-adding an existing edge is a no-op (the graph stays simple).
    pub fn connect(&mut self, a: &Label, b: &Label) {
        let node_a = self.add_label(a);
        let node_b = self.add_label(b);
        self.graph.update_edge(node_a, node_b, ());
    }

    /// Returns whether the graph has a node for `label`.
    pub fn contains(&self, label: &Label) -> bool {
        self.indices.contains_key(label)
    }

    /// Returns whether the two labels are connected by an edge.
    pub fn has_edge(&self, a: &Label, b: &Label) -> bool {
        match (self.indices.get(a), self.indices.get(b)) {
            (Some(&node_a), Some(&node_b)) => self.graph.contains_edge(node_a, node_b),
            _ => false,
        }
    }

    /// Returns the number of labels (nodes) in the graph.
    pub fn num_labels(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    pub fn num_edges(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns an iterator over the labels in the graph.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.graph.node_weights()
    }

    /// Enumerates the connected components of the graph, each as the list
    /// of labels it contains. Isolated labels form singleton components.
    pub fn components(&self) -> Vec<Vec<Label>> {
        let mut components = Vec::new();
        // Node indices are contiguous since nodes are never removed
        let mut seen = vec![false; self.graph.node_count()];

        for start in self.graph.node_indices() {
            if seen[start.index()] {
                continue;
            }

            let mut component = Vec::new();
            let mut dfs = Dfs::new(&self.graph, start);
            while let Some(node) = dfs.next(&self.graph) {
                seen[node.index()] = true;
                component.push(self.graph[node].clone());
            }
            components.push(component);
        }

        components
    }
}

// ============================================================================
// Construction from coverage
// ============================================================================
/// Builds the label conflict graph from a coverage table and groupings.
///
/// One node is created per distinct label of the groupings, so labels that
/// received no coverage are still represented as isolated nodes. Then, for
/// every tree vertex covered by two or more labels, an edge is added
/// between every unordered pair of them (a clique over the vertex's label
/// set); duplicate edges across vertices are no-ops.
///
/// # Arguments
/// * `coverage` - Per-vertex label coverage, as from
///   [propagate_labels](crate::reconcile::coverage::propagate_labels)
/// * `groupings` - Leaves grouped by label (the label universe)
pub fn build_label_graph(coverage: &CoverageTable, groupings: &Groupings) -> LabelGraph {
    let mut leg = LabelGraph::new();

    for label in groupings.keys() {
        leg.add_label(label);
    }

    for vertex in 0..coverage.num_vertices() {
        let labels: Vec<&Label> = coverage.labels_of(vertex).iter().collect();
        for i in 0..labels.len() {
            for j in (i + 1)..labels.len() {
                leg.connect(labels[i], labels[j]);
            }
        }
    }

    leg
}
