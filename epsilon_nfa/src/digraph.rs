use crate::nfa::StateId;

/// A directed graph over the vertices `0..vertex_count`.
///
/// This is just an adjacency list. Parallel edges and self loops are
/// allowed; traversals are expected to keep their own visited markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph {
    adj: Vec<Vec<StateId>>,
    edges: usize,
}

impl Digraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self { adj: vec![Vec::new(); vertex_count], edges: 0 }
    }

    /// Adds the edge `from -> to`.
    ///
    /// # Panics
    ///
    /// If either vertex is out of range.
    pub fn add_edge(&mut self, from: StateId, to: StateId) {
        assert!(
            to < self.adj.len(),
            "vertex {} out of range for graph with {} vertices",
            to,
            self.adj.len()
        );
        self.adj[from].push(to);
        self.edges += 1;
    }

    /// Returns the successors of `vertex`, in insertion order.
    #[inline]
    pub fn adjacent(&self, vertex: StateId) -> &[StateId] {
        &self.adj[vertex]
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }
}
