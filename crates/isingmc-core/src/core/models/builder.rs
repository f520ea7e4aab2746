use super::graph::{GraphModel, ValidationError};
use super::terms::{EdgeTerm, NodeTerm};

/// Incremental construction of a [`GraphModel`].
///
/// Terms are accumulated in insertion order; all invariants are checked once in
/// [`GraphModelBuilder::build`].
pub struct GraphModelBuilder {
    num_spins: usize,
    declared_weights: usize,
    node_terms: Vec<NodeTerm>,
    edge_terms: Vec<EdgeTerm>,
}

impl GraphModelBuilder {
    pub fn new(num_spins: usize, declared_weights: usize) -> Self {
        Self {
            num_spins,
            declared_weights,
            node_terms: Vec::new(),
            edge_terms: Vec::new(),
        }
    }

    pub fn add_node(&mut self, spin: usize, weight: i64) -> &mut Self {
        self.node_terms.push(NodeTerm::new(spin, weight));
        self
    }

    pub fn add_edge(&mut self, u: usize, v: usize, weight: i64) -> &mut Self {
        self.edge_terms.push(EdgeTerm::new(u, v, weight));
        self
    }

    /// Routes a raw `(u, v, weight)` triple: equal endpoints form a node term,
    /// distinct endpoints an edge term.
    pub fn add_term(&mut self, u: usize, v: usize, weight: i64) -> &mut Self {
        if u == v {
            self.add_node(u, weight)
        } else {
            self.add_edge(u, v, weight)
        }
    }

    pub fn num_terms(&self) -> usize {
        self.node_terms.len() + self.edge_terms.len()
    }

    pub fn build(self) -> Result<GraphModel, ValidationError> {
        GraphModel::new(
            self.num_spins,
            self.declared_weights,
            self.node_terms,
            self.edge_terms,
        )
    }
}
