use super::terms::{EdgeTerm, NodeTerm};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("A spin system must declare at least one spin")]
    NoSpins,
    #[error("Found {node_terms} node terms but only {num_spins} spins were declared")]
    TooManyNodeTerms { node_terms: usize, num_spins: usize },
    #[error("Found {supplied} node and edge weights but only {declared} were declared")]
    TooManyWeights { supplied: usize, declared: usize },
    #[error("Spin index {index} is out of range for a system of {num_spins} spins")]
    SpinIndexOutOfRange { index: usize, num_spins: usize },
    #[error("Edge term couples spin {index} to itself")]
    SelfCoupling { index: usize },
    #[error("Sum of absolute weights ({total}) exceeds the 64-bit energy range")]
    WeightOverflow { total: u128 },
}

/// Validated, immutable description of an Ising spin system.
///
/// Construction checks, in order:
/// 1. at least one spin is declared;
/// 2. there are no more node terms than spins;
/// 3. node plus edge terms do not exceed the declared weight count;
/// 4. every referenced spin index lies in `[0, num_spins)`;
/// 5. no edge couples a spin to itself;
/// 6. the sum of absolute weights fits in an `i64`, which bounds every energy.
///
/// Once built the model exposes read-only accessors only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphModel {
    num_spins: usize,
    declared_weights: usize,
    node_terms: Vec<NodeTerm>,
    edge_terms: Vec<EdgeTerm>,
}

impl GraphModel {
    pub fn new(
        num_spins: usize,
        declared_weights: usize,
        node_terms: Vec<NodeTerm>,
        edge_terms: Vec<EdgeTerm>,
    ) -> Result<Self, ValidationError> {
        if num_spins == 0 {
            return Err(ValidationError::NoSpins);
        }
        if node_terms.len() > num_spins {
            return Err(ValidationError::TooManyNodeTerms {
                node_terms: node_terms.len(),
                num_spins,
            });
        }
        let supplied = node_terms.len() + edge_terms.len();
        if supplied > declared_weights {
            return Err(ValidationError::TooManyWeights {
                supplied,
                declared: declared_weights,
            });
        }

        let check_index = |index: usize| {
            if index < num_spins {
                Ok(())
            } else {
                Err(ValidationError::SpinIndexOutOfRange { index, num_spins })
            }
        };
        for node in &node_terms {
            check_index(node.spin)?;
        }
        for edge in &edge_terms {
            check_index(edge.u)?;
            check_index(edge.v)?;
            if edge.is_self_coupling() {
                return Err(ValidationError::SelfCoupling { index: edge.u });
            }
        }

        let total: u128 = node_terms
            .iter()
            .map(|node| node.weight)
            .chain(edge_terms.iter().map(|edge| edge.weight))
            .map(|weight| u128::from(weight.unsigned_abs()))
            .sum();
        if total > i64::MAX as u128 {
            return Err(ValidationError::WeightOverflow { total });
        }

        Ok(Self {
            num_spins,
            declared_weights,
            node_terms,
            edge_terms,
        })
    }

    #[inline]
    pub fn num_spins(&self) -> usize {
        self.num_spins
    }

    #[inline]
    pub fn declared_weights(&self) -> usize {
        self.declared_weights
    }

    #[inline]
    pub fn node_terms(&self) -> &[NodeTerm] {
        &self.node_terms
    }

    #[inline]
    pub fn edge_terms(&self) -> &[EdgeTerm] {
        &self.edge_terms
    }

    /// Total number of node and edge terms actually present.
    pub fn num_terms(&self) -> usize {
        self.node_terms.len() + self.edge_terms.len()
    }
}
