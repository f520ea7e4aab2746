use super::term::EnergyTerm;
use crate::core::models::graph::GraphModel;
use crate::core::models::spin::SpinConfiguration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Configuration has {actual} spins but the model declares {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Evaluates spin configurations against a fixed [`GraphModel`].
///
/// Node contributions look up the configuration at the node term's declared spin
/// index, not at the term's position in the node-term sequence. The sums cannot
/// overflow: [`GraphModel`] bounds the total absolute weight by `i64::MAX`.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    model: &'a GraphModel,
}

impl<'a> Scorer<'a> {
    pub fn new(model: &'a GraphModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &'a GraphModel {
        self.model
    }

    /// Scores `configuration`, keeping node and edge contributions separate.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::LengthMismatch`] if the configuration does not have
    /// exactly one value per declared spin.
    pub fn score(&self, configuration: &SpinConfiguration) -> Result<EnergyTerm, ScoringError> {
        if configuration.len() != self.model.num_spins() {
            return Err(ScoringError::LengthMismatch {
                expected: self.model.num_spins(),
                actual: configuration.len(),
            });
        }

        let spins = configuration.values();
        let node: i64 = self
            .model
            .node_terms()
            .iter()
            .map(|term| term.weight * i64::from(spins[term.spin]))
            .sum();
        let edge: i64 = self
            .model
            .edge_terms()
            .iter()
            .map(|term| term.weight * i64::from(spins[term.u]) * i64::from(spins[term.v]))
            .sum();

        Ok(EnergyTerm { node, edge })
    }

    #[inline]
    pub fn energy(&self, configuration: &SpinConfiguration) -> Result<i64, ScoringError> {
        self.score(configuration).map(|term| term.total())
    }
}

/// Convenience wrapper around [`Scorer::energy`].
pub fn energy(model: &GraphModel, configuration: &SpinConfiguration) -> Result<i64, ScoringError> {
    Scorer::new(model).energy(configuration)
}
