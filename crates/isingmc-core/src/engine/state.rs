use super::error::EngineError;
use crate::core::models::spin::SpinConfiguration;
use std::cmp::Ordering;

/// A scored configuration together with the iteration that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub iteration: u64,
    pub energy: i64,
    pub configuration: SpinConfiguration,
}

impl Candidate {
    /// Lower energy ranks first; among equal energies the earlier iteration does.
    fn rank(&self, other: &Self) -> Ordering {
        self.energy
            .cmp(&other.energy)
            .then(self.iteration.cmp(&other.iteration))
    }
}

/// Streaming minimum over scored configurations.
///
/// Holds at most one configuration at a time. A candidate replaces the current
/// best only when its energy is strictly lower, so the first occurrence of the
/// minimum is the one retained.
#[derive(Debug, Clone, Default)]
pub struct RunningMinimum {
    best: Option<Candidate>,
    evaluated: u64,
}

impl RunningMinimum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one evaluated configuration. Returns `true` if it became the new best.
    pub fn offer(&mut self, iteration: u64, energy: i64, configuration: SpinConfiguration) -> bool {
        self.evaluated += 1;
        let improves = self.best.as_ref().is_none_or(|best| energy < best.energy);
        if improves {
            self.best = Some(Candidate {
                iteration,
                energy,
                configuration,
            });
        }
        improves
    }

    /// Combines two partial minima computed over disjoint iteration ranges.
    ///
    /// The result is the same as if every iteration had been offered to a single
    /// tracker in iteration order.
    pub fn merge(self, other: Self) -> Self {
        let evaluated = self.evaluated + other.evaluated;
        let best = match (self.best, other.best) {
            (Some(a), Some(b)) => Some(if b.rank(&a) == Ordering::Less { b } else { a }),
            (a, b) => a.or(b),
        };
        Self { best, evaluated }
    }

    pub fn best(&self) -> Option<&Candidate> {
        self.best.as_ref()
    }

    pub fn evaluated(&self) -> u64 {
        self.evaluated
    }

    /// Finalizes the search.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Computation`] if nothing was ever evaluated.
    pub fn into_result(self) -> Result<SearchResult, EngineError> {
        let best = self.best.ok_or_else(|| {
            EngineError::Computation("no spin configuration was evaluated".to_string())
        })?;
        Ok(SearchResult {
            energy: best.energy,
            configuration: best.configuration,
            best_iteration: best.iteration,
            iterations: self.evaluated,
        })
    }
}

/// Outcome of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub energy: i64,
    pub configuration: SpinConfiguration,
    /// Zero-based iteration at which the minimum was first sampled.
    pub best_iteration: u64,
    /// Number of configurations evaluated.
    pub iterations: u64,
}
