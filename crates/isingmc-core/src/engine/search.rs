use super::config::ConfigError;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::sampler::{RandomSpinSampler, SpinSampler};
use super::state::{RunningMinimum, SearchResult};
use super::utils::seeding::chunk_rng;
use crate::core::energy::scoring::Scorer;
use crate::core::models::graph::GraphModel;
use tracing::{debug, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Iterations between two `TaskIncrement` progress events.
const PROGRESS_STRIDE: u64 = 4_096;

/// Samples a fixed number of configurations and keeps the lowest-energy one.
///
/// Iterations are numbered from zero. On equal energies the configuration from
/// the lowest-numbered iteration wins, in both the sequential and the partitioned
/// run.
pub struct GroundStateSearch<'a> {
    model: &'a GraphModel,
    scorer: Scorer<'a>,
    budget: u64,
}

impl<'a> GroundStateSearch<'a> {
    pub fn new(model: &'a GraphModel, budget: u64) -> Self {
        Self {
            model,
            scorer: Scorer::new(model),
            budget,
        }
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    /// Runs the whole budget on the calling thread, drawing from `sampler`.
    #[instrument(skip_all, name = "ground_state_search", fields(budget = self.budget))]
    pub fn run(
        &self,
        sampler: &mut impl SpinSampler,
        reporter: &ProgressReporter,
    ) -> Result<SearchResult, EngineError> {
        self.ensure_budget()?;
        reporter.report(Progress::TaskStart {
            total_steps: self.budget,
        });

        let minimum = self.sample_range(sampler, 0, self.budget, reporter)?;

        reporter.report(Progress::TaskFinish);
        minimum.into_result()
    }

    /// Splits the budget into chunks of `chunk_size` iterations, each sampled from
    /// its own generator derived from `master_seed`, and merges the partial minima.
    ///
    /// With the `parallel` feature the chunks run on the rayon thread pool. The
    /// result depends only on `master_seed` and `chunk_size`, never on the number
    /// of threads.
    #[instrument(
        skip_all,
        name = "partitioned_ground_state_search",
        fields(budget = self.budget, chunk_size = chunk_size)
    )]
    pub fn run_partitioned(
        &self,
        master_seed: u64,
        chunk_size: u64,
        reporter: &ProgressReporter,
    ) -> Result<SearchResult, EngineError> {
        self.ensure_budget()?;
        if chunk_size == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "chunk_size",
                reason: "must be at least 1",
            }
            .into());
        }

        let num_chunks = self.budget.div_ceil(chunk_size);
        debug!(num_chunks, "Partitioned iteration budget into chunks.");
        reporter.report(Progress::TaskStart {
            total_steps: self.budget,
        });

        let run_chunk = |chunk: u64| -> Result<RunningMinimum, EngineError> {
            let start = chunk * chunk_size;
            let len = chunk_size.min(self.budget - start);
            let mut sampler = RandomSpinSampler::with_rng(chunk_rng(master_seed, chunk));
            self.sample_range(&mut sampler, start, len, reporter)
        };

        #[cfg(feature = "parallel")]
        let minimum = (0..num_chunks)
            .into_par_iter()
            .map(run_chunk)
            .try_reduce(RunningMinimum::new, |a, b| Ok(a.merge(b)))?;

        #[cfg(not(feature = "parallel"))]
        let minimum = (0..num_chunks)
            .map(run_chunk)
            .try_fold(RunningMinimum::new(), |acc, part| part.map(|p| acc.merge(p)))?;

        reporter.report(Progress::TaskFinish);
        minimum.into_result()
    }

    fn ensure_budget(&self) -> Result<(), EngineError> {
        if self.budget == 0 {
            return Err(EngineError::Computation(
                "iteration budget is zero; a model must have at least one spin".to_string(),
            ));
        }
        Ok(())
    }

    fn sample_range(
        &self,
        sampler: &mut impl SpinSampler,
        start: u64,
        len: u64,
        reporter: &ProgressReporter,
    ) -> Result<RunningMinimum, EngineError> {
        let num_spins = self.model.num_spins();
        let mut minimum = RunningMinimum::new();
        let mut pending = 0u64;

        for iteration in start..start + len {
            let configuration = sampler.sample(num_spins);
            let energy = self.scorer.energy(&configuration)?;
            if minimum.offer(iteration, energy, configuration) {
                trace!(iteration, energy, "New running minimum.");
            }

            pending += 1;
            if pending == PROGRESS_STRIDE {
                reporter.report(Progress::TaskIncrement { amount: pending });
                pending = 0;
            }
        }
        if pending > 0 {
            reporter.report(Progress::TaskIncrement { amount: pending });
        }

        Ok(minimum)
    }
}
