use crate::core::encoding::encode;
use crate::core::models::graph::GraphModel;
use crate::core::models::spin::SpinConfiguration;
use crate::engine::budget::{LARGE_SYSTEM_WARNING_SPINS, iteration_budget};
use crate::engine::config::SearchConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::search::GroundStateSearch;
use crate::engine::utils::seeding::fresh_master_seed;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundStateResult {
    pub energy: i64,
    pub configuration: SpinConfiguration,
    /// The configuration rendered as a `+`/`-` string.
    pub encoded_state: String,
    pub iterations: u64,
    pub best_iteration: u64,
    /// Master seed the run used. Feeding it back reproduces the result.
    pub seed: u64,
}

#[instrument(skip_all, name = "ground_state_workflow", fields(num_spins = model.num_spins()))]
pub fn run(
    model: &GraphModel,
    config: &SearchConfig,
    reporter: &ProgressReporter,
) -> Result<GroundStateResult, EngineError> {
    // === Phase 0: Budget ===
    reporter.report(Progress::PhaseStart {
        name: "Preparation",
    });
    if model.num_spins() > LARGE_SYSTEM_WARNING_SPINS {
        reporter.report(Progress::Message(format!(
            "{} spins: the 2^N sampling budget makes this a very long run",
            model.num_spins()
        )));
    }
    let budget = iteration_budget(
        model.num_spins(),
        config.samples_per_state,
        config.max_iterations,
    )?;
    let seed = config.seed.unwrap_or_else(fresh_master_seed);
    info!(
        budget,
        seed,
        node_terms = model.node_terms().len(),
        edge_terms = model.edge_terms().len(),
        "Prepared ground-state search."
    );
    reporter.report(Progress::PhaseFinish);

    // === Phase 1: Sampling ===
    reporter.report(Progress::PhaseStart { name: "Sampling" });
    let search = GroundStateSearch::new(model, budget);
    let result = search.run_partitioned(seed, config.chunk_size, reporter)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Encoding ===
    reporter.report(Progress::PhaseStart { name: "Encoding" });
    let encoded_state = encode(&result.configuration)?;
    reporter.report(Progress::PhaseFinish);

    info!(
        energy = result.energy,
        best_iteration = result.best_iteration,
        iterations = result.iterations,
        "Ground-state search complete."
    );

    Ok(GroundStateResult {
        energy: result.energy,
        configuration: result.configuration,
        encoded_state,
        iterations: result.iterations,
        best_iteration: result.best_iteration,
        seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::terms::{EdgeTerm, NodeTerm};
    use crate::engine::config::SearchConfigBuilder;
    use std::sync::Mutex;

    fn seeded(seed: u64) -> SearchConfig {
        SearchConfigBuilder::new().seed(Some(seed)).build().unwrap()
    }

    #[test]
    fn single_spin_settles_against_its_field() {
        let model = GraphModel::new(1, 1, vec![NodeTerm::new(0, 5)], vec![]).unwrap();
        let result = run(&model, &seeded(1), &ProgressReporter::new()).unwrap();

        assert_eq!(result.energy, -5);
        assert_eq!(result.encoded_state, "-");
        assert_eq!(result.iterations, 200);
        assert_eq!(result.seed, 1);
    }

    #[test]
    fn same_seed_gives_same_result() {
        let model = GraphModel::new(
            3,
            3,
            vec![NodeTerm::new(1, -1)],
            vec![EdgeTerm::new(0, 1, 2), EdgeTerm::new(1, 2, 2)],
        )
        .unwrap();
        let a = run(&model, &seeded(9), &ProgressReporter::new()).unwrap();
        let b = run(&model, &seeded(9), &ProgressReporter::new()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn budget_cap_stops_the_run_before_sampling() {
        let model = GraphModel::new(4, 0, vec![], vec![]).unwrap();
        let config = SearchConfigBuilder::new()
            .max_iterations(Some(100))
            .build()
            .unwrap();
        let phases = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::PhaseStart { name } = event {
                phases.lock().unwrap().push(name);
            }
        }));

        let result = run(&model, &config, &reporter);
        drop(reporter);

        assert!(matches!(
            result,
            Err(EngineError::BudgetExceedsCap {
                budget: 1_600,
                cap: 100
            })
        ));
        assert_eq!(phases.into_inner().unwrap(), vec!["Preparation"]);
    }

    #[test]
    fn large_systems_are_announced_before_the_budget_check() {
        let model = GraphModel::new(LARGE_SYSTEM_WARNING_SPINS + 1, 0, vec![], vec![]).unwrap();
        let config = SearchConfigBuilder::new()
            .max_iterations(Some(1))
            .build()
            .unwrap();
        let messages = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::Message(text) = event {
                messages.lock().unwrap().push(text);
            }
        }));

        let result = run(&model, &config, &reporter);
        drop(reporter);

        assert!(matches!(result, Err(EngineError::BudgetExceedsCap { .. })));
        let messages = messages.into_inner().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("21 spins"));
    }

    #[test]
    fn small_systems_emit_no_messages() {
        let model = GraphModel::new(2, 1, vec![], vec![EdgeTerm::new(0, 1, 1)]).unwrap();
        let messages = Mutex::new(0usize);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::Message(_) = event {
                *messages.lock().unwrap() += 1;
            }
        }));

        run(&model, &seeded(4), &reporter).unwrap();
        drop(reporter);

        assert_eq!(messages.into_inner().unwrap(), 0);
    }

    #[test]
    fn phases_are_reported_in_order() {
        let model = GraphModel::new(2, 1, vec![], vec![EdgeTerm::new(0, 1, -1)]).unwrap();
        let phases = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::PhaseStart { name } = event {
                phases.lock().unwrap().push(name);
            }
        }));

        run(&model, &seeded(3), &reporter).unwrap();
        drop(reporter);

        assert_eq!(
            phases.into_inner().unwrap(),
            vec!["Preparation", "Sampling", "Encoding"]
        );
    }
}
