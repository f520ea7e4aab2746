//! Iteration-budget policy.
//!
//! A run samples `2^N × samples_per_state` configurations for a model of `N` spins.
//! This over-samples small systems heavily while staying tractable for moderate `N`,
//! but it grows explosively: past roughly 20-25 spins a run takes billions of
//! iterations and the policy is no longer practical. No dynamic adjustment is made.

use super::error::EngineError;
use tracing::warn;

/// Spin count above which a warning about run time is logged.
pub const LARGE_SYSTEM_WARNING_SPINS: usize = 20;

/// Computes `2^num_spins × samples_per_state`, optionally bounded by `cap`.
///
/// # Errors
///
/// - [`EngineError::Computation`] if the budget is zero.
/// - [`EngineError::BudgetOverflow`] if the budget does not fit in a `u64`.
/// - [`EngineError::BudgetExceedsCap`] if the budget is larger than `cap`.
pub fn iteration_budget(
    num_spins: usize,
    samples_per_state: u64,
    cap: Option<u64>,
) -> Result<u64, EngineError> {
    let overflow = || EngineError::BudgetOverflow {
        num_spins,
        samples_per_state,
    };

    let states = u32::try_from(num_spins)
        .ok()
        .and_then(|shift| 1u64.checked_shl(shift))
        .ok_or_else(overflow)?;
    let budget = states.checked_mul(samples_per_state).ok_or_else(overflow)?;

    if budget == 0 {
        return Err(EngineError::Computation(format!(
            "iteration budget for {} spins is zero",
            num_spins
        )));
    }
    if let Some(cap) = cap {
        if budget > cap {
            return Err(EngineError::BudgetExceedsCap { budget, cap });
        }
    }
    if num_spins > LARGE_SYSTEM_WARNING_SPINS {
        warn!(
            num_spins,
            budget, "Large spin system: the 2^N iteration budget makes this run very slow."
        );
    }

    Ok(budget)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_is_two_to_the_n_times_multiplier() {
        assert_eq!(iteration_budget(1, 100, None).unwrap(), 200);
        assert_eq!(iteration_budget(2, 100, None).unwrap(), 400);
        assert_eq!(iteration_budget(10, 100, None).unwrap(), 102_400);
        assert_eq!(iteration_budget(3, 1, None).unwrap(), 8);
    }

    #[test]
    fn zero_multiplier_is_a_computation_error() {
        assert!(matches!(
            iteration_budget(4, 0, None),
            Err(EngineError::Computation(_))
        ));
    }

    #[test]
    fn overflow_is_reported() {
        assert!(matches!(
            iteration_budget(64, 1, None),
            Err(EngineError::BudgetOverflow { num_spins: 64, .. })
        ));
        assert!(matches!(
            iteration_budget(60, 100, None),
            Err(EngineError::BudgetOverflow { .. })
        ));
    }

    #[test]
    fn cap_rejects_larger_budgets_but_allows_equal_ones() {
        assert_eq!(iteration_budget(3, 100, Some(800)).unwrap(), 800);
        assert!(matches!(
            iteration_budget(3, 100, Some(799)),
            Err(EngineError::BudgetExceedsCap {
                budget: 800,
                cap: 799
            })
        ));
    }
}
