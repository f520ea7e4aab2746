use crate::core::models::spin::{SPIN_DOWN, SPIN_UP, SpinConfiguration};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of spin configurations for the search loop.
///
/// Each call must return a fresh configuration of exactly `num_spins` values owned
/// by the caller.
pub trait SpinSampler {
    fn sample(&mut self, num_spins: usize) -> SpinConfiguration;
}

impl<S: SpinSampler + ?Sized> SpinSampler for &mut S {
    #[inline]
    fn sample(&mut self, num_spins: usize) -> SpinConfiguration {
        (**self).sample(num_spins)
    }
}

/// Draws every spin independently and uniformly from `{+1, -1}`.
#[derive(Debug, Clone)]
pub struct RandomSpinSampler<R = ChaCha8Rng> {
    rng: R,
}

impl RandomSpinSampler<ChaCha8Rng> {
    /// Reproducible sampler: equal seeds yield equal sequences of configurations.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Non-reproducible sampler seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandomSpinSampler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> SpinSampler for RandomSpinSampler<R> {
    fn sample(&mut self, num_spins: usize) -> SpinConfiguration {
        (0..num_spins)
            .map(|_| {
                if self.rng.gen_bool(0.5) {
                    SPIN_UP
                } else {
                    SPIN_DOWN
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_requested_length_and_valid_values() {
        let mut sampler = RandomSpinSampler::from_seed(1);
        for n in [1, 2, 7, 32] {
            let config = sampler.sample(n);
            assert_eq!(config.len(), n);
            assert!(config.iter().all(|s| s == SPIN_UP || s == SPIN_DOWN));
        }
    }

    #[test]
    fn equal_seeds_reproduce_equal_sequences() {
        let mut a = RandomSpinSampler::from_seed(2024);
        let mut b = RandomSpinSampler::from_seed(2024);
        for _ in 0..50 {
            assert_eq!(a.sample(12), b.sample(12));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = RandomSpinSampler::from_seed(1);
        let mut b = RandomSpinSampler::from_seed(2);
        let seq_a: Vec<_> = (0..20).map(|_| a.sample(16)).collect();
        let seq_b: Vec<_> = (0..20).map(|_| b.sample(16)).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn both_spin_values_occur_with_roughly_equal_frequency() {
        let mut sampler = RandomSpinSampler::from_seed(3);
        let config = sampler.sample(20_000);
        let ups = config.iter().filter(|&s| s == SPIN_UP).count();
        assert!((9_000..=11_000).contains(&ups), "ups = {ups}");
    }

    #[test]
    fn mutable_reference_is_a_sampler() {
        fn draw(mut sampler: impl SpinSampler) -> SpinConfiguration {
            sampler.sample(4)
        }
        let mut sampler = RandomSpinSampler::from_seed(5);
        let mut twin = sampler.clone();
        assert_eq!(draw(&mut sampler), twin.sample(4));
    }
}
