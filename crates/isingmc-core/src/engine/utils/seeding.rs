use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic generator for one chunk of a partitioned run.
///
/// All chunks share the key derived from `master_seed` and differ only in the
/// ChaCha stream number, so their outputs are independent and reproducible.
pub fn chunk_rng(master_seed: u64, chunk_index: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(master_seed);
    rng.set_stream(chunk_index);
    rng
}

/// Draws a master seed from operating-system entropy.
pub fn fresh_master_seed() -> u64 {
    ChaCha8Rng::from_entropy().next_u64()
}
