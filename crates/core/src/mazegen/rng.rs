//! Bounded pseudo-random helpers over the seedable generation stream.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

pub(super) fn random_usize(rng: &mut ChaCha8Rng, min_value: usize, max_value: usize) -> usize {
    debug_assert!(min_value <= max_value);
    let range_size = (max_value - min_value + 1) as u64;
    min_value + (rng.next_u64() % range_size) as usize
}

/// True with the given percent probability (0 never, 100 always).
pub(super) fn chance(rng: &mut ChaCha8Rng, percent: u64) -> bool {
    rng.next_u64() % 100 < percent
}

pub(super) fn coin_flip(rng: &mut ChaCha8Rng) -> bool {
    rng.next_u64() & 1 == 0
}
