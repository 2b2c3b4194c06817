//! Seeded holdout splitting.
//!
//! ## Purpose
//!
//! This module partitions a dataset into disjoint train and test subsets by
//! an independent per-record Bernoulli draw with a fixed inclusion
//! probability.
//!
//! ## Design notes
//!
//! * **Explicit seed**: The random source is seeded from a caller-supplied
//!   `u64`; the same seed always yields the same partition. There is no
//!   ambient/global generator.
//! * **Lossless**: Every record lands in exactly one subset; none are
//!   duplicated or dropped.
//! * **By copy**: Records are read-only, so subsets take copies rather than
//!   exclusive ownership.
//!
//! ## Key concepts
//!
//! * **Inclusion probability**: Each record goes to train with independent
//!   probability `train_fraction`, else to test.
//! * **Degenerate sides**: An empty train or test subset is legal here;
//!   the pipeline validator rejects it before fitting or evaluating.
//!
//! ## Invariants
//!
//! * `|train| + |test| = |dataset|`, and relative record order is preserved
//!   within each subset.
//! * `train_fraction >= 1` deterministically sends every record to train.
//!
//! ## Non-goals
//!
//! * This module does not validate the fraction (see the engine validator).
//! * This module does not stratify or shuffle; the draw is per-record.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::dataset::Dataset;

// ============================================================================
// Internal PRNG
// ============================================================================

/// Minimal PRNG for seeded Bernoulli draws.
///
/// Uses an LCG (Linear Congruential Generator) with a 64-bit state.
#[derive(Debug, Clone)]
struct SplitRng {
    state: u64,
}

impl SplitRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    /// Uniform draw in [0, 1).
    fn next_unit<T: Float>(&mut self) -> T {
        let numerator = T::from(self.next_u32()).unwrap_or(T::zero());
        let denominator = T::from(4_294_967_296u64).unwrap_or(T::one());
        numerator / denominator
    }
}

// ============================================================================
// Holdout Split
// ============================================================================

/// Partition a dataset into disjoint (train, test) subsets.
///
/// Each record is assigned to train with independent probability
/// `train_fraction`, drawn from a generator seeded with `seed`.
pub fn holdout<T: Float>(
    dataset: &Dataset<T>,
    train_fraction: T,
    seed: u64,
) -> (Dataset<T>, Dataset<T>) {
    let mut train = dataset.like();
    let mut test = dataset.like();

    // A fraction at or above one needs no draws and avoids any rounding of
    // the uniform variate up to 1.0 in low-precision types.
    if train_fraction >= T::one() {
        for record in dataset.records() {
            train.push_row_raw(record.values().to_vec());
        }
        return (train, test);
    }

    let mut rng = SplitRng::new(seed);
    for record in dataset.records() {
        if rng.next_unit::<T>() < train_fraction {
            train.push_row_raw(record.values().to_vec());
        } else {
            test.push_row_raw(record.values().to_vec());
        }
    }

    (train, test)
}
