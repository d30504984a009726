//! Shared test helpers for integration tests
#![allow(dead_code)]

use quickiter::oracle::ReferenceOracle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

pub fn sub(a: i64, b: i64) -> i64 {
    a - b
}

/// Deterministic RNG for a test case
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random integers in -1000..1000, length 1..=100
pub fn random_sequence(rng: &mut StdRng) -> Vec<i64> {
    let n: usize = rng.gen_range(1..=100);
    (0..n).map(|_| rng.gen_range(-1000..1000)).collect()
}

/// The default oracle, or None (with a note on stderr) when Python is missing
pub fn oracle_or_skip(test: &str) -> Option<ReferenceOracle> {
    let oracle = ReferenceOracle::new();
    if oracle.is_available() {
        Some(oracle)
    } else {
        eprintln!("skipping {}: reference interpreter not available", test);
        None
    }
}
