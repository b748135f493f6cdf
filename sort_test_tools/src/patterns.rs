//! Provides a set of patterns useful for testing and benchmarking sorting
//! algorithms. Currently limited to i32 values.

use std::env;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use rand::distributions::Uniform;
use rand::prelude::*;
use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    let dist = range.into();
    let mut rng = new_rng();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // x x . x . x x

    if len == 0 {
        return Vec::new();
    }

    // The distribution yields values in 1..=len, strongly skewed towards the
    // small ones. Useful for testing inputs with many duplicates.
    let dist = ZipfDistribution::new(len, exponent).unwrap();
    let mut rng = new_rng();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......

    (0..len).map(|_| 66).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .:.  .:
    // :::.:::..::::::::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = ascending(len);
    let chunk_size = (len / saw_count.max(1)).max(1);
    for (i, chunk) in vals.chunks_mut(chunk_size).enumerate() {
        if i % 2 == 0 {
            chunk.reverse();
        }
    }

    vals
}

/// Seed shared by all patterns of one process, printed by failing tests so
/// runs can be reproduced via the OVERRIDE_SEED environment variable.
pub fn random_init_seed() -> u64 {
    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => u64::from_str(&seed).unwrap(),
        Err(_) => thread_rng().gen(),
    })
}

// --- Private ---

static SEED: OnceCell<u64> = OnceCell::new();

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
