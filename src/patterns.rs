use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::prelude::*;

use once_cell::sync::OnceCell;

/// Provides the shuffled start arrays the scheduler races on, plus a set of patterns useful for
/// testing and benchmarking the step-wise algorithms.
/// Currently limited to i32 values.

// --- Public ---

pub fn shuffled(size: usize) -> Vec<i32> {
    // : .:.:
    // :.::::
    // Every key in 0..size exactly once.

    shuffled_with(size, &mut new_seed())
}

/// Same as [`shuffled`] but draws from `rng`, so successive calls with one generator yield new
/// permutations.
pub fn shuffled_with<R: Rng>(size: usize, rng: &mut R) -> Vec<i32> {
    let mut vals = ascending(size);
    vals.shuffle(rng);

    vals
}

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(size)
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_seed();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect::<Vec<_>>()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(size);
    let chunks_size = (size / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((size / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(size);

    let first_half = &mut vals[0..(size / 2)];
    first_half.sort();

    let second_half = &mut vals[(size / 2)..size];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

/// Each following call to a random derived pattern yields new values, instead of the same values
/// per process invocation.
pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// One seed per process, unless `OVERRIDE_SEED` is set or [`disable_fixed_seed`] was called.
pub fn random_init_seed() -> u64 {
    if let Some(seed) = override_seed() {
        return seed;
    }

    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn override_seed() -> Option<u64> {
    static OVERRIDE: OnceCell<Option<u64>> = OnceCell::new();

    *OVERRIDE.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|seed| u64::from_str(seed.trim()).ok())
    })
}

fn new_seed() -> StdRng {
    // Random seed, but prints it for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(size: usize) -> Vec<i32> {
    let mut rng = new_seed();

    (0..size).map(|_| rng.gen::<i32>()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffled_is_permutation() {
        for size in [0, 1, 2, 5, 100, 999] {
            let mut vals = shuffled(size);
            assert_eq!(vals.len(), size);

            vals.sort();
            assert_eq!(vals, ascending(size));
        }
    }

    #[test]
    fn shuffled_with_same_seed_matches() {
        let a = shuffled_with(50, &mut StdRng::seed_from_u64(3));
        let b = shuffled_with(50, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
