//! Deterministic RNG wrapper using PCG32.
//!
//! Every random draw of a generation goes through one `DeterministicRng`
//! created for that call and passed by `&mut` into each stage. The order in
//! which stages draw is part of the output contract: changing it changes
//! every image produced for a given seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a request seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Generate a random f64 in the range [0.0, 1.0).
    #[inline]
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a random u32.
    #[inline]
    pub fn gen_u32(&mut self) -> u32 {
        self.inner.gen::<u32>()
    }

    /// Generate a random value in the given range.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.inner.gen_range(range)
    }
}

/// Pick a fresh seed in `[0, max]` from thread-local entropy.
///
/// Only used when a request omits its seed; the result is reported back so
/// the generation stays reproducible.
pub fn random_seed(max: u64) -> u64 {
    rand::thread_rng().gen_range(0..=max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_output() {
        let mut rng1 = DeterministicRng::new(42);
        let mut rng2 = DeterministicRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_f64(), rng2.gen_f64());
        }
    }

    #[test]
    fn test_different_seeds_produce_different_output() {
        let mut rng1 = DeterministicRng::new(42);
        let mut rng2 = DeterministicRng::new(43);

        // At least one of the first 10 values should differ
        let mut any_different = false;
        for _ in 0..10 {
            if rng1.gen_f64() != rng2.gen_f64() {
                any_different = true;
                break;
            }
        }
        assert!(any_different);
    }

    #[test]
    fn test_large_seeds_are_distinct() {
        let mut low = DeterministicRng::new(1);
        let mut high = DeterministicRng::new(1 | (1 << 40));
        let a: Vec<u32> = (0..8).map(|_| low.gen_u32()).collect();
        let b: Vec<u32> = (0..8).map(|_| high.gen_u32()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_gen_range_inclusive_bounds() {
        let mut rng = DeterministicRng::new(7);
        for _ in 0..1000 {
            let v: i32 = rng.gen_range(-10..=10);
            assert!((-10..=10).contains(&v));
        }
    }

    #[test]
    fn test_random_seed_in_range() {
        for _ in 0..100 {
            assert!(random_seed(999_999) <= 999_999);
        }
    }
}
