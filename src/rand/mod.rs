//! Random number generation backed by a cryptographically secure source.
//!
//! Every draw the generator makes, including the final shuffle, goes through
//! one [`RandomSource`]. Production code uses the operating system CSPRNG.

use rand::rand_core::UnwrapErr;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, TryRngCore};

/// Uniform integer draws plus a Fisher-Yates shuffle built on top of them.
pub trait RandomSource {
    /// Uniform integer in `0..n`. `n` must be non-zero.
    fn uniform_int(&mut self, n: usize) -> usize;

    /// Uniformly permute `items` in place.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.uniform_int(i + 1);
            items.swap(i, j);
        }
    }
}

/// A [`RandomSource`] over any `rand` CSPRNG.
pub struct SecureRand<R = UnwrapErr<OsRng>> {
    rng: R,
}

impl SecureRand {
    /// Operating system CSPRNG (getrandom). Panics if the OS source fails.
    pub fn os() -> Self {
        Self::from_rng(OsRng.unwrap_err())
    }
}

impl Default for SecureRand {
    fn default() -> Self {
        Self::os()
    }
}

impl<R: CryptoRng> SecureRand<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: CryptoRng> RandomSource for SecureRand<R> {
    #[inline]
    fn uniform_int(&mut self, n: usize) -> usize {
        // random_range uses rejection sampling, no modulo bias
        self.rng.random_range(0..n)
    }
}

pub fn entropy_source() -> &'static str {
    "OS CSPRNG"
}
