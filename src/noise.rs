//! Noise injection for building corrupted recall queries.
//!
//! [`NoiseInjector`] owns a ChaCha8 RNG so that corruption can be made
//! reproducible: the same seed always flips the same positions.

use crate::error::{HopfieldError, Result};
use crate::pattern::Pattern;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Flip `floor(N * noise_level)` distinct positions of `pattern`.
pub(crate) fn flip_fraction<R: Rng + ?Sized>(
    pattern: &Pattern,
    noise_level: f64,
    rng: &mut R,
) -> Result<Pattern> {
    if !(0.0..=1.0).contains(&noise_level) {
        return Err(HopfieldError::NoiseLevel(noise_level));
    }

    let n = pattern.dimensions();
    let k = ((n as f64) * noise_level).floor() as usize;
    let mut data = pattern.data().to_vec();
    for i in index::sample(rng, n, k.min(n)) {
        data[i] = -data[i];
    }
    Ok(Pattern::from_bipolar_unchecked(data))
}

/// Seedable source of pattern corruption.
#[derive(Clone, Debug)]
pub struct NoiseInjector {
    rng: ChaCha8Rng,
}

impl NoiseInjector {
    /// Create an injector seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create an injector with a fixed seed.
    ///
    /// Using the same seed guarantees the same sequence of flipped positions
    /// across runs and machines.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Return a copy of `pattern` with `floor(N * noise_level)` flipped positions.
    pub fn add_noise(&mut self, pattern: &Pattern, noise_level: f64) -> Result<Pattern> {
        flip_fraction(pattern, noise_level, &mut self.rng)
    }

    /// Access the underlying RNG, e.g. to pass to
    /// [`HopfieldNetwork::add_noise`](crate::network::HopfieldNetwork::add_noise).
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}

impl Default for NoiseInjector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::DEFAULT_NOISE_LEVEL;

    fn alternating(n: usize) -> Pattern {
        Pattern::from_data((0..n).map(|i| if i % 2 == 0 { 1 } else { -1 }).collect()).unwrap()
    }

    #[test]
    fn test_flip_count() {
        let pattern = alternating(64);
        let mut noise = NoiseInjector::with_seed(42);

        let noisy = noise.add_noise(&pattern, 0.25).unwrap();
        assert_eq!(noisy.hamming_distance(&pattern), 16);

        // 64 * 0.3 = 19.2 -> 19
        let noisy = noise.add_noise(&pattern, DEFAULT_NOISE_LEVEL).unwrap();
        assert_eq!(noisy.hamming_distance(&pattern), 19);
    }

    #[test]
    fn test_unflipped_positions_kept() {
        let pattern = alternating(50);
        let mut noise = NoiseInjector::with_seed(1);
        let noisy = noise.add_noise(&pattern, 0.4).unwrap();

        let mut flipped = 0;
        for i in 0..50 {
            if noisy[i] == pattern[i] {
                continue;
            }
            assert_eq!(noisy[i], -pattern[i]);
            flipped += 1;
        }
        assert_eq!(flipped, 20);
    }

    #[test]
    fn test_boundaries() {
        let pattern = alternating(64);
        let mut noise = NoiseInjector::with_seed(3);

        assert_eq!(noise.add_noise(&pattern, 0.0).unwrap(), pattern);
        assert_eq!(noise.add_noise(&pattern, 1.0).unwrap(), pattern.inverted());
    }

    #[test]
    fn test_rejects_out_of_range() {
        let pattern = alternating(8);
        let mut noise = NoiseInjector::with_seed(0);

        for level in [-0.1, 1.01, f64::NAN] {
            let err = noise.add_noise(&pattern, level).unwrap_err();
            assert!(matches!(err, HopfieldError::NoiseLevel(_)));
        }
    }

    #[test]
    fn test_seeded_reproducible() {
        let pattern = alternating(64);
        let a = NoiseInjector::with_seed(7).add_noise(&pattern, 0.3).unwrap();
        let b = NoiseInjector::with_seed(7).add_noise(&pattern, 0.3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_input_untouched() {
        let pattern = alternating(16);
        let copy = pattern.clone();
        let _ = NoiseInjector::with_seed(9).add_noise(&pattern, 0.5).unwrap();
        assert_eq!(pattern, copy);
    }
}
