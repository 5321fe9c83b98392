//! RNG module - seeded random source and Fisher-Yates shuffler
//!
//! The deck order only has to be fair, not secure, so a small LCG is enough.
//! Range reduction rejects the biased tail of the `u32` space, so every index
//! in `[0, max)` is equally likely and the shuffle is unbiased.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG have short periods; fold the high half in.
        self.state ^ (self.state >> 16)
    }

    /// Generate a uniformly distributed value in `[0, max)`.
    ///
    /// Returns 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // Largest multiple of `max` that fits in u32; draws at or above it are rejected.
        let zone = u32::MAX - (u32::MAX % max);
        loop {
            let v = self.next_u32();
            if v < zone {
                return v % max;
            }
        }
    }

    /// Shuffle a slice in place using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (replaying a game from here gives the same decks)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Return a shuffled permutation of `items`.
///
/// The input order must not be relied on after the call.
pub fn shuffle<T>(rng: &mut SimpleRng, mut items: Vec<T>) -> Vec<T> {
    rng.shuffle(&mut items);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..50 {
            for _ in 0..20 {
                assert!(rng.next_range(max) < max);
            }
        }
        assert_eq!(rng.next_range(0), 0);
        assert_eq!(rng.next_range(1), 0);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = SimpleRng::new(99);
        let input: Vec<u32> = (0..24).collect();
        let mut output = shuffle(&mut rng, input.clone());

        assert_eq!(output.len(), input.len());
        output.sort_unstable();
        assert_eq!(output, input);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = SimpleRng::new(3);
        let empty: Vec<u8> = shuffle(&mut rng, Vec::new());
        assert!(empty.is_empty());
        assert_eq!(shuffle(&mut rng, vec![42]), vec![42]);
    }

    #[test]
    fn test_shuffle_reaches_every_permutation_of_three() {
        let mut rng = SimpleRng::new(2024);
        let mut seen: HashMap<Vec<u8>, u32> = HashMap::new();

        for _ in 0..6000 {
            *seen.entry(shuffle(&mut rng, vec![1, 2, 3])).or_default() += 1;
        }

        // 3! permutations, each expected ~1000 times.
        assert_eq!(seen.len(), 6);
        for (perm, count) in seen {
            assert!(
                (700..1300).contains(&count),
                "permutation {:?} drawn {} times",
                perm,
                count
            );
        }
    }
}
