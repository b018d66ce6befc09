//! Sound cue selection.
//!
//! The typewriter emits a cue every few revealed characters. Which clip
//! the cue points at is decided by a pluggable strategy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks the selector carried by each cue event.
pub trait CueStrategy: Send {
    fn select(&mut self) -> u8;
}

/// Always the same clip.
#[derive(Debug, Clone, Copy)]
pub struct FixedCue(pub u8);

impl CueStrategy for FixedCue {
    fn select(&mut self) -> u8 {
        self.0
    }
}

/// Uniformly random clip in `1..=variants`.
#[derive(Debug)]
pub struct RandomCue {
    variants: u8,
    rng: StdRng,
}

impl RandomCue {
    pub fn new(variants: u8) -> Self {
        Self {
            variants: variants.max(1),
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence, for tests and demos.
    pub fn seeded(variants: u8, seed: u64) -> Self {
        Self {
            variants: variants.max(1),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CueStrategy for RandomCue {
    fn select(&mut self) -> u8 {
        self.rng.gen_range(1..=self.variants)
    }
}

/// Round-robin over `1..=variants`.
#[derive(Debug, Clone)]
pub struct CyclingCue {
    variants: u8,
    next: u8,
}

impl CyclingCue {
    pub fn new(variants: u8) -> Self {
        Self {
            variants: variants.max(1),
            next: 1,
        }
    }
}

impl CueStrategy for CyclingCue {
    fn select(&mut self) -> u8 {
        let current = self.next;
        self.next = if current >= self.variants { 1 } else { current + 1 };
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_cue_repeats() {
        let mut cue = FixedCue(1);
        assert_eq!((0..3).map(|_| cue.select()).collect::<Vec<_>>(), [1, 1, 1]);
    }

    #[test]
    fn cycling_cue_wraps() {
        let mut cue = CyclingCue::new(3);
        let picks: Vec<u8> = (0..7).map(|_| cue.select()).collect();
        assert_eq!(picks, [1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn random_cue_stays_in_range() {
        let mut cue = RandomCue::seeded(4, 7);
        for _ in 0..200 {
            let pick = cue.select();
            assert!((1..=4).contains(&pick));
        }
    }

    #[test]
    fn seeded_random_cue_is_reproducible() {
        let mut a = RandomCue::seeded(4, 42);
        let mut b = RandomCue::seeded(4, 42);
        let left: Vec<u8> = (0..16).map(|_| a.select()).collect();
        let right: Vec<u8> = (0..16).map(|_| b.select()).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn zero_variants_clamps_to_one() {
        let mut random = RandomCue::new(0);
        let mut cycling = CyclingCue::new(0);
        assert_eq!(random.select(), 1);
        assert_eq!(cycling.select(), 1);
        assert_eq!(cycling.select(), 1);
    }
}
