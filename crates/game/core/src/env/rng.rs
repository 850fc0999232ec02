//! Deterministic random source for crew placement.
//!
//! Every random pick is derived from a seed built out of the game seed and a
//! command nonce, so replaying the same commands yields the same train.

use crate::geometry::Direction;

/// Deterministic random number source.
///
/// Implementations must produce the same value for the same seed.
pub trait RngOracle: Send + Sync {
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform index into a collection of `len` elements, `None` when empty.
    fn pick_index(&self, seed: u64, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let len = u32::try_from(len).unwrap_or(u32::MAX);
        usize::try_from(self.next_u32(seed) % len).ok()
    }

    fn pick_direction(&self, seed: u64) -> Direction {
        Direction::ALL[(self.next_u32(seed) % 4) as usize]
    }
}

/// PCG-XSH-RR generator: 64-bit LCG state, 32-bit permuted output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Which random draw within a single command a seed is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollContext {
    Tile = 0,
    Facing = 1,
}

/// Mixes the game seed, command nonce, subject id and draw context into a
/// single seed.
pub fn compute_seed(game_seed: u64, nonce: u64, subject: u32, context: RollContext) -> u64 {
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(subject).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
