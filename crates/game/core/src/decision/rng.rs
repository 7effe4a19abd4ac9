//! Stateless PCG generator and seed mixer.

/// Deterministic generator keyed entirely by its seed.
pub trait RngOracle: Send + Sync {
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform value in `0..Bps::SCALE`.
    fn roll_bps(&self, seed: u64) -> u32 {
        self.next_u32(seed) % crate::fixed::Bps::SCALE
    }
}

/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output.
///
/// One LCG step followed by the output permutation. Simple integer ops only,
/// so the same seed yields the same value on every target.
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

    /// xorshift high, random rotate
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

/// Mix a match seed with the coordinates of one roll.
///
/// `round_turn` packs round and turn, `side` is the side index, and `purpose`
/// separates independent rolls made for the same side in the same turn.
pub fn compute_seed(match_seed: u64, round_turn: u64, side: u32, purpose: u32) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = match_seed;
    hash ^= round_turn.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (side as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (purpose as u64).wrapping_mul(0x85ebca6b);

    // avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
