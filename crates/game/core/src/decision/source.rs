use sha2::{Digest, Sha256};

use crate::fixed::Bps;
use crate::state::Side;

use super::{PcgRng, RngOracle, compute_seed};

/// Why a roll is being made. Distinct purposes never share a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[repr(u32)]
pub enum DecisionPurpose {
    Dodge = 0,
}

/// Stable coordinates of a single roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionContext {
    pub round: u32,
    pub turn: u32,
    /// Side the roll is made for.
    pub side: Side,
    pub purpose: DecisionPurpose,
}

impl DecisionContext {
    pub const fn new(round: u32, turn: u32, side: Side, purpose: DecisionPurpose) -> Self {
        Self {
            round,
            turn,
            side,
            purpose,
        }
    }
}

/// Source of every probability-gated decision the engine makes.
///
/// Implementations used on an authoritative path must be pure functions of
/// their construction input and the context.
pub trait DecisionSource: Send + Sync {
    /// Uniform value in `0..Bps::SCALE`.
    fn roll_bps(&self, ctx: DecisionContext) -> u32;

    /// `true` with probability `probability`. Zero never rolls true and 1.0
    /// always does.
    fn chance(&self, ctx: DecisionContext, probability: Bps) -> bool {
        if probability.is_zero() {
            return false;
        }
        self.roll_bps(ctx) < probability.get()
    }
}

impl<T: DecisionSource + ?Sized> DecisionSource for &T {
    fn roll_bps(&self, ctx: DecisionContext) -> u32 {
        (**self).roll_bps(ctx)
    }
}

impl<T: DecisionSource + ?Sized> DecisionSource for Box<T> {
    fn roll_bps(&self, ctx: DecisionContext) -> u32 {
        (**self).roll_bps(ctx)
    }
}

/// Hash-derived decisions, reproducible anywhere the match id is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeededDecisions {
    seed: u64,
}

impl SeededDecisions {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the first eight bytes (little endian) of SHA-256(match_id).
    pub fn from_match_id(match_id: &str) -> Self {
        let digest = Sha256::digest(match_id.as_bytes());
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        Self::new(u64::from_le_bytes(bytes))
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SeededDecisions {
    fn default() -> Self {
        Self::new(0)
    }
}

impl DecisionSource for SeededDecisions {
    fn roll_bps(&self, ctx: DecisionContext) -> u32 {
        let round_turn = ((ctx.round as u64) << 32) | ctx.turn as u64;
        let seed = compute_seed(
            self.seed,
            round_turn,
            ctx.side.index() as u32,
            ctx.purpose as u32,
        );
        PcgRng.roll_bps(seed)
    }
}

/// Returns the same roll for every context. For replays of recorded
/// decisions and for tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDecisions(pub u32);

impl FixedDecisions {
    /// Every non-zero chance succeeds.
    pub const ALWAYS: Self = Self(0);
    /// Every chance below 1.0 fails.
    pub const NEVER: Self = Self(Bps::SCALE - 1);
}

impl DecisionSource for FixedDecisions {
    fn roll_bps(&self, _ctx: DecisionContext) -> u32 {
        self.0.min(Bps::SCALE - 1)
    }
}
