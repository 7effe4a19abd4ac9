use crate::fixed::Bps;
use crate::moves::MoveType;

use super::Archetype;

/// Per-move damage multipliers for a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageModifiers {
    pub punch: Bps,
    pub kick: Bps,
    pub special: Bps,
}

impl DamageModifiers {
    pub const NEUTRAL: Self = Self::new(Bps::ONE, Bps::ONE, Bps::ONE);

    pub const fn new(punch: Bps, kick: Bps, special: Bps) -> Self {
        Self {
            punch,
            kick,
            special,
        }
    }

    pub const fn for_move(&self, mv: MoveType) -> Bps {
        match mv {
            MoveType::Punch => self.punch,
            MoveType::Kick => self.kick,
            MoveType::Special => self.special,
            MoveType::Block | MoveType::Stunned => Bps::ONE,
        }
    }
}

impl Default for DamageModifiers {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Immutable character numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterProfile {
    pub archetype: Archetype,
    pub max_hp: u32,
    pub max_energy: u32,
    pub energy_regen: u32,
    pub damage: DamageModifiers,
    /// Fraction of incoming damage negated while guarding.
    pub block_effectiveness: Bps,
    pub special_cost_multiplier: Bps,
}

impl CharacterProfile {
    /// Energy charged for `mv`, including any surge-driven special surcharge.
    pub const fn energy_cost(&self, mv: MoveType, special_extra_cost: u32) -> u32 {
        let base = mv.base_stats().energy_cost;
        match mv {
            MoveType::Special => self
                .special_cost_multiplier
                .apply(base)
                .saturating_add(special_extra_cost),
            _ => base,
        }
    }
}
