//! Turn result records.

use arrayvec::ArrayVec;

use crate::config::MatchConfig;
use crate::moves::{MoveType, ResolutionOutcome};
use crate::state::Side;

/// Notable things that happened to a side during one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum StatusEffect {
    /// Could not act this turn.
    Stunned,
    /// Damage is reduced next turn.
    Staggered,
    /// Guard meter hit the threshold and reset.
    GuardBroken,
    /// A special broke through the guard.
    GuardShattered,
    /// Blocked while block was disabled.
    BlockFailed,
    Dodged,
    CounterHit,
    /// Immunity swallowed incoming damage.
    DamageNegated,
    /// Sent damage back at the attacker.
    Reflected,
}

pub type StatusEffects = ArrayVec<StatusEffect, { MatchConfig::MAX_STATUS_EFFECTS }>;

/// Everything that happened to one side in a turn, plus its resulting values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideResult {
    pub submitted_move: MoveType,
    /// Move actually resolved after stun gating.
    pub effective_move: MoveType,
    pub outcome: ResolutionOutcome,

    pub damage_dealt: u32,
    pub damage_taken: u32,
    pub energy_spent: u32,
    pub guard_buildup_delta: i32,
    pub status_effects: StatusEffects,

    /// Net hp change from regen, full heal and hp cost.
    pub hp_regen: i32,
    pub lifesteal: u32,
    /// Energy lost to the opponent's burn, steal and drain.
    pub energy_drained: u32,
    pub counter_hit: bool,
    /// The opponent should not be shown this side's move.
    pub move_hidden: bool,

    pub hp: u32,
    pub energy: u32,
    pub guard_meter: u32,
    pub stunned_next: bool,
    pub staggered_next: bool,
}

impl SideResult {
    pub fn has_status(&self, effect: StatusEffect) -> bool {
        self.status_effects.contains(&effect)
    }

    pub const fn is_ko(&self) -> bool {
        self.hp == 0
    }
}

/// Both sides' results for one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnResult {
    pub round: u32,
    pub turn: u32,
    pub sides: [SideResult; 2],
}

impl TurnResult {
    pub fn side(&self, side: Side) -> &SideResult {
        &self.sides[side.index()]
    }

    pub fn effective_moves(&self) -> [MoveType; 2] {
        [self.sides[0].effective_move, self.sides[1].effective_move]
    }
}
