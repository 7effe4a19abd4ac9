use core::cmp::Ordering;

use crate::combat::GUARD_MAX;
use crate::roster::CharacterProfile;

/// Mutable per-side combat state.
///
/// `hp` and `energy` stay within `0..=max`; `guard_meter` stays within
/// `0..GUARD_MAX` because it is reset to zero the instant it reaches the
/// break threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantState {
    pub character_id: String,
    pub hp: u32,
    pub max_hp: u32,
    pub energy: u32,
    pub max_energy: u32,
    pub guard_meter: u32,
    pub is_stunned: bool,
    pub is_staggered: bool,
    pub rounds_won: u32,
}

impl CombatantState {
    /// Fresh combatant at full HP/energy with an empty guard meter.
    pub fn new(character_id: impl Into<String>, profile: &CharacterProfile) -> Self {
        Self {
            character_id: character_id.into(),
            hp: profile.max_hp,
            max_hp: profile.max_hp,
            energy: profile.max_energy,
            max_energy: profile.max_energy,
            guard_meter: 0,
            is_stunned: false,
            is_staggered: false,
            rounds_won: 0,
        }
    }

    /// Restore HP/energy/guard/status for a new round. `rounds_won` survives.
    pub fn reset_for_round(&mut self) {
        self.hp = self.max_hp;
        self.energy = self.max_energy;
        self.guard_meter = 0;
        self.is_stunned = false;
        self.is_staggered = false;
    }

    pub const fn is_ko(&self) -> bool {
        self.hp == 0
    }

    /// Compare HP percentages exactly via cross-multiplication.
    pub fn cmp_hp_ratio(&self, other: &CombatantState) -> Ordering {
        let mine = self.hp as u64 * other.max_hp.max(1) as u64;
        let theirs = other.hp as u64 * self.max_hp.max(1) as u64;
        mine.cmp(&theirs)
    }

    /// Whether every bounded field is inside its range.
    pub fn is_within_bounds(&self) -> bool {
        self.hp <= self.max_hp && self.energy <= self.max_energy && self.guard_meter < GUARD_MAX
    }
}
