//! Read-only move legality queries for bots and UI.
//!
//! The engine resolves whatever it is given; these helpers tell a caller what
//! it *should* submit.

use arrayvec::ArrayVec;

use crate::config::MatchConfig;
use crate::moves::MoveType;
use crate::roster::CharacterProfile;
use crate::state::CombatantState;
use crate::surge::{ModifierSet, is_block_disabled};

pub type AvailableMoves = ArrayVec<MoveType, { MatchConfig::SELECTABLE_MOVES }>;

/// Whether the combatant holds enough energy for `mv`. `Stunned` is never
/// affordable because it is never submitted.
pub fn can_afford_move(
    combatant: &CombatantState,
    profile: &CharacterProfile,
    own_mods: &ModifierSet,
    mv: MoveType,
) -> bool {
    mv.is_selectable() && combatant.energy >= profile.energy_cost(mv, own_mods.special_extra_cost)
}

/// Selectable moves the combatant can afford, minus Block while block is
/// disabled for it.
pub fn available_moves(
    combatant: &CombatantState,
    profile: &CharacterProfile,
    own_mods: &ModifierSet,
    opponent_mods: &ModifierSet,
) -> AvailableMoves {
    let block_disabled = is_block_disabled(own_mods, opponent_mods);
    MoveType::SELECTABLE
        .into_iter()
        .filter(|mv| !(block_disabled && *mv == MoveType::Block))
        .filter(|mv| can_afford_move(combatant, profile, own_mods, *mv))
        .collect()
}
