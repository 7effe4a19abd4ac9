//! Pure functions applying a [`ModifierSet`] to damage, defense, energy and hp.
//!
//! None of these can fail. Absent modifiers are the identity set, and every
//! result is floored and clamped before it is returned.

use crate::decision::{DecisionContext, DecisionSource};
use crate::fixed::{Bps, apply_chain};
use crate::moves::MoveType;

use super::ModifierSet;

/// Result of running incoming damage through the defender's modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefenseOutcome {
    pub actual_damage: u32,
    /// Damage sent back to the attacker.
    pub reflected_damage: u32,
}

/// Energy moved by one side's modifiers against its opponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyEffects {
    /// Removed from the opponent.
    pub burned: u32,
    /// Removed from the opponent and gained by this side.
    pub stolen: u32,
    /// Removed from the opponent every turn, hit or not.
    pub drained: u32,
    pub regen_bonus: u32,
}

impl EnergyEffects {
    /// Total energy the opponent loses.
    pub const fn opponent_loss(&self) -> u32 {
        self.burned + self.stolen + self.drained
    }
}

/// General multiplier, then the move-class multiplier, then the counter
/// multiplier when `is_counter_hit`. Floors once at the end.
pub fn apply_damage_modifiers(
    base: u32,
    mods: &ModifierSet,
    mv: MoveType,
    is_counter_hit: bool,
) -> u32 {
    let class = match mv {
        MoveType::Punch | MoveType::Kick => mods.strike_multiplier,
        MoveType::Special => mods.special_multiplier,
        MoveType::Block | MoveType::Stunned => Bps::ONE,
    };
    let counter = if is_counter_hit {
        mods.counter_multiplier
    } else {
        Bps::ONE
    };
    apply_chain(base, &[mods.damage_multiplier, class, counter])
}

/// Immunity short-circuits to zero. Otherwise the reduction fraction is
/// removed, and a blocking defender with a reflect fraction sends that share
/// of `incoming` (before reduction) back.
pub fn apply_defensive_modifiers(
    incoming: u32,
    mods: &ModifierSet,
    is_blocking: bool,
) -> DefenseOutcome {
    if mods.damage_immunity {
        return DefenseOutcome::default();
    }

    let actual_damage = mods.damage_reduction.complement().apply(incoming);
    let reflected_damage = if is_blocking {
        mods.reflect_fraction.apply(incoming)
    } else {
        0
    };

    DefenseOutcome {
        actual_damage,
        reflected_damage,
    }
}

/// Burn and steal need a confirmed hit; drain does not. Amounts are taken in
/// that order and each is capped by what the opponent still has.
pub fn apply_energy_effects(mods: &ModifierSet, opponent_energy: u32, did_hit: bool) -> EnergyEffects {
    let mut remaining = opponent_energy;
    let mut take = |amount: u32| {
        let taken = amount.min(remaining);
        remaining -= taken;
        taken
    };

    let burned = if did_hit { take(mods.energy_burn) } else { 0 };
    let stolen = if did_hit { take(mods.energy_steal) } else { 0 };
    let drained = take(mods.energy_drain);

    EnergyEffects {
        burned,
        stolen,
        drained,
        regen_bonus: mods.energy_regen_bonus,
    }
}

/// Full heal wins outright. Otherwise regen (capped at `max_hp`), then hp
/// cost, which can never take a living side below 1.
pub fn apply_hp_effects(mods: &ModifierSet, current_hp: u32, max_hp: u32) -> u32 {
    if mods.full_heal {
        return max_hp;
    }

    let mut hp = current_hp.saturating_add(mods.hp_regen).min(max_hp);
    if hp > 0 && mods.hp_cost > 0 {
        hp = hp.saturating_sub(mods.hp_cost).max(1);
    }
    hp
}

pub const fn is_block_disabled(self_mods: &ModifierSet, opponent_mods: &ModifierSet) -> bool {
    self_mods.block_disabled || opponent_mods.disable_opponent_block
}

/// Roll the defender's dodge. Never consults `decisions` when the chance is zero.
pub fn roll_dodge(
    mods: &ModifierSet,
    decisions: &(impl DecisionSource + ?Sized),
    ctx: DecisionContext,
) -> bool {
    !mods.dodge_chance.is_zero() && decisions.chance(ctx, mods.dodge_chance)
}
