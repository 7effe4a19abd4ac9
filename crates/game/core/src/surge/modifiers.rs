use crate::fixed::Bps;

use super::{SurgeCard, SurgeEffect};

/// Numeric and boolean rule overrides active for one side during a round.
///
/// Every field defaults to its identity: multipliers are 1.0, amounts and
/// fractions are zero, flags are false. Combining effects multiplies
/// multipliers, adds fractions (capped at 1.0) and amounts, and ORs flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifierSet {
    pub damage_multiplier: Bps,
    /// Applies to Punch and Kick.
    pub strike_multiplier: Bps,
    pub special_multiplier: Bps,
    /// Fraction of incoming damage removed.
    pub damage_reduction: Bps,
    pub damage_immunity: bool,

    pub energy_burn: u32,
    pub energy_steal: u32,
    pub energy_drain: u32,
    pub energy_regen_bonus: u32,

    pub hp_regen: u32,
    pub hp_cost: u32,
    pub full_heal: bool,
    pub lifesteal: Bps,

    pub invisible_move: bool,
    pub block_disabled: bool,
    pub disable_opponent_block: bool,
    pub bypass_block: bool,
    pub reflect_fraction: Bps,
    pub stun_opponent: bool,
    pub dodge_chance: Bps,
    pub counter_multiplier: Bps,
    pub special_extra_cost: u32,
}

impl ModifierSet {
    pub const IDENTITY: Self = Self {
        damage_multiplier: Bps::ONE,
        strike_multiplier: Bps::ONE,
        special_multiplier: Bps::ONE,
        damage_reduction: Bps::ZERO,
        damage_immunity: false,
        energy_burn: 0,
        energy_steal: 0,
        energy_drain: 0,
        energy_regen_bonus: 0,
        hp_regen: 0,
        hp_cost: 0,
        full_heal: false,
        lifesteal: Bps::ZERO,
        invisible_move: false,
        block_disabled: false,
        disable_opponent_block: false,
        bypass_block: false,
        reflect_fraction: Bps::ZERO,
        stun_opponent: false,
        dodge_chance: Bps::ZERO,
        counter_multiplier: Bps::ONE,
        special_extra_cost: 0,
    };

    /// Modifier set granted by a single card.
    pub fn from_card(card: SurgeCard) -> Self {
        let mut mods = Self::IDENTITY;
        for effect in card.effects() {
            mods.apply_effect(*effect);
        }
        mods
    }

    /// Fold one effect into the set.
    pub fn apply_effect(&mut self, effect: SurgeEffect) {
        match effect {
            SurgeEffect::DamageMultiplier(m) => {
                self.damage_multiplier = self.damage_multiplier.compose(m)
            }
            SurgeEffect::StrikeMultiplier(m) => {
                self.strike_multiplier = self.strike_multiplier.compose(m)
            }
            SurgeEffect::SpecialMultiplier(m) => {
                self.special_multiplier = self.special_multiplier.compose(m)
            }
            SurgeEffect::DamageReduction(f) => {
                self.damage_reduction = self.damage_reduction.add_capped(f)
            }
            SurgeEffect::DamageImmunity => self.damage_immunity = true,
            SurgeEffect::EnergyBurn(n) => self.energy_burn = self.energy_burn.saturating_add(n),
            SurgeEffect::EnergySteal(n) => self.energy_steal = self.energy_steal.saturating_add(n),
            SurgeEffect::EnergyDrain(n) => self.energy_drain = self.energy_drain.saturating_add(n),
            SurgeEffect::EnergyRegen(n) => {
                self.energy_regen_bonus = self.energy_regen_bonus.saturating_add(n)
            }
            SurgeEffect::HpRegen(n) => self.hp_regen = self.hp_regen.saturating_add(n),
            SurgeEffect::HpCost(n) => self.hp_cost = self.hp_cost.saturating_add(n),
            SurgeEffect::FullHeal => self.full_heal = true,
            SurgeEffect::Lifesteal(f) => self.lifesteal = self.lifesteal.add_capped(f),
            SurgeEffect::InvisibleMove => self.invisible_move = true,
            SurgeEffect::SelfBlockDisabled => self.block_disabled = true,
            SurgeEffect::DisableOpponentBlock => self.disable_opponent_block = true,
            SurgeEffect::BypassBlock => self.bypass_block = true,
            SurgeEffect::ReflectBlocked(f) => {
                self.reflect_fraction = self.reflect_fraction.add_capped(f)
            }
            SurgeEffect::StunOpponent => self.stun_opponent = true,
            SurgeEffect::Dodge(f) => self.dodge_chance = self.dodge_chance.add_capped(f),
            SurgeEffect::CounterMultiplier(m) => {
                self.counter_multiplier = self.counter_multiplier.compose(m)
            }
            SurgeEffect::SpecialExtraCost(n) => {
                self.special_extra_cost = self.special_extra_cost.saturating_add(n)
            }
            // Pairwise; handled by `resolve_modifiers`.
            SurgeEffect::NullifyOpponent => {}
        }
    }

    /// The set as it applies on `turn` of the round.
    ///
    /// Round-opening effects (opponent stun, full heal, damage immunity) only
    /// exist on turn 1. This is derived from the turn number alone, so a round
    /// resumed from a snapshot behaves exactly like one played straight through.
    #[must_use]
    pub const fn for_turn(mut self, turn: u32) -> Self {
        if turn != 1 {
            self.stun_opponent = false;
            self.full_heal = false;
            self.damage_immunity = false;
        }
        self
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for ModifierSet {
    fn default() -> Self {
        Self::IDENTITY
    }
}
