//! Surge cards and the effects each one grants.

use crate::fixed::Bps;

/// A single field override carried by a surge card.
///
/// Every variant is consumed by exactly one arm of
/// [`ModifierSet::apply_effect`](super::ModifierSet::apply_effect), so adding
/// an effect without wiring it into the modifier set fails to compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurgeEffect {
    DamageMultiplier(Bps),
    StrikeMultiplier(Bps),
    SpecialMultiplier(Bps),
    DamageReduction(Bps),
    /// Round-opening: only active on turn 1.
    DamageImmunity,
    EnergyBurn(u32),
    EnergySteal(u32),
    EnergyDrain(u32),
    EnergyRegen(u32),
    HpRegen(u32),
    HpCost(u32),
    /// Round-opening: only active on turn 1.
    FullHeal,
    Lifesteal(Bps),
    InvisibleMove,
    SelfBlockDisabled,
    DisableOpponentBlock,
    BypassBlock,
    ReflectBlocked(Bps),
    /// Round-opening: only active on turn 1.
    StunOpponent,
    Dodge(Bps),
    CounterMultiplier(Bps),
    SpecialExtraCost(u32),
    /// Cancels the opponent's card. Resolved pairwise, not per field.
    NullifyOpponent,
}

/// Surge cards a side can lock in at the start of a round.
///
/// The discriminant is the on-chain `card_code`; never reorder.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum SurgeCard {
    Berserk = 0,
    IronSkin = 1,
    Aegis = 2,
    Vampiric = 3,
    Siphon = 4,
    Burnout = 5,
    Leech = 6,
    Overcharge = 7,
    Regeneration = 8,
    SecondWind = 9,
    Shadowstep = 10,
    Evasion = 11,
    Sunder = 12,
    Piercing = 13,
    Mirror = 14,
    Flashbang = 15,
    Counterstrike = 16,
    Focus = 17,
    Flurry = 18,
    GlassCannon = 19,
    Nullify = 20,
}

impl SurgeCard {
    pub const ALL: [SurgeCard; 21] = [
        Self::Berserk,
        Self::IronSkin,
        Self::Aegis,
        Self::Vampiric,
        Self::Siphon,
        Self::Burnout,
        Self::Leech,
        Self::Overcharge,
        Self::Regeneration,
        Self::SecondWind,
        Self::Shadowstep,
        Self::Evasion,
        Self::Sunder,
        Self::Piercing,
        Self::Mirror,
        Self::Flashbang,
        Self::Counterstrike,
        Self::Focus,
        Self::Flurry,
        Self::GlassCannon,
        Self::Nullify,
    ];

    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Decode an on-chain card code. Unknown codes mean "no card".
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|card| card.code() == code)
    }

    /// Decode a card id. Unknown ids mean "no card".
    pub fn from_id(id: &str) -> Option<Self> {
        id.trim().parse().ok()
    }

    pub const fn effects(self) -> &'static [SurgeEffect] {
        match self {
            Self::Berserk => BERSERK,
            Self::IronSkin => IRON_SKIN,
            Self::Aegis => AEGIS,
            Self::Vampiric => VAMPIRIC,
            Self::Siphon => SIPHON,
            Self::Burnout => BURNOUT,
            Self::Leech => LEECH,
            Self::Overcharge => OVERCHARGE,
            Self::Regeneration => REGENERATION,
            Self::SecondWind => SECOND_WIND,
            Self::Shadowstep => SHADOWSTEP,
            Self::Evasion => EVASION,
            Self::Sunder => SUNDER,
            Self::Piercing => PIERCING,
            Self::Mirror => MIRROR,
            Self::Flashbang => FLASHBANG,
            Self::Counterstrike => COUNTERSTRIKE,
            Self::Focus => FOCUS,
            Self::Flurry => FLURRY,
            Self::GlassCannon => GLASS_CANNON,
            Self::Nullify => NULLIFY,
        }
    }

    pub fn nullifies_opponent(self) -> bool {
        self.effects()
            .iter()
            .any(|effect| matches!(effect, SurgeEffect::NullifyOpponent))
    }
}

// ===== card effect tables =====

use SurgeEffect as E;

const BERSERK: &[SurgeEffect] = &[E::DamageMultiplier(Bps::percent(125)), E::HpCost(2)];
const IRON_SKIN: &[SurgeEffect] = &[E::DamageReduction(Bps::percent(25))];
const AEGIS: &[SurgeEffect] = &[E::DamageImmunity];
const VAMPIRIC: &[SurgeEffect] = &[E::Lifesteal(Bps::percent(30))];
const SIPHON: &[SurgeEffect] = &[E::EnergySteal(15)];
const BURNOUT: &[SurgeEffect] = &[E::EnergyBurn(20)];
const LEECH: &[SurgeEffect] = &[E::EnergyDrain(5)];
const OVERCHARGE: &[SurgeEffect] = &[E::EnergyRegen(10)];
const REGENERATION: &[SurgeEffect] = &[E::HpRegen(3)];
const SECOND_WIND: &[SurgeEffect] = &[E::FullHeal];
const SHADOWSTEP: &[SurgeEffect] = &[E::InvisibleMove, E::Dodge(Bps::percent(15))];
const EVASION: &[SurgeEffect] = &[E::Dodge(Bps::percent(25))];
const SUNDER: &[SurgeEffect] = &[E::DisableOpponentBlock];
const PIERCING: &[SurgeEffect] = &[E::BypassBlock];
const MIRROR: &[SurgeEffect] = &[E::ReflectBlocked(Bps::percent(50))];
const FLASHBANG: &[SurgeEffect] = &[E::StunOpponent];
const COUNTERSTRIKE: &[SurgeEffect] = &[E::CounterMultiplier(Bps::percent(150))];
const FOCUS: &[SurgeEffect] = &[
    E::SpecialMultiplier(Bps::percent(140)),
    E::SpecialExtraCost(10),
];
const FLURRY: &[SurgeEffect] = &[E::StrikeMultiplier(Bps::percent(120))];
const GLASS_CANNON: &[SurgeEffect] = &[E::DamageMultiplier(Bps::percent(150)), E::SelfBlockDisabled];
const NULLIFY: &[SurgeEffect] = &[E::NullifyOpponent];
