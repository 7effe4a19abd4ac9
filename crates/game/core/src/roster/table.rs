use crate::fixed::Bps;

use super::{Archetype, CharacterProfile, DamageModifiers};

/// Id of the profile returned for unrecognized characters.
pub const DEFAULT_CHARACTER_ID: &str = "default";

/// Archetype-neutral baseline profile.
pub const DEFAULT_PROFILE: CharacterProfile = CharacterProfile {
    archetype: Archetype::Speed,
    max_hp: 100,
    max_energy: 100,
    energy_regen: 10,
    damage: DamageModifiers::NEUTRAL,
    block_effectiveness: Bps::percent(40),
    special_cost_multiplier: Bps::ONE,
};

const fn profile(
    archetype: Archetype,
    max_hp: u32,
    max_energy: u32,
    energy_regen: u32,
    damage_pct: [u32; 3],
    block_pct: u32,
    special_cost_pct: u32,
) -> CharacterProfile {
    CharacterProfile {
        archetype,
        max_hp,
        max_energy,
        energy_regen,
        damage: DamageModifiers::new(
            Bps::percent(damage_pct[0]),
            Bps::percent(damage_pct[1]),
            Bps::percent(damage_pct[2]),
        ),
        block_effectiveness: Bps::percent(block_pct),
        special_cost_multiplier: Bps::percent(special_cost_pct),
    }
}

// damage_pct is [punch, kick, special]
const ROSTER: [(&str, CharacterProfile); 9] = [
    (DEFAULT_CHARACTER_ID, DEFAULT_PROFILE),
    ("kira", profile(Archetype::Speed, 90, 110, 12, [110, 105, 95], 35, 90)),
    ("drift", profile(Archetype::Speed, 95, 100, 12, [105, 110, 100], 35, 100)),
    ("bastion", profile(Archetype::Tank, 130, 90, 8, [95, 100, 105], 55, 110)),
    ("golem", profile(Archetype::Tank, 125, 90, 9, [100, 100, 110], 50, 120)),
    ("cipher", profile(Archetype::Tech, 100, 120, 14, [95, 95, 120], 40, 80)),
    ("volt", profile(Archetype::Tech, 95, 115, 13, [100, 95, 115], 40, 85)),
    ("sable", profile(Archetype::Precision, 95, 100, 11, [110, 115, 105], 30, 100)),
    ("lancer", profile(Archetype::Precision, 100, 100, 10, [105, 120, 100], 35, 100)),
];

/// Look up a built-in profile, falling back to [`DEFAULT_PROFILE`].
pub fn get_profile(character_id: &str) -> CharacterProfile {
    StaticRoster.profile(character_id)
}

/// Source of character profiles.
///
/// Implementations return `None` for ids they do not know; callers go through
/// [`RosterOracle::profile`], which substitutes the default profile.
pub trait RosterOracle: Send + Sync {
    fn lookup(&self, character_id: &str) -> Option<CharacterProfile>;

    fn profile(&self, character_id: &str) -> CharacterProfile {
        self.lookup(character_id).unwrap_or(DEFAULT_PROFILE)
    }
}

/// The compiled-in roster.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticRoster;

impl StaticRoster {
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, CharacterProfile)> {
        ROSTER.iter().copied()
    }
}

impl RosterOracle for StaticRoster {
    fn lookup(&self, character_id: &str) -> Option<CharacterProfile> {
        ROSTER
            .iter()
            .find(|(id, _)| id.eq_ignore_ascii_case(character_id))
            .map(|(_, profile)| *profile)
    }
}
