//! Raw damage before surge modifiers.

use crate::fixed::{Bps, apply_chain};
use crate::moves::MoveType;
use crate::roster::{Archetype, CharacterProfile};

use super::STAGGER_PENALTY;

/// Base damage × character multiplier × archetype counter bonus, reduced by
/// the stagger penalty when the attacker entered the turn staggered. Floored
/// once.
pub fn raw_damage(
    mv: MoveType,
    attacker: &CharacterProfile,
    defender: Archetype,
    staggered: bool,
) -> u32 {
    let stagger = if staggered {
        STAGGER_PENALTY.complement()
    } else {
        Bps::ONE
    };
    apply_chain(
        mv.base_stats().damage,
        &[
            attacker.damage.for_move(mv),
            Archetype::multiplier_against(attacker.archetype, defender),
            stagger,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{DEFAULT_PROFILE, get_profile};

    #[test]
    fn neutral_profile_deals_base_damage() {
        for mv in MoveType::SELECTABLE {
            assert_eq!(
                raw_damage(mv, &DEFAULT_PROFILE, Archetype::Speed, false),
                mv.base_stats().damage
            );
        }
    }

    #[test]
    fn archetype_counter_and_character_multipliers_stack() {
        // sable: kick 1.15, Precision counters Speed for +20%
        let sable = get_profile("sable");
        assert_eq!(raw_damage(MoveType::Kick, &sable, Archetype::Speed, false), 20);
        assert_eq!(raw_damage(MoveType::Kick, &sable, Archetype::Tank, false), 17);
    }

    #[test]
    fn stagger_cuts_a_quarter() {
        assert_eq!(raw_damage(MoveType::Special, &DEFAULT_PROFILE, Archetype::Speed, true), 18);
        assert_eq!(raw_damage(MoveType::Punch, &DEFAULT_PROFILE, Archetype::Speed, true), 7);
    }
}
