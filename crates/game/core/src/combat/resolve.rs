//! Single-turn resolution.

use crate::decision::{DecisionContext, DecisionPurpose, DecisionSource};
use crate::moves::{MoveType, ResolutionOutcome, is_counter_hit, matrix_outcome};
use crate::roster::CharacterProfile;
use crate::state::{CombatantState, Side};
use crate::surge::{
    ModifierSet, apply_damage_modifiers, apply_defensive_modifiers, apply_energy_effects,
    apply_hp_effects, is_block_disabled, roll_dodge,
};

use super::{
    GUARD_BREAK_DAMAGE, GUARD_MAX, GuardUpdate, KICK_REFLECT, SHATTER_MULTIPLIER, SideResult,
    StatusEffect, StatusEffects, TurnResult, raw_damage, update_guard,
};

/// Read-only view of one side going into a turn.
#[derive(Clone, Copy, Debug)]
pub struct Combatant<'a> {
    pub state: &'a CombatantState,
    pub profile: &'a CharacterProfile,
    /// Modifiers for the whole round; narrowed to the turn during resolution.
    pub mods: &'a ModifierSet,
}

/// Where in the match the turn is played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnClock {
    pub round: u32,
    pub turn: u32,
}

/// Per-side damage bookkeeping while both attacks are resolved.
#[derive(Clone, Copy, Debug, Default)]
struct Ledger {
    dealt: u32,
    taken: u32,
    /// The side's attack connected after dodge.
    connected: bool,
    dodged: bool,
    negated: bool,
    reflected_out: u32,
    /// The side guarded but the attack bypassed it.
    pierced: bool,
}

/// Resolve one simultaneous exchange.
///
/// Pure and total: identical arguments (including the decision source's
/// seed) give identical results, and every returned hp, energy and guard value
/// is within its bounds.
pub fn resolve_turn(
    moves: [MoveType; 2],
    combatants: [Combatant<'_>; 2],
    clock: TurnClock,
    decisions: &(impl DecisionSource + ?Sized),
) -> TurnResult {
    let mods = combatants.map(|c| c.mods.for_turn(clock.turn));
    let profile = |side: Side| combatants[side.index()].profile;
    let state = |side: Side| combatants[side.index()].state;

    // 1. stun gating
    let effective = Side::ALL.map(|side| {
        let opponent_stuns = mods[side.opponent().index()].stun_opponent;
        if state(side).is_stunned || opponent_stuns {
            MoveType::Stunned
        } else {
            moves[side.index()]
        }
    });

    // 2. a disabled block stands in the open: the opponent resolves against it
    //    as if it were stunned
    let block_failed = Side::ALL.map(|side| {
        effective[side.index()] == MoveType::Block
            && is_block_disabled(&mods[side.index()], &mods[side.opponent().index()])
    });
    let faced = Side::ALL.map(|side| {
        if block_failed[side.index()] {
            MoveType::Stunned
        } else {
            effective[side.index()]
        }
    });

    // 3-4. outcome and counter-hit
    let mut outcomes = Side::ALL.map(|side| {
        if block_failed[side.index()] {
            ResolutionOutcome::Staggered
        } else {
            matrix_outcome(effective[side.index()], faced[side.opponent().index()])
        }
    });
    let counter = Side::ALL
        .map(|side| is_counter_hit(effective[side.index()], faced[side.opponent().index()]));

    // 5-8. damage
    let mut ledger = [Ledger::default(); 2];
    for side in Side::ALL {
        let (me, them) = (side.index(), side.opponent().index());
        let mv = effective[me];
        let outcome = outcomes[me];
        let kick_reflected = outcome == ResolutionOutcome::Reflected;
        if !mv.is_attack() || !(outcome.connects() || kick_reflected) {
            continue;
        }

        let raw = raw_damage(
            mv,
            profile(side),
            profile(side.opponent()).archetype,
            state(side).is_staggered,
        );
        let modified = apply_damage_modifiers(raw, &mods[me], mv, counter[me]);

        if kick_reflected {
            if !mods[me].bypass_block {
                let recoil = KICK_REFLECT.apply(modified);
                let recoil = apply_defensive_modifiers(recoil, &mods[me], false).actual_damage;
                ledger[me].taken += recoil;
                ledger[them].reflected_out += recoil;
                continue;
            }
            outcomes[me] = ResolutionOutcome::Hit;
        }

        if effective[them] != MoveType::Stunned {
            let ctx = DecisionContext::new(
                clock.round,
                clock.turn,
                side.opponent(),
                DecisionPurpose::Dodge,
            );
            if roll_dodge(&mods[them], decisions, ctx) {
                outcomes[me] = ResolutionOutcome::Missed;
                ledger[them].dodged = true;
                continue;
            }
        }

        // a bypassed guard neither reduces, reflects nor builds
        let guarding = outcomes[them] == ResolutionOutcome::Guarding;
        let guard_holds = guarding && !mods[me].bypass_block;
        ledger[them].pierced |= guarding && mods[me].bypass_block;
        let incoming = if outcomes[me] == ResolutionOutcome::Shattered {
            SHATTER_MULTIPLIER.apply(modified)
        } else if guard_holds {
            profile(side.opponent())
                .block_effectiveness
                .complement()
                .apply(modified)
        } else {
            modified
        };

        let defense = apply_defensive_modifiers(incoming, &mods[them], guard_holds);
        ledger[me].connected = true;
        ledger[me].dealt += defense.actual_damage;
        ledger[them].taken += defense.actual_damage;
        ledger[me].taken += defense.reflected_damage;
        ledger[them].reflected_out += defense.reflected_damage;
        ledger[them].negated |= mods[them].damage_immunity && incoming > 0;
    }

    // 9. guard
    let guard = Side::ALL.map(|side| {
        if ledger[side.index()].pierced {
            return GuardUpdate {
                meter: state(side).guard_meter.min(GUARD_MAX - 1),
                ..GuardUpdate::default()
            };
        }
        update_guard(
            state(side).guard_meter,
            outcomes[side.index()],
            outcomes[side.opponent().index()],
            effective[side.opponent().index()],
        )
    });
    for side in Side::ALL {
        if guard[side.index()].broken {
            ledger[side.index()].taken += GUARD_BREAK_DAMAGE;
        }
    }

    // 10. energy: both costs come out first, then cross effects against what
    //     is left
    let after_cost = Side::ALL.map(|side| {
        let cost = profile(side).energy_cost(
            effective[side.index()],
            mods[side.index()].special_extra_cost,
        );
        state(side).energy.min(state(side).max_energy).saturating_sub(cost)
    });
    let energy_effects = Side::ALL.map(|side| {
        apply_energy_effects(
            &mods[side.index()],
            after_cost[side.opponent().index()],
            ledger[side.index()].connected,
        )
    });

    let sides = Side::ALL.map(|side| {
        let (me, them) = (side.index(), side.opponent().index());
        let current = state(side);
        let own_mods = &mods[me];

        let drained = energy_effects[them].opponent_loss();
        let energy = after_cost[me]
            .saturating_sub(drained)
            .saturating_add(energy_effects[me].stolen)
            .saturating_add(profile(side).energy_regen)
            .saturating_add(energy_effects[me].regen_bonus)
            .min(current.max_energy);

        // 11. hp
        let mut hp = current.hp.min(current.max_hp).saturating_sub(ledger[me].taken);
        let mut hp_regen = 0;
        let mut lifesteal = 0;
        if hp > 0 {
            let healed = apply_hp_effects(own_mods, hp, current.max_hp);
            hp_regen = (i64::from(healed) - i64::from(hp))
                .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
            hp = healed;
        }
        if hp > 0 && ledger[me].dealt > 0 && !own_mods.lifesteal.is_zero() {
            let healed = hp
                .saturating_add(own_mods.lifesteal.apply(ledger[me].dealt))
                .min(current.max_hp);
            lifesteal = healed - hp;
            hp = healed;
        }

        // 12. next-turn status
        let outcome = outcomes[me];
        let stunned_next = outcome == ResolutionOutcome::Missed || guard[me].broken;
        let staggered_next = outcome == ResolutionOutcome::Staggered;
        let counter_hit = counter[me] && ledger[me].connected;

        let mut status_effects = StatusEffects::new();
        let flags = [
            (effective[me] == MoveType::Stunned, StatusEffect::Stunned),
            (block_failed[me], StatusEffect::BlockFailed),
            (ledger[me].dodged, StatusEffect::Dodged),
            (counter_hit, StatusEffect::CounterHit),
            (guard[me].shattered, StatusEffect::GuardShattered),
            (guard[me].broken, StatusEffect::GuardBroken),
            (ledger[me].negated, StatusEffect::DamageNegated),
            (ledger[me].reflected_out > 0, StatusEffect::Reflected),
            (staggered_next, StatusEffect::Staggered),
        ];
        for (set, effect) in flags {
            if set && status_effects.try_push(effect).is_err() {
                break;
            }
        }

        SideResult {
            submitted_move: moves[me],
            effective_move: effective[me],
            outcome,
            damage_dealt: ledger[me].dealt,
            damage_taken: ledger[me].taken,
            energy_spent: current.energy.min(current.max_energy) - after_cost[me],
            guard_buildup_delta: guard[me].delta,
            status_effects,
            hp_regen,
            lifesteal,
            energy_drained: drained,
            counter_hit,
            move_hidden: own_mods.invisible_move,
            hp,
            energy,
            guard_meter: guard[me].meter,
            stunned_next,
            staggered_next,
        }
    });

    TurnResult {
        round: clock.round,
        turn: clock.turn,
        sides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::{FixedDecisions, SeededDecisions};
    use crate::roster::{DEFAULT_PROFILE, StaticRoster};
    use crate::surge::{SurgeCard, resolve_modifiers};
    use MoveType::*;
    use ResolutionOutcome as O;

    struct Setup {
        states: [CombatantState; 2],
        profiles: [CharacterProfile; 2],
        mods: [ModifierSet; 2],
    }

    impl Setup {
        fn neutral() -> Self {
            Self {
                states: [
                    CombatantState::new("default", &DEFAULT_PROFILE),
                    CombatantState::new("default", &DEFAULT_PROFILE),
                ],
                profiles: [DEFAULT_PROFILE; 2],
                mods: [ModifierSet::IDENTITY; 2],
            }
        }

        fn with_cards(mut self, cards: [Option<SurgeCard>; 2]) -> Self {
            self.mods = resolve_modifiers(cards);
            self
        }

        fn resolve_at(
            &self,
            moves: [MoveType; 2],
            turn: u32,
            decisions: &impl DecisionSource,
        ) -> TurnResult {
            let combatants = [0, 1].map(|i| Combatant {
                state: &self.states[i],
                profile: &self.profiles[i],
                mods: &self.mods[i],
            });
            resolve_turn(moves, combatants, TurnClock { round: 1, turn }, decisions)
        }

        fn resolve(&self, moves: [MoveType; 2]) -> TurnResult {
            self.resolve_at(moves, 1, &FixedDecisions::NEVER)
        }
    }

    #[test]
    fn mirrored_punches_trade_evenly() {
        let result = Setup::neutral().resolve([Punch, Punch]);
        for side in &result.sides {
            assert_eq!(side.outcome, O::Clash);
            assert_eq!(side.damage_dealt, 10);
            assert_eq!(side.damage_taken, 10);
            assert_eq!(side.hp, 90);
            assert_eq!(side.guard_buildup_delta, 0);
            assert_eq!(side.guard_meter, 0);
            assert_eq!(side.energy_spent, 0);
            assert_eq!(side.energy, 100);
        }
    }

    #[test]
    fn mirrored_punches_regen_from_partial_energy() {
        let mut setup = Setup::neutral();
        setup.states[0].energy = 40;
        let result = setup.resolve([Punch, Punch]);
        assert_eq!(result.sides[0].energy, 50);
    }

    #[test]
    fn special_shatters_a_block() {
        let mut setup = Setup::neutral();
        setup.states[1].guard_meter = 50;
        let result = setup.resolve([Special, Block]);
        let [attacker, defender] = &result.sides;

        assert_eq!(attacker.outcome, O::Shattered);
        assert_eq!(attacker.energy_spent, 50);
        assert_eq!(defender.guard_meter, 0);
        assert_eq!(defender.guard_buildup_delta, -50);
        assert!(defender.has_status(StatusEffect::GuardShattered));
        // floor(25 * 1.5), block effectiveness not applied
        assert_eq!(defender.damage_taken, 37);
        assert_eq!(attacker.damage_dealt, 37);
        assert_eq!(defender.hp, 63);
        assert!(attacker.counter_hit);
    }

    #[test]
    fn guard_reduces_and_builds() {
        let result = Setup::neutral().resolve([Kick, Block]);
        let [kicker, blocker] = &result.sides;
        assert_eq!(kicker.outcome, O::Reflected);
        assert_eq!(blocker.outcome, O::Guarding);
        assert_eq!(blocker.damage_taken, 0);
        assert_eq!(kicker.damage_taken, 7);
        assert_eq!(blocker.guard_meter, 25);
        assert!(blocker.has_status(StatusEffect::Reflected));

        let result = Setup::neutral().resolve([Punch, Block]);
        // 10 * (1 - 0.4)
        assert_eq!(result.sides[1].damage_taken, 6);
        assert_eq!(result.sides[1].guard_meter, 25);
        assert_eq!(result.sides[1].energy, 100);
    }

    #[test]
    fn special_whiffs_into_punch() {
        let result = Setup::neutral().resolve([Special, Punch]);
        let [special, punch] = &result.sides;
        assert_eq!(special.outcome, O::Missed);
        assert!(special.stunned_next);
        assert_eq!(special.damage_dealt, 0);
        assert!(punch.counter_hit);
        assert_eq!(special.damage_taken, 10);
    }

    #[test]
    fn stunned_side_takes_unguarded_hit() {
        let mut setup = Setup::neutral();
        setup.states[1].is_stunned = true;
        let result = setup.resolve([Kick, Block]);
        let [kicker, stunned] = &result.sides;
        assert_eq!(stunned.effective_move, Stunned);
        assert_eq!(stunned.submitted_move, Block);
        assert_eq!(kicker.outcome, O::Hit);
        assert_eq!(stunned.damage_taken, 15);
        assert_eq!(stunned.energy_spent, 0);
        assert!(!stunned.stunned_next);
    }

    #[test]
    fn flashbang_stuns_only_on_round_opening() {
        let setup = Setup::neutral().with_cards([Some(SurgeCard::Flashbang), None]);
        let opening = setup.resolve_at([Punch, Kick], 1, &FixedDecisions::NEVER);
        assert_eq!(opening.sides[1].effective_move, Stunned);
        assert_eq!(opening.sides[1].damage_taken, 10);

        let later = setup.resolve_at([Punch, Kick], 2, &FixedDecisions::NEVER);
        assert_eq!(later.sides[1].effective_move, Kick);
    }

    #[test]
    fn sundered_block_fails_but_still_costs() {
        let setup = Setup::neutral().with_cards([Some(SurgeCard::Sunder), None]);
        let result = setup.resolve([Punch, Block]);
        let [punch, blocker] = &result.sides;
        assert_eq!(blocker.outcome, O::Staggered);
        assert!(blocker.has_status(StatusEffect::BlockFailed));
        assert_eq!(blocker.damage_taken, 10);
        assert_eq!(blocker.guard_meter, 0);
        assert_eq!(blocker.energy_spent, 5);
        assert_eq!(punch.outcome, O::Hit);
    }

    #[test]
    fn piercing_kick_goes_through_guard() {
        let setup = Setup::neutral().with_cards([Some(SurgeCard::Piercing), None]);
        let result = setup.resolve([Kick, Block]);
        assert_eq!(result.sides[0].outcome, O::Hit);
        assert_eq!(result.sides[0].damage_taken, 0);
        assert_eq!(result.sides[1].damage_taken, 15);
        assert_eq!(result.sides[1].guard_meter, 0);
        assert_eq!(result.sides[1].guard_buildup_delta, 0);
    }

    #[test]
    fn mirror_reflects_part_of_a_guarded_hit() {
        let setup = Setup::neutral().with_cards([None, Some(SurgeCard::Mirror)]);
        let result = setup.resolve([Punch, Block]);
        let [puncher, blocker] = &result.sides;
        // 10 * (1 - 0.4) lands, half of that comes back
        assert_eq!(blocker.damage_taken, 6);
        assert_eq!(puncher.damage_taken, 3);
        assert!(blocker.has_status(StatusEffect::Reflected));
        assert_eq!(blocker.guard_meter, 25);
    }

    #[test]
    fn piercing_cancels_mirror_and_guard_buildup() {
        let setup =
            Setup::neutral().with_cards([Some(SurgeCard::Piercing), Some(SurgeCard::Mirror)]);
        let result = setup.resolve([Punch, Block]);
        let [puncher, blocker] = &result.sides;
        assert_eq!(blocker.damage_taken, 10);
        assert_eq!(puncher.damage_taken, 0);
        assert!(!blocker.has_status(StatusEffect::Reflected));
        assert_eq!(blocker.guard_meter, 0);
    }

    #[test]
    fn pierced_guard_keeps_its_meter() {
        let mut setup = Setup::neutral().with_cards([Some(SurgeCard::Piercing), None]);
        setup.states[1].guard_meter = 40;
        let result = setup.resolve_at([Punch, Block], 2, &FixedDecisions::NEVER);
        assert_eq!(result.sides[1].guard_meter, 40);
        assert!(!result.sides[1].has_status(StatusEffect::GuardBroken));
    }

    #[test]
    fn burnout_burns_energy_on_a_hit() {
        let setup = Setup::neutral().with_cards([Some(SurgeCard::Burnout), None]);
        let result = setup.resolve([Punch, Punch]);
        // 100 - 20 burned + 10 regen
        assert_eq!(result.sides[1].energy, 90);
        assert_eq!(result.sides[1].energy_drained, 20);
        assert_eq!(result.sides[0].energy_drained, 0);

        let whiffed = setup.resolve([Block, Block]);
        assert_eq!(whiffed.sides[1].energy_drained, 0);
    }

    #[test]
    fn leech_drains_without_a_hit_and_overcharge_adds_regen() {
        let mut setup =
            Setup::neutral().with_cards([Some(SurgeCard::Leech), Some(SurgeCard::Overcharge)]);
        setup.states[0].energy = 50;
        setup.states[1].energy = 50;
        let result = setup.resolve([Block, Block]);
        let [leech, overcharge] = &result.sides;
        // 50 - 5 block + 10 regen
        assert_eq!(leech.energy, 55);
        assert_eq!(leech.energy_drained, 0);
        // 50 - 5 block - 5 drained + 10 regen + 10 bonus
        assert_eq!(overcharge.energy, 60);
        assert_eq!(overcharge.energy_drained, 5);
    }

    #[test]
    fn second_wind_heals_fully_on_turn_one_only() {
        let mut setup = Setup::neutral().with_cards([Some(SurgeCard::SecondWind), None]);
        setup.states[0].hp = 45;
        let result = setup.resolve([Punch, Punch]);
        assert_eq!(result.sides[0].hp, 100);
        assert_eq!(result.sides[0].hp_regen, 65);

        let later = setup.resolve_at([Punch, Punch], 2, &FixedDecisions::NEVER);
        assert_eq!(later.sides[0].hp, 35);
        assert_eq!(later.sides[0].hp_regen, 0);
    }

    #[test]
    fn regeneration_heals_after_damage() {
        let mut setup = Setup::neutral().with_cards([None, Some(SurgeCard::Regeneration)]);
        setup.states[1].hp = 50;
        let result = setup.resolve_at([Punch, Punch], 3, &FixedDecisions::NEVER);
        assert_eq!(result.sides[1].hp, 43);
        assert_eq!(result.sides[1].hp_regen, 3);

        setup.states[1].hp = 100;
        let capped = setup.resolve([Block, Block]);
        assert_eq!(capped.sides[1].hp, 100);
        assert_eq!(capped.sides[1].hp_regen, 0);
    }

    #[test]
    fn huge_heal_saturates_reported_regen() {
        let mut setup = Setup::neutral().with_cards([Some(SurgeCard::SecondWind), None]);
        setup.profiles[0].max_hp = u32::MAX;
        setup.states[0].max_hp = u32::MAX;
        setup.states[0].hp = 1;
        let result = setup.resolve([Block, Block]);
        assert_eq!(result.sides[0].hp, u32::MAX);
        assert_eq!(result.sides[0].hp_regen, i32::MAX);
    }

    #[test]
    fn dodge_turns_attack_into_miss() {
        let setup = Setup::neutral().with_cards([None, Some(SurgeCard::Evasion)]);
        let dodged = setup.resolve_at([Kick, Punch], 2, &FixedDecisions::ALWAYS);
        assert_eq!(dodged.sides[0].outcome, O::Missed);
        assert!(dodged.sides[0].stunned_next);
        assert!(dodged.sides[1].has_status(StatusEffect::Dodged));
        assert_eq!(dodged.sides[1].damage_taken, 0);

        let landed = setup.resolve_at([Kick, Punch], 2, &FixedDecisions::NEVER);
        assert_eq!(landed.sides[1].damage_taken, 15);
    }

    #[test]
    fn immunity_negates_opening_hit() {
        let setup = Setup::neutral().with_cards([Some(SurgeCard::Aegis), None]);
        let result = setup.resolve([Block, Special]);
        assert_eq!(result.sides[0].damage_taken, 0);
        assert_eq!(result.sides[0].hp, 100);
        assert!(result.sides[0].has_status(StatusEffect::DamageNegated));
    }

    #[test]
    fn guard_break_stuns_and_damages() {
        let mut setup = Setup::neutral();
        setup.states[1].guard_meter = 90;
        let result = setup.resolve([Punch, Block]);
        let guarder = &result.sides[1];
        assert!(guarder.has_status(StatusEffect::GuardBroken));
        assert_eq!(guarder.guard_meter, 0);
        assert!(guarder.stunned_next);
        assert_eq!(guarder.damage_taken, 6 + GUARD_BREAK_DAMAGE);
    }

    #[test]
    fn vampiric_and_siphon_move_resources() {
        let mut setup = Setup::neutral().with_cards([Some(SurgeCard::Vampiric), Some(SurgeCard::Siphon)]);
        setup.states[0].hp = 50;
        let result = setup.resolve([Special, Punch]);
        // special whiffs; punch connects and steals 15
        assert_eq!(result.sides[0].lifesteal, 0);
        assert_eq!(result.sides[0].energy_drained, 15);
        assert_eq!(result.sides[0].energy, 100 - 50 - 15 + 10);
        assert_eq!(result.sides[1].energy, 100);

        let result = setup.resolve([Kick, Punch]);
        // kick beats punch: 15 dealt, 30% back
        assert_eq!(result.sides[0].damage_dealt, 15);
        assert_eq!(result.sides[0].lifesteal, 4);
        assert_eq!(result.sides[0].hp, 54);
    }

    #[test]
    fn hp_cost_never_kills() {
        let mut setup = Setup::neutral().with_cards([Some(SurgeCard::Berserk), None]);
        setup.states[0].hp = 2;
        let result = setup.resolve([Block, Block]);
        assert_eq!(result.sides[0].hp, 1);
        assert_eq!(result.sides[0].hp_regen, -1);
    }

    #[test]
    fn staggered_attacker_hits_softer() {
        let mut setup = Setup::neutral();
        setup.states[0].is_staggered = true;
        let result = setup.resolve([Special, Kick]);
        assert_eq!(result.sides[1].damage_taken, 18);
        assert!(!result.sides[0].staggered_next);

        let result = Setup::neutral().resolve([Punch, Kick]);
        assert!(result.sides[0].staggered_next);
    }

    #[test]
    fn resolution_is_deterministic() {
        let roster = StaticRoster;
        let mut setup = Setup::neutral()
            .with_cards([Some(SurgeCard::Shadowstep), Some(SurgeCard::Evasion)]);
        setup.profiles = [
            crate::roster::RosterOracle::profile(&roster, "kira"),
            crate::roster::RosterOracle::profile(&roster, "cipher"),
        ];
        let decisions = SeededDecisions::from_match_id("determinism");
        for turn in 1..=20 {
            let a = setup.resolve_at([Punch, Kick], turn, &decisions);
            let b = setup.resolve_at([Punch, Kick], turn, &decisions);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn results_stay_in_bounds_for_every_pairing() {
        let decisions = SeededDecisions::new(7);
        let cards: Vec<Option<SurgeCard>> =
            core::iter::once(None).chain(SurgeCard::ALL.map(Some)).collect();
        let all_moves = [Punch, Kick, Block, Special, Stunned];

        for &card_one in &cards {
            for &card_two in &cards {
                let mut setup = Setup::neutral().with_cards([card_one, card_two]);
                setup.states[0].hp = 3;
                setup.states[0].energy = 4;
                setup.states[1].guard_meter = 95;
                for one in all_moves {
                    for two in all_moves {
                        let result = setup.resolve_at([one, two], 1, &decisions);
                        for side in &result.sides {
                            assert!(side.hp <= 100);
                            assert!(side.energy <= 100);
                            assert!(side.guard_meter < 100);
                        }
                    }
                }
            }
        }
    }
}
