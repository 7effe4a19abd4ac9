//! Round/match state machine.
//!
//! [`MatchEngine`] is the only writer of [`MatchState`]. Each
//! [`MatchEngine::apply_turn`] resolves the surge pair, runs the turn resolver,
//! writes the result back, advances the turn counter and checks for the end of
//! the round and match.
//!
//! ```text
//! RoundInProgress ──KO / turn ceiling──▶ RoundOver ──start_new_round──▶ RoundInProgress
//!                                            │
//!                                            └──rounds_to_win reached──▶ MatchOver
//! ```

mod errors;

pub use errors::MatchError;

use core::cmp::Ordering;

use crate::available::{AvailableMoves, available_moves, can_afford_move};
use crate::combat::{Combatant, TurnClock, TurnResult, resolve_turn};
use crate::config::MatchConfig;
use crate::decision::{DecisionSource, SeededDecisions};
use crate::moves::MoveType;
use crate::state::{Fighter, MatchPhase, MatchState, RoundOutcome, Side};
use crate::surge::{ModifierSet, SurgeCard, resolve_modifiers};

/// Everything a caller needs after one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOutcome {
    pub result: TurnResult,
    /// Set when this turn ended the round.
    pub round_end: Option<RoundOutcome>,
    /// Set when this turn ended the match.
    pub match_winner: Option<Side>,
}

/// Owns one match and drives it turn by turn.
pub struct MatchEngine<D: DecisionSource = SeededDecisions> {
    state: MatchState,
    decisions: D,
}

impl<D: DecisionSource> MatchEngine<D> {
    pub fn new(config: &MatchConfig, fighters: [Fighter; 2], decisions: D) -> Self {
        Self::from_state(MatchState::new(config, fighters), decisions)
    }

    /// Resume from a snapshot.
    pub fn from_state(state: MatchState, decisions: D) -> Self {
        Self { state, decisions }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn into_state(self) -> MatchState {
        self.state
    }

    pub fn decisions(&self) -> &D {
        &self.decisions
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase()
    }

    /// Both sides' modifiers as they apply to the turn about to be played.
    pub fn current_modifiers(&self) -> [ModifierSet; 2] {
        resolve_modifiers(self.state.active_cards).map(|mods| mods.for_turn(self.state.current_turn))
    }

    /// Resolve one turn.
    ///
    /// `cards` are only read on turn 1 of a round, where they become the
    /// round's active cards; later turns ignore them.
    pub fn apply_turn(
        &mut self,
        moves: [MoveType; 2],
        cards: [Option<SurgeCard>; 2],
    ) -> Result<TurnOutcome, MatchError> {
        self.ensure_accepting_turns()?;

        if self.state.current_turn == 1 {
            self.state.active_cards = cards;
        }

        let mods = resolve_modifiers(self.state.active_cards);
        let clock = TurnClock {
            round: self.state.current_round,
            turn: self.state.current_turn,
        };
        let result = {
            let state = &self.state;
            let combatants = Side::ALL.map(|side| Combatant {
                state: state.combatant(side),
                profile: state.profile(side),
                mods: &mods[side.index()],
            });
            resolve_turn(moves, combatants, clock, &self.decisions)
        };

        for side in Side::ALL {
            let applied = result.side(side);
            let combatant = &mut self.state.combatants[side.index()];
            combatant.hp = applied.hp;
            combatant.energy = applied.energy;
            combatant.guard_meter = applied.guard_meter;
            combatant.is_stunned = applied.stunned_next;
            combatant.is_staggered = applied.staggered_next;
        }
        self.state.current_turn += 1;

        let round_end = self.detect_round_end(clock.turn);
        let mut match_winner = None;
        if let Some(outcome) = round_end {
            match_winner = self.finish_round(outcome);
        }

        Ok(TurnOutcome {
            result,
            round_end,
            match_winner,
        })
    }

    /// Reset both combatants and advance to the next round.
    pub fn start_new_round(&mut self) -> Result<(), MatchError> {
        if let Some(winner) = self.state.match_winner {
            return Err(MatchError::MatchOver { winner });
        }
        if !self.state.is_round_over {
            return Err(MatchError::RoundInProgress {
                round: self.state.current_round,
                turn: self.state.current_turn,
            });
        }

        for combatant in &mut self.state.combatants {
            combatant.reset_for_round();
        }
        self.state.active_cards = [None, None];
        self.state.current_round += 1;
        self.state.current_turn = 1;
        self.state.is_round_over = false;
        self.state.round_winner = None;
        Ok(())
    }

    pub fn available_moves(&self, side: Side) -> AvailableMoves {
        let mods = self.current_modifiers();
        available_moves(
            self.state.combatant(side),
            self.state.profile(side),
            &mods[side.index()],
            &mods[side.opponent().index()],
        )
    }

    pub fn can_afford(&self, side: Side, mv: MoveType) -> bool {
        let mods = self.current_modifiers();
        can_afford_move(
            self.state.combatant(side),
            self.state.profile(side),
            &mods[side.index()],
            mv,
        )
    }

    fn ensure_accepting_turns(&self) -> Result<(), MatchError> {
        if let Some(winner) = self.state.match_winner {
            return Err(MatchError::MatchOver { winner });
        }
        if self.state.is_round_over {
            return Err(MatchError::RoundOver {
                round: self.state.current_round,
            });
        }
        Ok(())
    }

    /// `turn_played` is the turn that was just resolved.
    fn detect_round_end(&self, turn_played: u32) -> Option<RoundOutcome> {
        let [one, two] = &self.state.combatants;
        match (one.is_ko(), two.is_ko()) {
            (true, true) => return Some(RoundOutcome::Draw),
            (true, false) => return Some(RoundOutcome::Won(Side::Two)),
            (false, true) => return Some(RoundOutcome::Won(Side::One)),
            (false, false) => {}
        }

        if turn_played < self.state.max_turns_per_round {
            return None;
        }
        Some(match one.cmp_hp_ratio(two) {
            Ordering::Greater => RoundOutcome::Won(Side::One),
            Ordering::Less => RoundOutcome::Won(Side::Two),
            Ordering::Equal => RoundOutcome::Draw,
        })
    }

    /// Record the round result; returns the match winner if this decided it.
    fn finish_round(&mut self, outcome: RoundOutcome) -> Option<Side> {
        self.state.is_round_over = true;
        self.state.round_winner = Some(outcome);

        let winner = outcome.winner()?;
        let rounds_to_win = self.state.rounds_to_win();
        let combatant = &mut self.state.combatants[winner.index()];
        combatant.rounds_won += 1;
        if combatant.rounds_won < rounds_to_win {
            return None;
        }

        self.state.is_match_over = true;
        self.state.match_winner = Some(winner);
        Some(winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchFormat;
    use crate::decision::FixedDecisions;
    use crate::roster::StaticRoster;
    use MoveType::*;

    fn engine(format: MatchFormat) -> MatchEngine<FixedDecisions> {
        MatchEngine::new(
            &MatchConfig::new(format),
            [
                Fighter::from_roster("default", &StaticRoster),
                Fighter::from_roster("default", &StaticRoster),
            ],
            FixedDecisions::NEVER,
        )
    }

    /// Side One kicks while Side Two punches until Two is down.
    fn win_round_for_one(engine: &mut MatchEngine<FixedDecisions>) -> TurnOutcome {
        loop {
            let outcome = engine
                .apply_turn([Kick, Punch], [None, None])
                .expect("round in progress");
            if outcome.round_end.is_some() {
                return outcome;
            }
        }
    }

    #[test]
    fn best_of_three_ends_after_two_wins() {
        let mut engine = engine(MatchFormat::Bo3);

        let first = win_round_for_one(&mut engine);
        assert_eq!(first.round_end, Some(RoundOutcome::Won(Side::One)));
        assert_eq!(first.match_winner, None);
        assert!(!engine.state().is_match_over);
        assert_eq!(engine.phase(), MatchPhase::RoundOver(RoundOutcome::Won(Side::One)));

        engine.start_new_round().expect("round over");
        assert_eq!(engine.state().current_round, 2);
        assert_eq!(engine.state().combatant(Side::Two).hp, 100);
        assert_eq!(engine.state().combatant(Side::One).rounds_won, 1);

        let second = win_round_for_one(&mut engine);
        assert_eq!(second.match_winner, Some(Side::One));
        assert!(engine.state().is_match_over);
        assert_eq!(engine.state().match_winner, Some(Side::One));
        assert_eq!(engine.phase(), MatchPhase::MatchOver(Side::One));
    }

    #[test]
    fn nothing_leaves_match_over() {
        let mut engine = engine(MatchFormat::Bo1);
        win_round_for_one(&mut engine);

        assert_eq!(
            engine.apply_turn([Punch, Punch], [None, None]),
            Err(MatchError::MatchOver { winner: Side::One })
        );
        assert_eq!(
            engine.start_new_round(),
            Err(MatchError::MatchOver { winner: Side::One })
        );
    }

    #[test]
    fn turns_rejected_between_rounds() {
        let mut engine = engine(MatchFormat::Bo3);
        assert!(matches!(
            engine.start_new_round(),
            Err(MatchError::RoundInProgress { round: 1, turn: 1 })
        ));

        win_round_for_one(&mut engine);
        assert_eq!(
            engine.apply_turn([Punch, Punch], [None, None]),
            Err(MatchError::RoundOver { round: 1 })
        );
    }

    #[test]
    fn round_ends_at_turn_ceiling() {
        let mut engine = MatchEngine::new(
            &MatchConfig::new(MatchFormat::Bo3).with_max_turns(3),
            [
                Fighter::from_roster("default", &StaticRoster),
                Fighter::from_roster("default", &StaticRoster),
            ],
            FixedDecisions::NEVER,
        );

        for _ in 0..2 {
            let outcome = engine.apply_turn([Block, Block], [None, None]).expect("in progress");
            assert_eq!(outcome.round_end, None);
        }
        let outcome = engine.apply_turn([Block, Block], [None, None]).expect("in progress");
        assert_eq!(outcome.round_end, Some(RoundOutcome::Draw));
        assert!(engine.state().is_round_over);
        assert_eq!(engine.state().combatant(Side::One).rounds_won, 0);
    }

    #[test]
    fn turn_ceiling_favours_higher_hp_ratio() {
        let mut engine = MatchEngine::new(
            &MatchConfig::new(MatchFormat::Bo3).with_max_turns(1),
            [
                Fighter::from_roster("default", &StaticRoster),
                Fighter::from_roster("default", &StaticRoster),
            ],
            FixedDecisions::NEVER,
        );
        let outcome = engine.apply_turn([Punch, Block], [None, None]).expect("in progress");
        assert_eq!(outcome.round_end, Some(RoundOutcome::Won(Side::One)));
    }

    #[test]
    fn every_round_terminates_within_ceiling() {
        let mut engine = engine(MatchFormat::Bo5);
        let mut turns = 0;
        while engine.phase() == MatchPhase::RoundInProgress {
            engine.apply_turn([Block, Block], [None, None]).expect("in progress");
            turns += 1;
        }
        assert_eq!(turns, MatchConfig::DEFAULT_MAX_TURNS_PER_ROUND);
    }

    #[test]
    fn double_ko_is_a_draw() {
        let mut engine = engine(MatchFormat::Bo3);
        let mut state = engine.state().clone();
        state.combatants[0].hp = 10;
        state.combatants[1].hp = 10;
        engine = MatchEngine::from_state(state, FixedDecisions::NEVER);

        let outcome = engine.apply_turn([Punch, Punch], [None, None]).expect("in progress");
        assert_eq!(outcome.round_end, Some(RoundOutcome::Draw));
        assert_eq!(outcome.match_winner, None);
        assert_eq!(engine.state().combatant(Side::One).rounds_won, 0);
        assert_eq!(engine.state().combatant(Side::Two).rounds_won, 0);
    }

    #[test]
    fn cards_only_bind_on_turn_one() {
        let mut engine = engine(MatchFormat::Bo3);
        engine
            .apply_turn([Punch, Punch], [Some(SurgeCard::Berserk), None])
            .expect("in progress");
        assert_eq!(engine.state().active_card(Side::One), Some(SurgeCard::Berserk));

        engine
            .apply_turn([Punch, Punch], [Some(SurgeCard::Aegis), Some(SurgeCard::Aegis)])
            .expect("in progress");
        assert_eq!(engine.state().active_card(Side::One), Some(SurgeCard::Berserk));
        assert_eq!(engine.state().active_card(Side::Two), None);
    }

    #[test]
    fn new_round_clears_cards_and_status() {
        let mut engine = engine(MatchFormat::Bo3);
        engine
            .apply_turn([Kick, Punch], [Some(SurgeCard::Flurry), None])
            .expect("in progress");
        assert!(engine.state().combatant(Side::Two).is_staggered);
        win_round_for_one(&mut engine);
        engine.start_new_round().expect("round over");

        let state = engine.state();
        assert_eq!(state.active_cards, [None, None]);
        assert!(!state.combatant(Side::Two).is_staggered);
        assert_eq!(state.current_turn, 1);
        assert_eq!(engine.phase(), MatchPhase::RoundInProgress);
    }

    #[test]
    fn state_stays_clamped_through_a_match() {
        let mut engine = MatchEngine::new(
            &MatchConfig::new(MatchFormat::Bo5),
            [
                Fighter::from_roster("bastion", &StaticRoster),
                Fighter::from_roster("cipher", &StaticRoster),
            ],
            SeededDecisions::from_match_id("clamp-check"),
        );
        let script = [[Special, Block], [Kick, Kick], [Block, Punch], [Punch, Special]];
        let mut step = 0;
        while !engine.state().is_match_over {
            if engine.state().is_round_over {
                engine.start_new_round().expect("round over");
                continue;
            }
            let cards = [
                SurgeCard::from_code(step % 21),
                SurgeCard::from_code((step * 7) % 21),
            ];
            let moves = script[step as usize % script.len()];
            let moves = Side::ALL.map(|side| {
                if engine.can_afford(side, moves[side.index()]) {
                    moves[side.index()]
                } else {
                    Punch
                }
            });
            engine.apply_turn(moves, cards).expect("in progress");
            for combatant in &engine.state().combatants {
                assert!(combatant.is_within_bounds());
            }
            step += 1;
            assert!(step < 10_000, "match never ended");
        }
    }

    #[test]
    fn available_moves_follow_energy() {
        let mut engine = engine(MatchFormat::Bo1);
        engine.apply_turn([Special, Special], [None, None]).expect("in progress");
        engine.apply_turn([Kick, Kick], [None, None]).expect("in progress");
        // 100 - 50 + 10 - 20 + 10 = 50
        assert_eq!(engine.state().combatant(Side::One).energy, 50);
        assert!(engine.can_afford(Side::One, Special));
        assert_eq!(engine.available_moves(Side::One).len(), 4);
    }
}
