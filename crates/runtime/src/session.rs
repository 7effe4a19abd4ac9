//! Synchronous match session: the engine plus everything around it.
//!
//! [`MatchSession`] is what the worker owns. It fills in missing submissions,
//! records the transcript, moves past finished rounds, and emits the tracing
//! a live match needs. The engine underneath stays pure.

use brawl_core::{
    AvailableMoves, DecisionSource, Fighter, MatchConfig, MatchEngine, MatchError, MatchPhase,
    MatchState, MoveType, SeededDecisions, Side, SurgeCard, Transcript, TurnOutcome,
};
use serde::{Deserialize, Serialize};
use tracing::{Span, debug, info, info_span, warn};

use crate::events::{MatchSummary, RoundSummary};
use crate::policy::ForcedMovePolicy;

/// What both sides sent for one turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSubmission {
    /// `None` for a side that did not submit.
    pub moves: [Option<MoveType>; 2],
    /// Read on the first turn of a round only.
    pub cards: [Option<SurgeCard>; 2],
}

impl TurnSubmission {
    pub fn new(moves: [MoveType; 2]) -> Self {
        Self {
            moves: moves.map(Some),
            cards: [None, None],
        }
    }

    pub fn with_cards(mut self, cards: [Option<SurgeCard>; 2]) -> Self {
        self.cards = cards;
        self
    }
}

/// One played turn as the session saw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedTurn {
    pub outcome: TurnOutcome,
    /// Sides whose move came from the forced-move policy.
    pub forced: [bool; 2],
    /// Set when this turn was the first of a round the session opened itself.
    pub round_started: Option<u32>,
    pub round_summary: Option<RoundSummary>,
    pub match_summary: Option<MatchSummary>,
}

/// A match in progress.
pub struct MatchSession<D: DecisionSource = SeededDecisions> {
    match_id: String,
    engine: MatchEngine<D>,
    transcript: Transcript,
    policy: ForcedMovePolicy,
    span: Span,
}

impl MatchSession<SeededDecisions> {
    /// Start a match whose probability gates are seeded from `match_id`.
    pub fn new(match_id: impl Into<String>, config: &MatchConfig, fighters: [Fighter; 2]) -> Self {
        let match_id = match_id.into();
        let decisions = SeededDecisions::from_match_id(&match_id);
        Self::with_decisions(match_id, config, fighters, decisions)
    }
}

impl<D: DecisionSource> MatchSession<D> {
    pub fn with_decisions(
        match_id: impl Into<String>,
        config: &MatchConfig,
        fighters: [Fighter; 2],
        decisions: D,
    ) -> Self {
        let match_id = match_id.into();
        let span = info_span!("match", id = %match_id);
        {
            let _guard = span.enter();
            info!(
                format = %config.format,
                max_turns = config.max_turns_per_round,
                one = %fighters[0].character_id,
                two = %fighters[1].character_id,
                "match created"
            );
        }

        Self {
            engine: MatchEngine::new(config, fighters, decisions),
            transcript: Transcript::new(),
            policy: ForcedMovePolicy::default(),
            span,
            match_id,
        }
    }

    pub fn with_policy(mut self, policy: ForcedMovePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn match_id(&self) -> &str {
        &self.match_id
    }

    pub fn policy(&self) -> ForcedMovePolicy {
        self.policy
    }

    pub fn state(&self) -> &MatchState {
        self.engine.state()
    }

    pub fn phase(&self) -> MatchPhase {
        self.engine.phase()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn available_moves(&self, side: Side) -> AvailableMoves {
        self.engine.available_moves(side)
    }

    /// Advance past a finished round.
    pub fn start_new_round(&mut self) -> Result<u32, MatchError> {
        let _guard = self.span.enter();
        self.engine.start_new_round()?;
        let round = self.engine.state().current_round;
        info!(round, "round started");
        Ok(round)
    }

    /// Play one turn.
    ///
    /// A finished round is closed out first, so a caller can keep submitting
    /// until the match ends. Missing moves are filled in by the session's
    /// [`ForcedMovePolicy`].
    pub fn submit(&mut self, submission: TurnSubmission) -> Result<PlayedTurn, MatchError> {
        let round_started = match self.engine.phase() {
            MatchPhase::RoundOver(_) => Some(self.start_new_round()?),
            MatchPhase::MatchOver(_) | MatchPhase::RoundInProgress => None,
        };

        let _guard = self.span.enter();
        let state = self.engine.state();
        let turn = state.current_turn;

        if turn != 1 && submission.cards.iter().any(Option::is_some) {
            warn!(
                round = state.current_round,
                turn, "surge cards are only read on turn 1; ignoring"
            );
        }

        let mut forced = [false; 2];
        let mut moves = [MoveType::Stunned; 2];
        for side in Side::ALL {
            let i = side.index();
            moves[i] = match submission.moves[i] {
                Some(mv) => mv,
                None => {
                    let mv = self.policy.forced_move(&self.engine, side);
                    warn!(%side, forced = %mv, "no move submitted; substituting");
                    forced[i] = true;
                    mv
                }
            };
        }

        let outcome = self.engine.apply_turn(moves, submission.cards)?;
        self.transcript.record(&outcome.result);

        let [one, two] = &outcome.result.sides;
        debug!(
            round = outcome.result.round,
            turn = outcome.result.turn,
            one = %one.effective_move,
            two = %two.effective_move,
            one_outcome = %one.outcome,
            two_outcome = %two.outcome,
            hp = ?[one.hp, two.hp],
            energy = ?[one.energy, two.energy],
            "turn resolved"
        );

        let round_summary = outcome.round_end.map(|round_outcome| {
            let state = self.engine.state();
            let summary = RoundSummary {
                round: outcome.result.round,
                outcome: round_outcome,
                turns_played: outcome.result.turn,
                hp: [one.hp, two.hp],
                rounds_won: state.combatants.each_ref().map(|c| c.rounds_won),
            };
            info!(
                round = summary.round,
                outcome = ?summary.outcome,
                rounds_won = ?summary.rounds_won,
                "round ended"
            );
            summary
        });

        let match_summary = outcome.match_winner.map(|winner| {
            let summary = self.summarize(winner);
            info!(
                %winner,
                rounds_played = summary.rounds_played,
                root = %summary.transcript_root_hex(),
                "match ended"
            );
            summary
        });

        Ok(PlayedTurn {
            outcome,
            forced,
            round_started,
            round_summary,
            match_summary,
        })
    }

    fn summarize(&self, winner: Side) -> MatchSummary {
        let state = self.engine.state();
        MatchSummary {
            match_id: self.match_id.clone(),
            winner,
            rounds_played: state.current_round,
            rounds_won: state.combatants.each_ref().map(|c| c.rounds_won),
            turns_played: self.transcript.len(),
            transcript_root: self.transcript.root(),
        }
    }
}
