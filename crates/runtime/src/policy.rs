//! What to play for a side that did not submit a move in time.

use brawl_core::{DecisionSource, MatchEngine, MoveType, Side};
use serde::{Deserialize, Serialize};

/// Substitution rule for missing submissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForcedMovePolicy {
    /// Block when block is available to the side, otherwise Punch (always free).
    #[default]
    PassiveBlock,
    /// Treat the side as unable to act.
    Stunned,
}

impl ForcedMovePolicy {
    /// Move substituted for `side` on the turn about to be played.
    pub fn forced_move<D: DecisionSource>(self, engine: &MatchEngine<D>, side: Side) -> MoveType {
        match self {
            Self::Stunned => MoveType::Stunned,
            Self::PassiveBlock => {
                if engine.available_moves(side).contains(&MoveType::Block) {
                    MoveType::Block
                } else {
                    MoveType::Punch
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brawl_core::{Fighter, MatchConfig, SeededDecisions, StaticRoster, SurgeCard};

    fn engine() -> MatchEngine {
        MatchEngine::new(
            &MatchConfig::default(),
            [
                Fighter::from_roster("kira", &StaticRoster),
                Fighter::from_roster("golem", &StaticRoster),
            ],
            SeededDecisions::new(7),
        )
    }

    #[test]
    fn passive_block_blocks_when_it_can() {
        let engine = engine();
        assert_eq!(
            ForcedMovePolicy::PassiveBlock.forced_move(&engine, Side::One),
            MoveType::Block
        );
        assert_eq!(
            ForcedMovePolicy::Stunned.forced_move(&engine, Side::One),
            MoveType::Stunned
        );
    }

    #[test]
    fn passive_block_falls_back_to_punch_when_sundered() {
        let mut engine = engine();
        // opponent's sunder disables side one's block for the round
        engine
            .apply_turn(
                [MoveType::Punch, MoveType::Punch],
                [None, Some(SurgeCard::Sunder)],
            )
            .unwrap();
        assert_eq!(
            ForcedMovePolicy::PassiveBlock.forced_move(&engine, Side::One),
            MoveType::Punch
        );
    }

    #[test]
    fn passive_block_falls_back_to_punch_without_energy() {
        let mut state = engine().into_state();
        state.combatants[0].energy = 0;
        let engine = MatchEngine::from_state(state, SeededDecisions::new(7));
        assert_eq!(
            ForcedMovePolicy::PassiveBlock.forced_move(&engine, Side::One),
            MoveType::Punch
        );
    }
}
