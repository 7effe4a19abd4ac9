use crate::config::{MatchConfig, MatchFormat};
use crate::roster::{CharacterProfile, RosterOracle};
use crate::surge::SurgeCard;

use super::{CombatantState, Side};

/// A character entering the match: its id plus the profile resolved for it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub character_id: String,
    pub profile: CharacterProfile,
}

impl Fighter {
    pub fn new(character_id: impl Into<String>, profile: CharacterProfile) -> Self {
        Self {
            character_id: character_id.into(),
            profile,
        }
    }

    /// Resolve `character_id` through `roster`; unknown ids get the default profile.
    pub fn from_roster(character_id: &str, roster: &(impl RosterOracle + ?Sized)) -> Self {
        Self::new(character_id, roster.profile(character_id))
    }
}

/// How a finished round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundOutcome {
    Won(Side),
    /// Double KO or equal HP percentage at the turn ceiling. No round credited.
    Draw,
}

impl RoundOutcome {
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::Won(side) => Some(side),
            Self::Draw => None,
        }
    }
}

/// Coarse state-machine position derived from [`MatchState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPhase {
    RoundInProgress,
    RoundOver(RoundOutcome),
    /// Terminal.
    MatchOver(Side),
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub combatants: [CombatantState; 2],
    pub profiles: [CharacterProfile; 2],

    /// Surge card each side locked in on turn 1 of the current round.
    pub active_cards: [Option<SurgeCard>; 2],

    /// 1-based.
    pub current_round: u32,
    /// 1-based; the turn about to be played.
    pub current_turn: u32,
    pub format: MatchFormat,
    pub max_turns_per_round: u32,

    pub is_round_over: bool,
    pub is_match_over: bool,
    pub round_winner: Option<RoundOutcome>,
    pub match_winner: Option<Side>,
}

impl MatchState {
    pub fn new(config: &MatchConfig, fighters: [Fighter; 2]) -> Self {
        let [one, two] = fighters;
        Self {
            combatants: [
                CombatantState::new(one.character_id, &one.profile),
                CombatantState::new(two.character_id, &two.profile),
            ],
            profiles: [one.profile, two.profile],
            active_cards: [None, None],
            current_round: 1,
            current_turn: 1,
            format: config.format,
            max_turns_per_round: config.max_turns_per_round.max(1),
            is_round_over: false,
            is_match_over: false,
            round_winner: None,
            match_winner: None,
        }
    }

    pub fn combatant(&self, side: Side) -> &CombatantState {
        &self.combatants[side.index()]
    }

    pub fn profile(&self, side: Side) -> &CharacterProfile {
        &self.profiles[side.index()]
    }

    pub fn active_card(&self, side: Side) -> Option<SurgeCard> {
        self.active_cards[side.index()]
    }

    pub const fn rounds_to_win(&self) -> u32 {
        self.format.rounds_to_win()
    }

    pub fn phase(&self) -> MatchPhase {
        if let Some(winner) = self.match_winner {
            return MatchPhase::MatchOver(winner);
        }
        match (self.is_round_over, self.round_winner) {
            (true, Some(outcome)) => MatchPhase::RoundOver(outcome),
            _ => MatchPhase::RoundInProgress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{DEFAULT_PROFILE, StaticRoster};

    #[test]
    fn new_match_starts_fresh() {
        let config = MatchConfig::new(MatchFormat::Bo5);
        let state = MatchState::new(
            &config,
            [
                Fighter::from_roster("golem", &StaticRoster),
                Fighter::from_roster("who-is-this", &StaticRoster),
            ],
        );

        assert_eq!(state.current_round, 1);
        assert_eq!(state.current_turn, 1);
        assert_eq!(state.rounds_to_win(), 3);
        assert_eq!(state.combatant(Side::One).hp, 125);
        assert_eq!(state.combatant(Side::Two).character_id, "who-is-this");
        assert_eq!(*state.profile(Side::Two), DEFAULT_PROFILE);
        assert_eq!(state.phase(), MatchPhase::RoundInProgress);
    }
}
