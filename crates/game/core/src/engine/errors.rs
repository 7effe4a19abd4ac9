//! Errors raised by the round/match state machine.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Side;

/// State-machine misuse. Turn resolution itself never fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchError {
    #[error("round {round} is over; start a new round before submitting moves")]
    RoundOver { round: u32 },

    #[error("round {round} is still in progress at turn {turn}")]
    RoundInProgress { round: u32, turn: u32 },

    #[error("match is over; side {winner} won")]
    MatchOver { winner: Side },
}

impl GameError for MatchError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::RoundOver { .. } | Self::RoundInProgress { .. } => ErrorSeverity::Recoverable,
            Self::MatchOver { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RoundOver { .. } => "ROUND_OVER",
            Self::RoundInProgress { .. } => "ROUND_IN_PROGRESS",
            Self::MatchOver { .. } => "MATCH_OVER",
        }
    }
}
