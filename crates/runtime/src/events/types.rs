//! Event payloads published by the session worker.

use brawl_core::{RoundOutcome, Side, TurnResult};
use serde::{Deserialize, Serialize};

/// Per-turn event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEvent {
    pub match_id: String,
    pub result: TurnResult,
    /// Sides whose move was substituted by the forced-move policy.
    pub forced: [bool; 2],
}

/// Snapshot taken when a round ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub outcome: RoundOutcome,
    pub turns_played: u32,
    pub hp: [u32; 2],
    /// Round wins after this round was credited.
    pub rounds_won: [u32; 2],
}

/// Snapshot taken when the match ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub match_id: String,
    pub winner: Side,
    pub rounds_played: u32,
    pub rounds_won: [u32; 2],
    pub turns_played: usize,
    /// SHA-256 over the recorded transcript.
    pub transcript_root: [u8; 32],
}

impl MatchSummary {
    pub fn transcript_root_hex(&self) -> String {
        hex::encode(self.transcript_root)
    }
}

/// Round lifecycle events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    RoundStarted { match_id: String, round: u32 },
    RoundEnded { match_id: String, summary: RoundSummary },
    MatchEnded(MatchSummary),
}
