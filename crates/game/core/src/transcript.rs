//! Ordered move history for proof commitments.
//!
//! The engine keeps no history of its own. A [`Transcript`] is filled by the
//! caller from each [`TurnResult`] and encodes moves with their stable wire
//! codes, so a commitment computed here matches one computed by any other
//! party replaying the same match.

use crate::combat::TurnResult;
use crate::moves::MoveType;
use crate::state::Side;

/// Moves resolved in one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranscriptEntry {
    pub round: u32,
    pub turn: u32,
    /// Effective moves, indexed by side.
    pub moves: [MoveType; 2],
}

impl TranscriptEntry {
    pub fn from_result(result: &TurnResult) -> Self {
        Self {
            round: result.round,
            turn: result.turn,
            moves: result.effective_moves(),
        }
    }

    pub fn move_of(&self, side: Side) -> MoveType {
        self.moves[side.index()]
    }

    /// Fixed 16-byte little-endian layout: round, turn, then each side's move
    /// code widened to `u32`. Matches bincode 1.x's default encoding of this
    /// struct, so roots committed before stay valid.
    pub fn to_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        let mut out = [0u8; Self::ENCODED_LEN];
        out[0..4].copy_from_slice(&self.round.to_le_bytes());
        out[4..8].copy_from_slice(&self.turn.to_le_bytes());
        for (i, mv) in self.moves.iter().enumerate() {
            let at = 8 + i * 4;
            out[at..at + 4].copy_from_slice(&u32::from(mv.code()).to_le_bytes());
        }
        out
    }

    pub const ENCODED_LEN: usize = 16;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &TurnResult) {
        self.entries.push(TranscriptEntry::from_result(result));
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `side`'s moves across the whole match as wire codes, in play order.
    pub fn move_plan(&self, side: Side) -> Vec<u8> {
        self.entries
            .iter()
            .map(|entry| entry.move_of(side).code())
            .collect()
    }

    pub fn root(&self) -> [u8; 32] {
        compute_transcript_root(&self.entries)
    }
}

/// SHA-256 over [`TranscriptEntry::to_bytes`] of each entry, in order.
///
/// Every entry is hashed; reordering, dropping or altering any of them
/// changes the root.
pub fn compute_transcript_root(entries: &[TranscriptEntry]) -> [u8; 32] {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    for entry in entries {
        hasher.update(entry.to_bytes());
    }
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MatchConfig, MatchFormat};
    use crate::decision::FixedDecisions;
    use crate::engine::MatchEngine;
    use crate::roster::StaticRoster;
    use crate::state::Fighter;
    use MoveType::*;

    fn played() -> Transcript {
        let mut engine = MatchEngine::new(
            &MatchConfig::new(MatchFormat::Bo1),
            [
                Fighter::from_roster("kira", &StaticRoster),
                Fighter::from_roster("golem", &StaticRoster),
            ],
            FixedDecisions::NEVER,
        );
        let mut transcript = Transcript::new();
        for moves in [[Punch, Block], [Special, Punch], [Kick, Kick]] {
            let outcome = engine.apply_turn(moves, [None, None]).expect("in progress");
            transcript.record(&outcome.result);
        }
        transcript
    }

    #[test]
    fn move_plan_uses_effective_moves() {
        let transcript = played();
        assert_eq!(transcript.len(), 3);
        // kira's special whiffs into the punch, so turn 3 is spent stunned
        assert_eq!(transcript.move_plan(Side::One), vec![0, 3, 4]);
        assert_eq!(transcript.move_plan(Side::Two), vec![2, 0, 1]);
    }

    #[test]
    fn root_is_order_sensitive() {
        let transcript = played();
        let root = transcript.root();
        assert_eq!(root, compute_transcript_root(transcript.entries()));

        let mut reversed = transcript.entries().to_vec();
        reversed.reverse();
        assert_ne!(hex::encode(root), hex::encode(compute_transcript_root(&reversed)));
    }

    #[test]
    fn empty_transcript_has_sha256_of_nothing() {
        assert_eq!(
            hex::encode(Transcript::new().root()),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn root_covers_every_entry() {
        use sha2::{Digest, Sha256};

        let transcript = played();
        let mut hasher = Sha256::new();
        for entry in transcript.entries() {
            hasher.update(entry.to_bytes());
        }
        let expected: [u8; 32] = hasher.finalize().into();
        assert_eq!(transcript.root(), expected);

        let mut truncated = transcript.entries().to_vec();
        truncated.pop();
        assert_ne!(compute_transcript_root(&truncated), transcript.root());
    }

    #[test]
    fn entry_bytes_are_little_endian_codes() {
        let entry = TranscriptEntry {
            round: 2,
            turn: 0x0103,
            moves: [Special, Stunned],
        };
        assert_eq!(
            hex::encode(entry.to_bytes()),
            "02000000030100000300000004000000"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn entry_bytes_match_bincode() {
        for entry in played().entries() {
            let encoded = bincode::serialize(entry).expect("fixed layout encodes");
            assert_eq!(encoded, entry.to_bytes());
        }
    }
}
