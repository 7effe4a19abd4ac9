//! Scripted match loader.
//!
//! A script names both fighters and lists, turn by turn, what each side
//! submitted. Moves and cards are kept as the raw strings a client would send
//! so that replays exercise the same decoding path as live input.

use std::path::Path;

use brawl_core::{MatchConfig, MoveType, ParseError, SurgeCard};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// What both sides submitted for one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedTurn {
    /// `None` means the side failed to submit in time.
    pub moves: [Option<String>; 2],
    /// Only honored on the first turn of a round.
    #[serde(default)]
    pub cards: [Option<String>; 2],
}

impl ScriptedTurn {
    /// Decode the submitted moves. A missing submission stays `None`.
    pub fn decode_moves(&self) -> Result<[Option<MoveType>; 2], ParseError> {
        let [one, two] = &self.moves;
        Ok([
            one.as_deref().map(MoveType::parse_submission).transpose()?,
            two.as_deref().map(MoveType::parse_submission).transpose()?,
        ])
    }

    /// Decode card ids. Unknown ids mean no card.
    pub fn decode_cards(&self) -> [Option<SurgeCard>; 2] {
        let [one, two] = &self.cards;
        [
            one.as_deref().and_then(SurgeCard::from_id),
            two.as_deref().and_then(SurgeCard::from_id),
        ]
    }
}

/// A whole scripted match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScript {
    pub match_id: String,
    pub fighters: [String; 2],
    /// Overrides the caller's configuration when present.
    #[serde(default)]
    pub config: Option<MatchConfig>,
    pub turns: Vec<ScriptedTurn>,
}

/// Loader for scripted matches from RON files.
pub struct ScriptLoader;

impl ScriptLoader {
    /// Load a script from a RON file.
    ///
    /// ```ron
    /// (
    ///     match_id: "demo-001",
    ///     fighters: ("kira", "bastion"),
    ///     turns: [
    ///         (moves: (Some("punch"), Some("block")), cards: (Some("berserk"), None)),
    ///         (moves: (Some("special"), None)),
    ///     ],
    /// )
    /// ```
    pub fn load(path: &Path) -> LoadResult<MatchScript> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MatchScript> {
        let script: MatchScript = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse match script RON: {}", e))?;

        for (index, turn) in script.turns.iter().enumerate() {
            turn.decode_moves()
                .map_err(|e| anyhow::anyhow!("turn {} of '{}': {}", index + 1, script.match_id, e))?;
        }
        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"(
        match_id: "demo-001",
        fighters: ("kira", "bastion"),
        turns: [
            (moves: (Some("punch"), Some("Block")), cards: (Some("berserk"), Some("not-a-card"))),
            (moves: (Some("special"), None)),
        ],
    )"#;

    #[test]
    fn parses_and_decodes() {
        let script = ScriptLoader::parse(SCRIPT).unwrap();
        assert_eq!(script.fighters, ["kira".to_string(), "bastion".to_string()]);
        assert!(script.config.is_none());
        assert_eq!(script.turns.len(), 2);

        let first = &script.turns[0];
        assert_eq!(
            first.decode_moves().unwrap(),
            [Some(MoveType::Punch), Some(MoveType::Block)]
        );
        assert_eq!(first.decode_cards(), [Some(SurgeCard::Berserk), None]);

        let second = &script.turns[1];
        assert_eq!(second.decode_moves().unwrap(), [Some(MoveType::Special), None]);
        assert_eq!(second.decode_cards(), [None, None]);
    }

    #[test]
    fn rejects_stunned_submissions() {
        let script = r#"(
            match_id: "bad",
            fighters: ("kira", "volt"),
            turns: [(moves: (Some("stunned"), Some("punch")))],
        )"#;
        let err = ScriptLoader::parse(script).unwrap_err();
        assert!(err.to_string().contains("turn 1"));
    }

    #[test]
    fn embedded_config_overrides() {
        let script = r#"(
            match_id: "short",
            fighters: ("kira", "volt"),
            config: Some((format: bo1, max_turns_per_round: 5)),
            turns: [],
        )"#;
        let script = ScriptLoader::parse(script).unwrap();
        let config = script.config.unwrap();
        assert_eq!(config.max_turns_per_round, 5);
    }
}
