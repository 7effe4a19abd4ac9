//! Replaying scripted matches through a running session.

use tracing::{info, warn};

use brawl_content::MatchScript;
use brawl_core::RosterOracle;

use crate::api::{Result, RuntimeError, SessionHandle};
use crate::config::RuntimeConfig;
use crate::runtime::RuntimeBuilder;
use crate::session::{PlayedTurn, TurnSubmission};

/// A [`MatchScript`] ready to be played.
pub struct Scenario {
    script: MatchScript,
}

impl Scenario {
    pub fn new(script: MatchScript) -> Self {
        Self { script }
    }

    pub fn script(&self) -> &MatchScript {
        &self.script
    }

    /// Builder for a runtime hosting this script's match. The script's own
    /// match configuration, when present, overrides `config`'s.
    pub fn runtime_builder(
        &self,
        mut config: RuntimeConfig,
        roster: &(impl RosterOracle + ?Sized),
    ) -> RuntimeBuilder {
        if let Some(match_config) = &self.script.config {
            config.match_config = match_config.clone();
        }
        let [one, two] = &self.script.fighters;
        RuntimeBuilder::new()
            .config(config)
            .match_id(self.script.match_id.clone())
            .fighters_from_roster([one.as_str(), two.as_str()], roster)
    }

    /// Decode every scripted turn up front so a bad line fails before any
    /// turn is played. Turn numbers in errors are 1-based.
    pub fn submissions(&self) -> Result<Vec<TurnSubmission>> {
        self.script
            .turns
            .iter()
            .enumerate()
            .map(|(index, turn)| {
                let moves = turn
                    .decode_moves()
                    .map_err(|source| RuntimeError::InvalidScript {
                        turn: index + 1,
                        source,
                    })?;
                Ok(TurnSubmission {
                    moves,
                    cards: turn.decode_cards(),
                })
            })
            .collect()
    }

    /// Submit the script's turns in order until they run out or the match ends.
    pub async fn replay(&self, handle: &SessionHandle) -> Result<Vec<PlayedTurn>> {
        let submissions = self.submissions()?;
        let total = submissions.len();
        let mut played = Vec::with_capacity(total);

        for submission in submissions {
            let turn = handle.submit_turn(submission).await?;
            let finished = turn.match_summary.is_some();
            played.push(turn);
            if finished {
                break;
            }
        }

        if played.len() < total {
            warn!(
                match_id = %self.script.match_id,
                unused = total - played.len(),
                "match ended before the script ran out"
            );
        }
        info!(match_id = %self.script.match_id, turns = played.len(), "script replayed");
        Ok(played)
    }
}
