//! Content shared by every command.

use std::path::Path;

use anyhow::{Context, Result};
use brawl_content::{ContentFactory, Roster};
use brawl_core::{MatchConfig, RosterOracle, StaticRoster};

/// Whatever a data directory provided. Missing pieces fall back to the
/// built-in defaults.
#[derive(Default)]
pub struct Content {
    pub config: Option<MatchConfig>,
    pub roster: Option<Roster>,
}

impl Content {
    pub fn load(data_dir: Option<&Path>) -> Result<Self> {
        let Some(dir) = data_dir else {
            return Ok(Self::default());
        };

        let factory = ContentFactory::new(dir);
        let config = factory
            .load_config()
            .with_context(|| format!("loading config from {}", dir.display()))?;
        let roster = factory
            .load_roster()
            .with_context(|| format!("loading roster from {}", dir.display()))?;

        tracing::debug!(
            dir = %dir.display(),
            config = config.is_some(),
            roster = roster.is_some(),
            "content loaded"
        );
        Ok(Self { config, roster })
    }

    pub fn roster(&self) -> &dyn RosterOracle {
        match &self.roster {
            Some(roster) => roster,
            None => &StaticRoster,
        }
    }
}
