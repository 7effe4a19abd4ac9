//! Inspect the character roster.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use brawl_core::{CharacterProfile, StaticRoster};

use super::content::Content;
use crate::config::ClientConfig;

/// List the characters available to matches
#[derive(Parser)]
pub struct RosterCmd {
    /// Directory holding roster.ron (the built-in roster is used otherwise)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl RosterCmd {
    pub fn execute(self, client: &ClientConfig) -> Result<()> {
        let content = Content::load(self.data_dir.as_deref().or(client.data_dir.as_deref()))?;

        let rows: Vec<(String, CharacterProfile)> = match &content.roster {
            Some(roster) => roster
                .ids()
                .into_iter()
                .map(|id| (id.to_owned(), content.roster().profile(id)))
                .collect(),
            None => StaticRoster
                .entries()
                .map(|(id, profile)| (id.to_owned(), profile))
                .collect(),
        };

        println!(
            "{:<12} {:<10} {:>4} {:>6} {:>5} {:>6} {:>8}",
            "id", "archetype", "hp", "energy", "regen", "block", "special"
        );
        for (id, profile) in rows {
            println!(
                "{:<12} {:<10} {:>4} {:>6} {:>5} {:>5}% {:>7}%",
                id,
                profile.archetype.to_string(),
                profile.max_hp,
                profile.max_energy,
                profile.energy_regen,
                profile.block_effectiveness.0 / 100,
                profile.special_cost_multiplier.0 / 100,
            );
        }
        Ok(())
    }
}
