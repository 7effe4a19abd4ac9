//! Character roster loader.

use std::collections::HashMap;
use std::path::Path;

use brawl_core::{CharacterProfile, DEFAULT_CHARACTER_ID, RosterOracle};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One character in a roster file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: String,
    pub profile: CharacterProfile,
}

/// Roster file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RosterFile {
    characters: Vec<RosterEntry>,
}

/// Data-driven roster. Ids are matched case-insensitively; unknown ids fall
/// back to the roster's `default` entry, or to the built-in default profile
/// when the file defines none.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    profiles: HashMap<String, CharacterProfile>,
}

impl Roster {
    pub fn from_entries(entries: impl IntoIterator<Item = RosterEntry>) -> LoadResult<Self> {
        let mut profiles = HashMap::new();
        for entry in entries {
            let id = entry.id.trim().to_ascii_lowercase();
            if id.is_empty() {
                anyhow::bail!("roster entry with empty id");
            }
            if entry.profile.max_hp == 0 {
                anyhow::bail!("character '{}' has zero max_hp", id);
            }
            if profiles.insert(id.clone(), entry.profile).is_some() {
                anyhow::bail!("duplicate character id '{}'", id);
            }
        }
        Ok(Self { profiles })
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Character ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl RosterOracle for Roster {
    fn lookup(&self, character_id: &str) -> Option<CharacterProfile> {
        self.profiles
            .get(&character_id.trim().to_ascii_lowercase())
            .copied()
    }

    fn profile(&self, character_id: &str) -> CharacterProfile {
        self.lookup(character_id)
            .or_else(|| self.lookup(DEFAULT_CHARACTER_ID))
            .unwrap_or(brawl_core::DEFAULT_PROFILE)
    }
}

/// Loader for character rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// ```ron
    /// (
    ///     characters: [
    ///         (
    ///             id: "kira",
    ///             profile: (
    ///                 archetype: Speed,
    ///                 max_hp: 90,
    ///                 max_energy: 110,
    ///                 energy_regen: 12,
    ///                 damage: (punch: 11000, kick: 10500, special: 9500),
    ///                 block_effectiveness: 3500,
    ///                 special_cost_multiplier: 9000,
    ///             ),
    ///         ),
    ///     ],
    /// )
    /// ```
    ///
    /// Fractions are basis points (10000 = 1.0).
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Roster> {
        let file: RosterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;
        Roster::from_entries(file.characters)
    }
}
