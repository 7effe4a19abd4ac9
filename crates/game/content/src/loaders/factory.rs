//! Content factory for loading everything from a data directory.

use std::path::{Path, PathBuf};

use brawl_core::MatchConfig;

use crate::loaders::{ConfigLoader, LoadResult, Roster, RosterLoader};

/// Content factory that loads match content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── roster.ron
/// ```
///
/// Either file may be absent: the configuration then falls back to
/// [`MatchConfig::default`], and the roster to the built-in one.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load match configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<Option<MatchConfig>> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(None);
        }
        ConfigLoader::load(&path).map(Some)
    }

    /// Load the roster from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Option<Roster>> {
        let path = self.data_dir.join("roster.ron");
        if !path.exists() {
            return Ok(None);
        }
        RosterLoader::load(&path).map(Some)
    }
}
