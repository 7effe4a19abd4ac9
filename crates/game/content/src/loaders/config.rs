//! Match configuration loader.

use std::path::Path;

use brawl_core::MatchConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for match configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`MatchConfig`] from a TOML file.
    ///
    /// ```toml
    /// format = "bo5"
    /// max_turns_per_round = 15
    /// ```
    ///
    /// `max_turns_per_round` may be omitted and defaults to 20.
    pub fn load(path: &Path) -> LoadResult<MatchConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MatchConfig> {
        let config: MatchConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse match config TOML: {}", e))?;

        if config.max_turns_per_round == 0 {
            anyhow::bail!("max_turns_per_round must be at least 1");
        }
        Ok(config)
    }
}
