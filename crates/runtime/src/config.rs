//! Runtime configuration shared across the orchestrator and workers.
use std::env;

use brawl_core::{MatchConfig, MatchFormat};

use crate::policy::ForcedMovePolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub match_config: MatchConfig,
    pub forced_move_policy: ForcedMovePolicy,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            match_config: MatchConfig::default(),
            forced_move_policy: ForcedMovePolicy::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

impl RuntimeConfig {
    /// Construct runtime configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MATCH_FORMAT` - `bo1`, `bo3` or `bo5` (default: bo3)
    /// - `MAX_TURNS_PER_ROUND` - turn ceiling per round (default: 20)
    /// - `FORCED_MOVE_POLICY` - `passive_block` or `stunned` (default: passive_block)
    /// - `EVENT_BUFFER_SIZE` - broadcast capacity per topic (default: 100)
    /// - `COMMAND_BUFFER_SIZE` - worker command queue depth (default: 32)
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(format) = read_env::<MatchFormat>("MATCH_FORMAT") {
            config.match_config.format = format;
        }
        if let Some(turns) = read_env::<u32>("MAX_TURNS_PER_ROUND") {
            config.match_config = config.match_config.with_max_turns(turns);
        }
        if let Some(policy) = env::var("FORCED_MOVE_POLICY")
            .ok()
            .as_deref()
            .and_then(parse_policy)
        {
            config.forced_move_policy = policy;
        }
        if let Some(size) = read_env::<usize>("EVENT_BUFFER_SIZE") {
            config.event_buffer_size = size.max(1);
        }
        if let Some(size) = read_env::<usize>("COMMAND_BUFFER_SIZE") {
            config.command_buffer_size = size.max(1);
        }

        config
    }
}

fn parse_policy(value: &str) -> Option<ForcedMovePolicy> {
    match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "passive_block" | "block" => Some(ForcedMovePolicy::PassiveBlock),
        "stunned" => Some(ForcedMovePolicy::Stunned),
        _ => None,
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
