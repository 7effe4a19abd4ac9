//! Data-driven content for matches.
//!
//! Loaders turn RON/TOML files into core types:
//! - match configuration (TOML)
//! - character rosters (RON), exposed through [`brawl_core::RosterOracle`]
//! - scripted matches (RON) for replays and demos
//!
//! Content is consumed by the runtime and never appears in match state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, MatchScript, Roster, RosterEntry, RosterLoader,
    ScriptLoader, ScriptedTurn,
};
