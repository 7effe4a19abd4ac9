//! Character Profile Table.
//!
//! Immutable per-character numbers keyed by character id. Lookups never fail:
//! unknown or legacy ids resolve to the designated default profile so the
//! engine stays total over whatever identifiers the surrounding system sends.

pub mod archetype;
pub mod profile;
pub mod table;

pub use archetype::Archetype;
pub use profile::{CharacterProfile, DamageModifiers};
pub use table::{DEFAULT_CHARACTER_ID, DEFAULT_PROFILE, RosterOracle, StaticRoster, get_profile};
