//! Deterministic combat resolution for a two-player turn-based fighter.
//!
//! `brawl-core` defines the canonical rules (move catalog, character
//! profiles, surge modifiers, turn resolution, round/match state) and exposes
//! pure APIs shared by the runtime, the client and offline replay. All state
//! mutation flows through [`engine::MatchEngine`]; every probability-gated
//! effect goes through a [`decision::DecisionSource`], and every fraction is a
//! [`fixed::Bps`] so independent copies of a match agree bit for bit.
pub mod available;
pub mod combat;
pub mod config;
pub mod decision;
pub mod engine;
pub mod error;
pub mod fixed;
pub mod moves;
pub mod roster;
pub mod state;
pub mod surge;
pub mod transcript;

pub use available::{AvailableMoves, available_moves, can_afford_move};
pub use combat::{
    Combatant, SideResult, StatusEffect, StatusEffects, TurnClock, TurnResult, resolve_turn,
};
pub use config::{MatchConfig, MatchFormat};
pub use decision::{
    DecisionContext, DecisionPurpose, DecisionSource, FixedDecisions, SeededDecisions,
};
pub use engine::{MatchEngine, MatchError, TurnOutcome};
pub use error::{ErrorSeverity, GameError, ParseError};
pub use fixed::Bps;
pub use moves::{MoveStats, MoveType, ResolutionOutcome, is_counter_hit, matrix_outcome};
pub use roster::{
    Archetype, CharacterProfile, DEFAULT_CHARACTER_ID, DEFAULT_PROFILE, DamageModifiers,
    RosterOracle, StaticRoster, get_profile,
};
pub use state::{CombatantState, Fighter, MatchPhase, MatchState, RoundOutcome, Side};
pub use surge::{ModifierSet, SurgeCard, SurgeEffect, resolve_modifiers};
pub use transcript::{Transcript, TranscriptEntry, compute_transcript_root};
