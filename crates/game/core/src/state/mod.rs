//! Match state owned by the round/match state machine.
//!
//! [`MatchState`] is exclusively mutated by [`crate::engine::MatchEngine`];
//! everything else reads snapshots.

mod combatant;
mod match_state;
mod side;

pub use combatant::CombatantState;
pub use match_state::{Fighter, MatchPhase, MatchState, RoundOutcome};
pub use side::Side;
