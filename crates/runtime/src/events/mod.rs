//! Event stream published while a match is played.
mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{MatchEvent, MatchSummary, RoundSummary, TurnEvent};
