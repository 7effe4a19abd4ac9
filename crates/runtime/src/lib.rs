//! Runtime orchestration for brawl matches.
//!
//! Wraps the pure [`brawl_core::MatchEngine`] in a [`MatchSession`] that
//! fills in missing submissions, records the transcript and traces the match,
//! then runs it on a background worker. Consumers build a [`Runtime`], play
//! turns through its cloneable [`SessionHandle`], and subscribe to the event
//! stream.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`session`] is the synchronous session the worker drives
//! - [`scenario`] replays scripted matches
//! - [`decisions`] holds the unseeded source for practice matches
//! - [`workers`] keeps background tasks internal to the crate
pub mod api;
pub mod config;
pub mod decisions;
pub mod events;
pub mod policy;
pub mod runtime;
pub mod scenario;
pub mod session;

mod workers;

pub use api::{Result, RuntimeError, SessionHandle};
pub use config::RuntimeConfig;
pub use decisions::ThreadRngDecisions;
pub use events::{Event, EventBus, MatchEvent, MatchSummary, RoundSummary, Topic, TurnEvent};
pub use policy::ForcedMovePolicy;
pub use runtime::{Runtime, RuntimeBuilder};
pub use scenario::Scenario;
pub use session::{MatchSession, PlayedTurn, TurnSubmission};
