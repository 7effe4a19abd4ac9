//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker, wires up the command channel and the
//! event bus, and exposes a builder-based API for clients.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use brawl_core::{Fighter, RosterOracle};

use crate::api::{Result, RuntimeError, SessionHandle};
use crate::config::RuntimeConfig;
use crate::events::EventBus;
use crate::session::MatchSession;
use crate::workers::SessionWorker;

/// A match running on a background worker.
///
/// [`SessionHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    match_id: String,
    handle: SessionHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn match_id(&self) -> &str {
        &self.match_id
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once this and every cloned handle have been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    match_id: Option<String>,
    fighters: Option<[Fighter; 2]>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            match_id: None,
            fighters: None,
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Seeds every probability gate in the match. A random id is generated
    /// when none is given.
    pub fn match_id(mut self, match_id: impl Into<String>) -> Self {
        self.match_id = Some(match_id.into());
        self
    }

    pub fn fighters(mut self, fighters: [Fighter; 2]) -> Self {
        self.fighters = Some(fighters);
        self
    }

    /// Look both fighters up in `roster`. Unknown ids get the default profile.
    pub fn fighters_from_roster(
        self,
        character_ids: [&str; 2],
        roster: &(impl RosterOracle + ?Sized),
    ) -> Self {
        self.fighters(character_ids.map(|id| Fighter::from_roster(id, roster)))
    }

    /// Spawn the session worker. Must be called inside a tokio runtime.
    pub async fn build(self) -> Result<Runtime> {
        let fighters = self.fighters.ok_or(RuntimeError::MissingFighters)?;
        let match_id = self.match_id.unwrap_or_else(random_match_id);

        let session = MatchSession::new(match_id.clone(), &self.config.match_config, fighters)
            .with_policy(self.config.forced_move_policy);

        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let worker = SessionWorker::new(session, command_rx, event_bus.clone());
        let worker_handle = tokio::spawn(worker.run());

        info!(%match_id, "runtime started");

        Ok(Runtime {
            match_id,
            handle: SessionHandle::new(command_tx, event_bus),
            worker_handle,
        })
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn random_match_id() -> String {
    format!("match-{:016x}", rand::random::<u64>())
}
