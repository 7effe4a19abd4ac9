//! Cloneable façade for issuing commands to the runtime.
//!
//! [`SessionHandle`] hides channel plumbing and offers async helpers for
//! playing turns or streaming events from specific topics.
use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot};

use brawl_core::{AvailableMoves, MatchState, Side, Transcript};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::session::{PlayedTurn, TurnSubmission};
use crate::workers::Command;

/// Client-facing handle to interact with a running match
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl SessionHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Play one turn. A finished round is closed out first.
    pub async fn submit_turn(&self, submission: TurnSubmission) -> Result<PlayedTurn> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::SubmitTurn {
                submission,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Open the next round after one has ended.
    pub async fn start_new_round(&self) -> Result<u32> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::StartNewRound { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Query the current match state (read-only snapshot)
    pub async fn query_state(&self) -> Result<MatchState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    pub async fn available_moves(&self, side: Side) -> Result<AvailableMoves> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::AvailableMoves {
                side,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    pub async fn transcript(&self) -> Result<Transcript> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryTranscript { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Turn` - every resolved turn
    /// - `Topic::Match` - round start/end and match end
    pub fn subscribe(&self, topic: Topic) -> Option<broadcast::Receiver<Event>> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
