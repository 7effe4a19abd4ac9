//! Session worker that owns the authoritative [`MatchSession`].
//!
//! Receives commands from [`crate::SessionHandle`], plays turns, and
//! publishes events to the [`EventBus`].

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use brawl_core::{AvailableMoves, MatchState, Side, Transcript};

use crate::api::Result;
use crate::events::{Event, EventBus, MatchEvent, TurnEvent};
use crate::session::{MatchSession, PlayedTurn, TurnSubmission};

/// Commands that can be sent to the session worker
pub enum Command {
    /// Play one turn.
    SubmitTurn {
        submission: TurnSubmission,
        reply: oneshot::Sender<Result<PlayedTurn>>,
    },
    /// Explicitly open the next round; returns its number.
    StartNewRound { reply: oneshot::Sender<Result<u32>> },
    /// Query the current match state (read-only).
    QueryState { reply: oneshot::Sender<MatchState> },
    /// Moves `side` can play on the upcoming turn.
    AvailableMoves {
        side: Side,
        reply: oneshot::Sender<AvailableMoves>,
    },
    /// Copy of the transcript recorded so far.
    QueryTranscript { reply: oneshot::Sender<Transcript> },
}

/// Background task that processes match commands.
pub struct SessionWorker {
    session: MatchSession,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl SessionWorker {
    pub fn new(session: MatchSession, command_rx: mpsc::Receiver<Command>, event_bus: EventBus) -> Self {
        Self {
            session,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop. Exits once every handle has been dropped.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                else => break,
            }
        }
        debug!(match_id = self.session.match_id(), "session worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::SubmitTurn { submission, reply } => {
                let result = self.handle_submission(submission);
                if let Err(err) = &result {
                    warn!(
                        match_id = self.session.match_id(),
                        code = err.error_code(),
                        severity = err.severity().as_str(),
                        "turn submission rejected: {err}"
                    );
                }
                if reply.send(result).is_err() {
                    debug!("SubmitTurn reply channel closed (caller dropped)");
                }
            }
            Command::StartNewRound { reply } => {
                let result: Result<u32> = self.session.start_new_round().map_err(Into::into);
                match &result {
                    Ok(round) => self.publish_round_started(*round),
                    Err(err) => warn!(
                        match_id = self.session.match_id(),
                        code = err.error_code(),
                        severity = err.severity().as_str(),
                        "round start rejected: {err}"
                    ),
                }
                if reply.send(result).is_err() {
                    debug!("StartNewRound reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.session.state().clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::AvailableMoves { side, reply } => {
                if reply.send(self.session.available_moves(side)).is_err() {
                    debug!("AvailableMoves reply channel closed (caller dropped)");
                }
            }
            Command::QueryTranscript { reply } => {
                if reply.send(self.session.transcript().clone()).is_err() {
                    debug!("QueryTranscript reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_submission(&mut self, submission: TurnSubmission) -> Result<PlayedTurn> {
        let played = self.session.submit(submission)?;
        let match_id = self.session.match_id().to_owned();

        if let Some(round) = played.round_started {
            self.publish_round_started(round);
        }
        self.event_bus.publish(Event::Turn(Box::new(TurnEvent {
            match_id: match_id.clone(),
            result: played.outcome.result.clone(),
            forced: played.forced,
        })));
        if let Some(summary) = &played.round_summary {
            self.event_bus.publish(Event::Match(MatchEvent::RoundEnded {
                match_id,
                summary: summary.clone(),
            }));
        }
        if let Some(summary) = &played.match_summary {
            self.event_bus
                .publish(Event::Match(MatchEvent::MatchEnded(summary.clone())));
        }

        Ok(played)
    }

    fn publish_round_started(&self, round: u32) {
        self.event_bus.publish(Event::Match(MatchEvent::RoundStarted {
            match_id: self.session.match_id().to_owned(),
            round,
        }));
    }
}
