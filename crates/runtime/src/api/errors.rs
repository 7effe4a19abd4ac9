//! Unified error types surfaced by the runtime API.
//!
//! Wraps state-machine misuse from the engine and failures from worker
//! coordination so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use brawl_core::{ErrorSeverity, GameError, MatchError, ParseError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Match(#[from] MatchError),

    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires both fighters to be configured before building")]
    MissingFighters,

    #[error("scripted turn {turn} is invalid")]
    InvalidScript {
        turn: usize,
        #[source]
        source: ParseError,
    },
}

impl RuntimeError {
    /// Severity of the underlying failure. Worker coordination failures are
    /// fatal: the session can no longer be reached.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Match(err) => err.severity(),
            Self::InvalidScript { source, .. } => source.severity(),
            Self::MissingFighters => ErrorSeverity::Validation,
            Self::CommandChannelClosed | Self::ReplyChannelClosed(_) | Self::WorkerJoin(_) => {
                ErrorSeverity::Fatal
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Match(err) => err.error_code(),
            Self::InvalidScript { source, .. } => source.error_code(),
            Self::MissingFighters => "MISSING_FIGHTERS",
            Self::CommandChannelClosed => "COMMAND_CHANNEL_CLOSED",
            Self::ReplyChannelClosed(_) => "REPLY_CHANNEL_CLOSED",
            Self::WorkerJoin(_) => "WORKER_JOIN",
        }
    }
}
