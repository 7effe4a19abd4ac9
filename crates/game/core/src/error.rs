//! Common error infrastructure for brawl-core.
//!
//! Turn resolution is total and never fails. Errors exist only at the edges:
//! decoding identifiers that arrive as strings or wire codes, and misuse of the
//! round/match state machine. Domain-specific errors (e.g. `MatchError`) are
//! defined next to the component they guard.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller can retry once the precondition holds.
    ///
    /// Examples: starting a new round while the current one is still running
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown move code on the wire
    Validation,

    /// Fatal error - the match is finished and cannot accept more input.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all brawl-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, for metrics and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Failure to decode a move or surge card at the system boundary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown move '{0}'")]
    UnknownMove(String),

    #[error("unknown move code {0}")]
    UnknownMoveCode(u8),

    #[error("'stunned' is assigned by the engine and cannot be submitted")]
    StunnedNotSelectable,
}

impl GameError for ParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownMove(_) => "UNKNOWN_MOVE",
            Self::UnknownMoveCode(_) => "UNKNOWN_MOVE_CODE",
            Self::StunnedNotSelectable => "STUNNED_NOT_SELECTABLE",
        }
    }
}
