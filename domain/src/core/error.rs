//! Domain error types

use crate::runoff::ballot::BallotParseError;
use crate::runoff::tally::RunoffError;
use thiserror::Error;

/// Domain-level errors
///
/// Every failure here is per-request and recoverable: an operation that
/// returns an error leaves the session exactly as it was. There is one
/// variant per rejection message so the transport can surface the same
/// wording for the same situation every time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Suggesting an option while voting is closed
    #[error("Voting is not open")]
    VotingNotOpen,

    /// Submitting a ballot while voting is closed
    #[error("Voting is closed")]
    VotingClosed,

    /// Ending a vote that is already over
    #[error("Voting is already closed")]
    VotingAlreadyClosed,

    /// Submitting an order while ordering is closed
    #[error("Ordering is not open")]
    OrderingNotOpen,

    /// Finalizing orders that are already closed
    #[error("Orders are already closed")]
    OrdersAlreadyClosed,

    /// Closing a vote with an empty option list
    #[error("No options to vote on")]
    NoOptions,

    /// Malformed ballot input; the entire ballot was discarded
    #[error("Invalid ballot: {0}")]
    InvalidBallot(#[from] BallotParseError),
}

impl SessionError {
    /// Check if this error is a phase-gate violation, as opposed to bad input
    pub fn is_phase_error(&self) -> bool {
        matches!(
            self,
            SessionError::VotingNotOpen
                | SessionError::VotingClosed
                | SessionError::VotingAlreadyClosed
                | SessionError::OrderingNotOpen
                | SessionError::OrdersAlreadyClosed
        )
    }
}

impl From<RunoffError> for SessionError {
    fn from(err: RunoffError) -> Self {
        match err {
            RunoffError::NoOptions => SessionError::NoOptions,
        }
    }
}
