//! Announcement events emitted by the session service
//!
//! These events form the output port from the application layer to the
//! collaborator transport. The transport receives them and renders them
//! appropriately (console announcer for the REPL, a chat adapter in a bot
//! deployment, a recorder in tests).

use forkvote_domain::{RunoffResult, VoterId};

/// Events emitted by [`SessionService`](crate::use_cases::run_session::SessionService)
/// for the transport to render
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A new cycle started; cuisine voting is open over `options`
    VoteStarted { options: Vec<String> },

    /// An option was suggested; the refreshed list
    OptionsUpdated { options: Vec<String> },

    /// A voter's ballot was stored or replaced
    BallotRecorded { voter: VoterId },

    /// Stage 1 resolved to a cuisine with a sub-list; restaurant voting
    /// is open over `options`
    StageAdvanced {
        runoff: RunoffResult,
        options: Vec<String>,
    },

    /// The final restaurant is decided; ordering is open
    FinalChoice { runoff: RunoffResult },

    /// A voter's order was stored or replaced
    OrderRecorded { voter: VoterId },

    /// Ordering closed; the complete order list in submission order
    OrdersFinalized { orders: Vec<(VoterId, String)> },
}

impl SessionEvent {
    /// Short tag for logging
    pub fn kind(&self) -> &'static str {
        match self {
            SessionEvent::VoteStarted { .. } => "vote_started",
            SessionEvent::OptionsUpdated { .. } => "options_updated",
            SessionEvent::BallotRecorded { .. } => "ballot_recorded",
            SessionEvent::StageAdvanced { .. } => "stage_advanced",
            SessionEvent::FinalChoice { .. } => "final_choice",
            SessionEvent::OrderRecorded { .. } => "order_recorded",
            SessionEvent::OrdersFinalized { .. } => "orders_finalized",
        }
    }
}
