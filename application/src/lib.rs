//! Application layer for forkvote
//!
//! This crate contains the session-driving use case and the port
//! definitions toward the collaborator transport. It depends only on the
//! domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    announcer::{Announcer, NoAnnouncer},
    session_event::SessionEvent,
};
pub use use_cases::run_session::SessionService;
