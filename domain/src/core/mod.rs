//! Core domain types shared across modules

pub mod error;
pub mod voter;

pub use error::SessionError;
pub use voter::VoterId;
