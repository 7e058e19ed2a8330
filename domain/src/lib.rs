//! Domain layer for forkvote
//!
//! This crate contains the core business logic: the shared decision
//! session, the menu of cuisines and restaurant sub-lists, and the
//! instant-runoff resolver. It has no dependencies on transport or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Two-stage runoff
//!
//! A decision cycle first narrows a cuisine list to one winner, then
//! narrows that cuisine's restaurant sub-list to the final choice, then
//! collects everyone's order. A winning cuisine without a sub-list is
//! final immediately.
//!
//! ## Instant runoff
//!
//! Each round, every ballot votes for its first still-standing choice.
//! A strict majority wins outright; otherwise all options tied at the
//! lowest count are eliminated together and the ballots are retallied.
//! A full deadlock is settled by a uniform draw through an injectable
//! [`TieBreak`] source — the only non-deterministic step.

pub mod core;
pub mod menu;
pub mod runoff;
pub mod session;

// Re-export commonly used types
pub use crate::core::{error::SessionError, voter::VoterId};
pub use menu::Menu;
pub use runoff::{
    Ballot, BallotParseError, Decision, FixedTieBreak, RoundTally, RunoffError, RunoffResult,
    SeededTieBreak, ThreadRngTieBreak, TieBreak, resolve,
};
pub use session::{EndVoteOutcome, Session, Stage};
