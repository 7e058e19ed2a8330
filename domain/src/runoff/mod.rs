//! Instant-runoff voting
//!
//! This module contains the ranked-choice resolution machinery:
//!
//! - [`Ballot`] — a voter's ranked preferences and their all-or-nothing
//!   parser
//! - [`resolve`] — the pure runoff tally: strict majority or batch
//!   elimination of the tied-lowest, round after round
//! - [`TieBreak`] — the injectable randomness behind the full-deadlock
//!   draw, the algorithm's only non-deterministic step

pub mod ballot;
pub mod tally;
pub mod tie_break;

pub use ballot::{Ballot, BallotParseError};
pub use tally::{Decision, RoundTally, RunoffError, RunoffResult, resolve};
pub use tie_break::{FixedTieBreak, SeededTieBreak, ThreadRngTieBreak, TieBreak};
