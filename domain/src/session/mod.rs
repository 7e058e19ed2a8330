//! Session domain: the shared decision session and its state machine
//!
//! One cycle runs cuisine vote → restaurant vote → order collection, with
//! the restaurant vote skipped when the winning cuisine has no configured
//! sub-list:
//!
//! ```text
//! Idle ──start──> CuisineVote(voting)
//! CuisineVote ──end_vote, winner has sub-list──> RestaurantVote(voting)
//! CuisineVote ──end_vote, no sub-list──> OrderCollection(ordering)
//! RestaurantVote ──end_vote──> OrderCollection(ordering)
//! OrderCollection ──finalize_orders──> OrderCollection(closed)
//! any ──start──> CuisineVote(voting)
//! ```

pub mod entities;
pub mod stage;

pub use entities::{EndVoteOutcome, Session};
pub use stage::Stage;
