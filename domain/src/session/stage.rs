//! Session stage

use serde::{Deserialize, Serialize};

/// Phase of the decision session
///
/// Each stage gates which commands are accepted; the voting and ordering
/// gates on [`Session`](super::entities::Session) refine this further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Stage {
    /// No session has been started yet
    #[default]
    Idle,
    /// Stage 1: narrowing the cuisine list to one winner
    CuisineVote,
    /// Stage 2: narrowing the winning cuisine's restaurants to one
    RestaurantVote,
    /// Voting is over; collecting everyone's order
    OrderCollection,
}

impl Stage {
    /// Whether this stage holds ranked votes
    pub fn is_voting(&self) -> bool {
        matches!(self, Stage::CuisineVote | Stage::RestaurantVote)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Idle => write!(f, "idle"),
            Stage::CuisineVote => write!(f, "cuisine vote"),
            Stage::RestaurantVote => write!(f, "restaurant vote"),
            Stage::OrderCollection => write!(f, "order collection"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stage_is_idle() {
        assert_eq!(Stage::default(), Stage::Idle);
    }

    #[test]
    fn test_voting_stages() {
        assert!(Stage::CuisineVote.is_voting());
        assert!(Stage::RestaurantVote.is_voting());
        assert!(!Stage::Idle.is_voting());
        assert!(!Stage::OrderCollection.is_voting());
    }

    #[test]
    fn test_display() {
        assert_eq!(Stage::CuisineVote.to_string(), "cuisine vote");
        assert_eq!(Stage::OrderCollection.to_string(), "order collection");
    }
}
