//! Ballot value object and its parser
//!
//! A ballot is a voter's ranked preferences: 1-based indices into the
//! option list active at *resolution* time. Parsing is all-or-nothing —
//! one bad token discards the whole ballot — but in-range checking is
//! deliberately not done here. The option list can grow between submission
//! and resolution, so out-of-range and non-positive ranks are stored as-is
//! and filtered when tallying.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Ballot input that could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BallotParseError {
    /// A token was not a whole number
    #[error("{token:?} is not a number. Example: 3 1 2")]
    InvalidToken { token: String },
}

/// A voter's ranked preferences (Value Object)
///
/// # Example
///
/// ```
/// use forkvote_domain::Ballot;
///
/// let ballot: Ballot = " 3 1 2 ".parse().unwrap();
/// assert_eq!(ballot.ranks(), &[3, 1, 2]);
///
/// assert!("1 two 3".parse::<Ballot>().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    ranks: Vec<i64>,
}

impl Ballot {
    /// Create a ballot from already-parsed ranks
    pub fn new(ranks: Vec<i64>) -> Self {
        Self { ranks }
    }

    /// The ranked option indices, in preference order
    pub fn ranks(&self) -> &[i64] {
        &self.ranks
    }

    /// Whether the ballot carries no rankings at all
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl FromStr for Ballot {
    type Err = BallotParseError;

    /// Parse a whitespace-separated rank list
    ///
    /// Every token must be an integer or the whole ballot is rejected —
    /// there is no partial acceptance. An empty string is a valid, empty
    /// ballot.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut ranks = Vec::new();
        for token in input.split_whitespace() {
            let rank = token
                .parse::<i64>()
                .map_err(|_| BallotParseError::InvalidToken {
                    token: token.to_string(),
                })?;
            ranks.push(rank);
        }
        Ok(Self { ranks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ranks() {
        let ballot: Ballot = "3 1 2".parse().unwrap();
        assert_eq!(ballot.ranks(), &[3, 1, 2]);
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let ballot: Ballot = "  2\t 1 \n 3 ".parse().unwrap();
        assert_eq!(ballot.ranks(), &[2, 1, 3]);
    }

    #[test]
    fn test_bad_token_rejects_whole_ballot() {
        let err = "1 two 3".parse::<Ballot>().unwrap_err();
        assert_eq!(
            err,
            BallotParseError::InvalidToken {
                token: "two".to_string()
            }
        );
    }

    #[test]
    fn test_empty_input_is_empty_ballot() {
        let ballot: Ballot = "".parse().unwrap();
        assert!(ballot.is_empty());
    }

    #[test]
    fn test_out_of_range_and_negative_ranks_are_kept() {
        // Range filtering happens at tally time, not parse time
        let ballot: Ballot = "99 -1 0 2".parse().unwrap();
        assert_eq!(ballot.ranks(), &[99, -1, 0, 2]);
    }

    #[test]
    fn test_duplicate_ranks_are_kept() {
        let ballot: Ballot = "1 1 2".parse().unwrap();
        assert_eq!(ballot.ranks(), &[1, 1, 2]);
    }
}
