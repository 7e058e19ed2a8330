//! Instant-runoff resolution
//!
//! Pure tallying over an option list and a set of ranked ballots. Each
//! round gives every ballot one vote — at its first rank that is in range
//! and still in the running — then either declares a strict-majority
//! winner, or eliminates *all* options tied at the lowest count and
//! retallies. When every remaining option is tied at the lowest count the
//! round is a full deadlock and the winner is drawn uniformly through the
//! injected [`TieBreak`] source.
//!
//! Ranks always index the original option list captured at resolution
//! time, never the shrinking set of remaining candidates — that mapping is
//! what lets ballots survive eliminations unchanged.

use crate::runoff::ballot::Ballot;
use crate::runoff::tie_break::TieBreak;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from runoff resolution
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunoffError {
    /// Resolution over an empty option list
    #[error("No options to resolve")]
    NoOptions,
}

/// How the winner was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// An option held strictly more than half of a round's votes
    Majority,
    /// Every remaining option tied at the lowest count; the winner was
    /// drawn uniformly at random
    Deadlock,
}

/// Tally of a single runoff round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundTally {
    /// Votes per option still in the running, in original option order
    pub counts: Vec<(String, usize)>,
    /// Sum of all counts this round
    pub total: usize,
    /// Options removed at the end of this round; empty when the round
    /// produced the winner
    pub eliminated: Vec<String>,
}

/// Outcome of an instant-runoff resolution
///
/// Carries the winner plus the full round-by-round breakdown so the
/// transport can show how the decision came about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunoffResult {
    /// The winning option label
    pub winner: String,
    /// Whether the winner took a majority or survived a deadlock draw
    pub decision: Decision,
    /// Per-round tallies, first round first
    pub rounds: Vec<RoundTally>,
}

impl RunoffResult {
    /// Whether the winner was drawn rather than voted in
    pub fn was_drawn(&self) -> bool {
        self.decision == Decision::Deadlock
    }
}

/// Resolve a ranked-choice vote to a single winner
///
/// `options` is the full option list the ballots' 1-based ranks refer to.
/// Out-of-range and non-positive ranks are skipped, never rejected; a
/// ballot whose ranks all miss contributes nothing. Terminates because
/// each round either returns or strictly shrinks the candidate set.
pub fn resolve<'a, I>(
    options: &[String],
    ballots: I,
    tie_break: &mut dyn TieBreak,
) -> Result<RunoffResult, RunoffError>
where
    I: IntoIterator<Item = &'a Ballot>,
{
    if options.is_empty() {
        return Err(RunoffError::NoOptions);
    }

    let ballots: Vec<&Ballot> = ballots.into_iter().collect();

    // Candidate eligibility tracked by original index so that duplicate
    // labels stay distinct candidates.
    let mut remaining = vec![true; options.len()];
    let mut remaining_len = options.len();
    let mut rounds = Vec::new();

    loop {
        // One vote per ballot: its first in-range rank that maps to a
        // candidate still in the running.
        let mut counts = vec![0usize; options.len()];
        for ballot in &ballots {
            for &rank in ballot.ranks() {
                if rank >= 1 && (rank as usize) <= options.len() {
                    let index = rank as usize - 1;
                    if remaining[index] {
                        counts[index] += 1;
                        break;
                    }
                }
            }
        }

        let total: usize = (0..options.len())
            .filter(|&i| remaining[i])
            .map(|i| counts[i])
            .sum();

        let round_counts: Vec<(String, usize)> = (0..options.len())
            .filter(|&i| remaining[i])
            .map(|i| (options[i].clone(), counts[i]))
            .collect();

        // Strict majority: count > total / 2 without integer flooring.
        if let Some(winner) = (0..options.len()).find(|&i| remaining[i] && 2 * counts[i] > total) {
            rounds.push(RoundTally {
                counts: round_counts,
                total,
                eliminated: Vec::new(),
            });
            return Ok(RunoffResult {
                winner: options[winner].clone(),
                decision: Decision::Majority,
                rounds,
            });
        }

        let lowest = (0..options.len())
            .filter(|&i| remaining[i])
            .map(|i| counts[i])
            .min()
            .unwrap_or(0);
        let tied: Vec<usize> = (0..options.len())
            .filter(|&i| remaining[i] && counts[i] == lowest)
            .collect();

        // Full deadlock, including a lone zero-vote candidate: draw.
        if tied.len() == remaining_len {
            let winner = tied[tie_break.choose(tied.len())];
            rounds.push(RoundTally {
                counts: round_counts,
                total,
                eliminated: Vec::new(),
            });
            return Ok(RunoffResult {
                winner: options[winner].clone(),
                decision: Decision::Deadlock,
                rounds,
            });
        }

        // Batch elimination: every option tied at the lowest count drops
        // in the same round.
        let eliminated: Vec<String> = tied.iter().map(|&i| options[i].clone()).collect();
        for &i in &tied {
            remaining[i] = false;
        }
        remaining_len -= tied.len();
        rounds.push(RoundTally {
            counts: round_counts,
            total,
            eliminated,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runoff::tie_break::{FixedTieBreak, SeededTieBreak};

    fn options(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    fn ballots(ranks: &[&[i64]]) -> Vec<Ballot> {
        ranks.iter().map(|r| Ballot::new(r.to_vec())).collect()
    }

    #[test]
    fn test_majority_short_circuits_in_round_one() {
        let opts = options(&["A", "B", "C"]);
        let bs = ballots(&[&[1], &[1], &[1, 2], &[2], &[3]]);

        let result = resolve(&opts, &bs, &mut FixedTieBreak(0)).unwrap();

        assert_eq!(result.winner, "A");
        assert_eq!(result.decision, Decision::Majority);
        assert_eq!(result.rounds.len(), 1);
        assert_eq!(result.rounds[0].total, 5);
        assert!(result.rounds[0].eliminated.is_empty());
    }

    #[test]
    fn test_retally_is_idempotent_off_the_deadlock_path() {
        let opts = options(&["A", "B", "C"]);
        let bs = ballots(&[&[1], &[1], &[2], &[3, 1]]);

        let first = resolve(&opts, &bs, &mut FixedTieBreak(0)).unwrap();
        let second = resolve(&opts, &bs, &mut FixedTieBreak(2)).unwrap();

        assert_eq!(first.winner, second.winner);
        assert_eq!(first.decision, second.decision);
    }

    #[test]
    fn test_elimination_redistributes_to_next_rank() {
        // Round 1: A=2, B=2, C=1. C drops; its ballot falls through to A.
        let opts = options(&["A", "B", "C"]);
        let bs = ballots(&[&[1], &[1], &[2], &[2], &[3, 1]]);

        let result = resolve(&opts, &bs, &mut FixedTieBreak(0)).unwrap();

        assert_eq!(result.winner, "A");
        assert_eq!(result.decision, Decision::Majority);
        assert_eq!(result.rounds.len(), 2);
        assert_eq!(result.rounds[0].eliminated, vec!["C".to_string()]);
        assert_eq!(
            result.rounds[1].counts,
            vec![("A".to_string(), 3), ("B".to_string(), 2)]
        );
    }

    #[test]
    fn test_all_tied_lowest_drop_in_one_batch() {
        // Round 1: A=3, B=2, C=1, D=1. C and D drop together; both of
        // their ballots fall through to B, which then takes the majority.
        let opts = options(&["A", "B", "C", "D"]);
        let bs = ballots(&[&[1], &[1], &[1], &[2], &[2], &[3, 2], &[4, 2]]);

        let result = resolve(&opts, &bs, &mut FixedTieBreak(0)).unwrap();

        assert_eq!(
            result.rounds[0].eliminated,
            vec!["C".to_string(), "D".to_string()]
        );
        assert_eq!(result.winner, "B");
        assert_eq!(result.decision, Decision::Majority);
    }

    #[test]
    fn test_out_of_range_and_eliminated_ranks_are_skipped() {
        // 99 and 0 never land; after C is eliminated, the last ballot's
        // leading rank 3 is dead and its vote moves to rank 1.
        let opts = options(&["A", "B", "C"]);
        let bs = ballots(&[&[99, 1], &[0, 1], &[2], &[2], &[3, 1]]);

        let result = resolve(&opts, &bs, &mut FixedTieBreak(0)).unwrap();

        assert_eq!(result.winner, "A");
        assert_eq!(result.rounds[0].counts[0], ("A".to_string(), 2));
    }

    #[test]
    fn test_ballot_with_no_live_ranks_contributes_nothing() {
        let opts = options(&["A", "B"]);
        let bs = ballots(&[&[1], &[1], &[99, -5]]);

        let result = resolve(&opts, &bs, &mut FixedTieBreak(0)).unwrap();

        assert_eq!(result.winner, "A");
        assert_eq!(result.rounds[0].total, 2);
    }

    #[test]
    fn test_exact_half_does_not_win() {
        // A=2, B=2 after C drops: 2 is not strictly more than 4/2, so the
        // pair deadlocks instead of either winning.
        let opts = options(&["A", "B", "C"]);
        let bs = ballots(&[&[1], &[1], &[2], &[2]]);

        let result = resolve(&opts, &bs, &mut FixedTieBreak(0)).unwrap();

        assert_eq!(result.decision, Decision::Deadlock);
        assert_eq!(result.rounds.len(), 2);
        assert_eq!(result.winner, "A");
    }

    #[test]
    fn test_full_deadlock_terminates_through_the_draw() {
        let opts = options(&["A", "B"]);
        let bs = ballots(&[&[1], &[2]]);

        let result = resolve(&opts, &bs, &mut SeededTieBreak::from_seed(3)).unwrap();

        assert_eq!(result.decision, Decision::Deadlock);
        assert!(opts.contains(&result.winner));
        assert!(result.was_drawn());
    }

    #[test]
    fn test_three_way_tie_draws_among_all() {
        // The concrete example: every option gets exactly one first-choice
        // vote, the threshold is 1.5, and all three tie at the minimum.
        let opts = options(&["A", "B", "C"]);
        let bs = ballots(&[&[1, 2, 3], &[2, 1, 3], &[3, 2, 1]]);

        for (slot, expected) in [(0, "A"), (1, "B"), (2, "C")] {
            let result = resolve(&opts, &bs, &mut FixedTieBreak(slot)).unwrap();
            assert_eq!(result.winner, expected);
            assert_eq!(result.decision, Decision::Deadlock);
            assert_eq!(result.rounds[0].total, 3);
        }
    }

    #[test]
    fn test_single_option_with_votes_wins_outright() {
        let opts = options(&["A"]);
        let bs = ballots(&[&[1]]);

        let result = resolve(&opts, &bs, &mut FixedTieBreak(0)).unwrap();

        assert_eq!(result.winner, "A");
        assert_eq!(result.decision, Decision::Majority);
    }

    #[test]
    fn test_single_option_with_no_votes_is_a_deadlock() {
        let opts = options(&["A"]);
        let bs: Vec<Ballot> = Vec::new();

        let result = resolve(&opts, &bs, &mut SeededTieBreak::from_seed(1)).unwrap();

        assert_eq!(result.winner, "A");
        assert_eq!(result.decision, Decision::Deadlock);
    }

    #[test]
    fn test_no_ballots_deadlocks_across_all_options() {
        let opts = options(&["A", "B", "C"]);
        let bs: Vec<Ballot> = Vec::new();

        let result = resolve(&opts, &bs, &mut FixedTieBreak(1)).unwrap();

        assert_eq!(result.winner, "B");
        assert_eq!(result.rounds[0].total, 0);
    }

    #[test]
    fn test_empty_options_is_an_error() {
        let bs: Vec<Ballot> = Vec::new();
        let result = resolve(&[], &bs, &mut FixedTieBreak(0));
        assert_eq!(result.unwrap_err(), RunoffError::NoOptions);
    }

    #[test]
    fn test_later_ranks_ignored_once_a_vote_lands() {
        // First ballot ranks A then B; only A is counted while A lives.
        let opts = options(&["A", "B"]);
        let bs = ballots(&[&[1, 2], &[1, 2], &[2]]);

        let result = resolve(&opts, &bs, &mut FixedTieBreak(0)).unwrap();

        assert_eq!(result.rounds[0].counts[1], ("B".to_string(), 1));
        assert_eq!(result.winner, "A");
    }
}
