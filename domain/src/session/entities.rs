//! Session entity: the shared voting session and its state machine
//!
//! One session exists per process and lives for one decision cycle. It is
//! never destroyed — `start` overwrites it in place for the next cycle.
//! Every mutating method is all-or-nothing: on error the session is left
//! exactly as it was.

use crate::core::error::SessionError;
use crate::core::voter::VoterId;
use crate::menu::Menu;
use crate::runoff::ballot::Ballot;
use crate::runoff::tally::{RunoffResult, resolve};
use crate::runoff::tie_break::TieBreak;
use crate::session::stage::Stage;

/// What closing a vote led to
#[derive(Debug, Clone)]
pub enum EndVoteOutcome {
    /// The stage-1 winner had a restaurant sub-list; restaurant voting is
    /// now open over that sub-list
    StageAdvanced { runoff: RunoffResult },
    /// The winner is final; ordering is now open
    FinalChoice { runoff: RunoffResult },
}

/// The shared voting session (Entity)
///
/// Owns the option list, the ballots, the orders, and the two gates.
/// Invariants:
///
/// - at most one of `voting_open` / `orders_open` is true at any time;
/// - `options` is non-empty whenever `voting_open` is true;
/// - ballots and orders keep insertion order, with overwrites in place.
#[derive(Debug, Clone, Default)]
pub struct Session {
    stage: Stage,
    options: Vec<String>,
    ballots: Vec<(VoterId, Ballot)>,
    voting_open: bool,
    orders_open: bool,
    orders: Vec<(VoterId, String)>,
    final_choice: Option<RunoffResult>,
}

impl Session {
    /// Create an idle session with nothing in it
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Accessors ====================

    /// Current stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Whether ranked ballots are currently accepted
    pub fn voting_open(&self) -> bool {
        self.voting_open
    }

    /// Whether orders are currently accepted
    pub fn orders_open(&self) -> bool {
        self.orders_open
    }

    /// The current option list, in announcement order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Number of ballots currently held
    pub fn ballot_count(&self) -> usize {
        self.ballots.len()
    }

    /// The resolved final restaurant, once stage 2 (or a sub-list-less
    /// stage 1) has closed
    pub fn final_restaurant(&self) -> Option<&str> {
        self.final_choice.as_ref().map(|r| r.winner.as_str())
    }

    /// The full runoff breakdown behind the final restaurant
    pub fn final_runoff(&self) -> Option<&RunoffResult> {
        self.final_choice.as_ref()
    }

    // ==================== Mutations ====================

    /// Start (or restart) a decision cycle
    ///
    /// Loads the menu's cuisine set, opens voting, closes ordering, and
    /// clears everything from the previous cycle. Always succeeds, from
    /// any state.
    pub fn start(&mut self, menu: &Menu) {
        self.stage = Stage::CuisineVote;
        self.options = menu.cuisines().to_vec();
        self.ballots.clear();
        self.orders.clear();
        self.voting_open = true;
        self.orders_open = false;
        self.final_choice = None;
    }

    /// Append a suggested option
    ///
    /// Duplicates are allowed and no cross-check against sub-list names is
    /// done; suggestions land verbatim at the end of the list.
    pub fn suggest(&mut self, name: impl Into<String>) -> Result<(), SessionError> {
        if !self.voting_open {
            return Err(SessionError::VotingNotOpen);
        }
        self.options.push(name.into());
        Ok(())
    }

    /// Store or replace a voter's ballot
    ///
    /// The ballot's ranks are interpreted against the option list at
    /// resolution time, so a ballot referencing options that later appear
    /// or disappear is stored as-is.
    pub fn submit_ballot(&mut self, voter: VoterId, ballot: Ballot) -> Result<(), SessionError> {
        if !self.voting_open {
            return Err(SessionError::VotingClosed);
        }
        match self.ballots.iter_mut().find(|(v, _)| *v == voter) {
            Some(slot) => slot.1 = ballot,
            None => self.ballots.push((voter, ballot)),
        }
        Ok(())
    }

    /// Close voting and resolve the winner
    ///
    /// A stage-1 winner with a configured sub-list advances the session to
    /// the restaurant vote: options replaced by the sub-list, ballots
    /// cleared, voting reopened. Any other winner is final: ordering
    /// opens.
    pub fn end_vote(
        &mut self,
        menu: &Menu,
        tie_break: &mut dyn TieBreak,
    ) -> Result<EndVoteOutcome, SessionError> {
        if !self.voting_open {
            return Err(SessionError::VotingAlreadyClosed);
        }

        // Resolution is pure; run it before touching any state so a
        // failure leaves the session untouched.
        let runoff = resolve(&self.options, self.ballots.iter().map(|(_, b)| b), tie_break)?;

        if self.stage == Stage::CuisineVote
            && let Some(sub_list) = menu.sub_list(&runoff.winner)
        {
            self.stage = Stage::RestaurantVote;
            self.options = sub_list.to_vec();
            self.ballots.clear();
            self.voting_open = true;
            return Ok(EndVoteOutcome::StageAdvanced { runoff });
        }

        self.stage = Stage::OrderCollection;
        self.voting_open = false;
        self.orders_open = true;
        self.final_choice = Some(runoff.clone());
        Ok(EndVoteOutcome::FinalChoice { runoff })
    }

    /// Store or replace a voter's order
    pub fn submit_order(
        &mut self,
        voter: VoterId,
        item: impl Into<String>,
    ) -> Result<(), SessionError> {
        if !self.orders_open {
            return Err(SessionError::OrderingNotOpen);
        }
        let item = item.into();
        match self.orders.iter_mut().find(|(v, _)| *v == voter) {
            Some(slot) => slot.1 = item,
            None => self.orders.push((voter, item)),
        }
        Ok(())
    }

    /// Close ordering and return every order in submission order
    pub fn finalize_orders(&mut self) -> Result<Vec<(VoterId, String)>, SessionError> {
        if !self.orders_open {
            return Err(SessionError::OrdersAlreadyClosed);
        }
        self.orders_open = false;
        Ok(self.orders.clone())
    }
}
