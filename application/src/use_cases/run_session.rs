//! Session command use case
//!
//! Owns the single shared voting session and serializes every command
//! against it. Each public method validates the current phase, applies the
//! mutation under the session lock, and then — after releasing the lock,
//! before returning — publishes the resulting announcement through the
//! [`Announcer`] port. Because a command only returns once its
//! announcement is out, announcements can never be reordered relative to
//! their triggering mutations.

use crate::ports::announcer::Announcer;
use crate::ports::session_event::SessionEvent;
use forkvote_domain::{
    Ballot, EndVoteOutcome, Menu, Session, SessionError, Stage, TieBreak, VoterId,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Session state guarded by one lock
///
/// The tie-break source sits behind the same lock as the session because
/// `end_vote` draws from it mid-mutation.
struct Inner {
    session: Session,
    tie_break: Box<dyn TieBreak + Send>,
}

/// Use case driving the single shared decision session
///
/// # Example
///
/// ```
/// use forkvote_application::{NoAnnouncer, SessionService};
/// use forkvote_domain::{Menu, ThreadRngTieBreak};
/// use std::sync::Arc;
///
/// # async fn demo() {
/// let service = SessionService::new(
///     Menu::default(),
///     Box::new(ThreadRngTieBreak),
///     Arc::new(NoAnnouncer),
/// );
/// service.start().await;
/// service.rank("alice".into(), "6 1 2").await.unwrap();
/// # }
/// ```
pub struct SessionService<A: Announcer> {
    inner: Mutex<Inner>,
    menu: Menu,
    announcer: Arc<A>,
}

impl<A: Announcer> SessionService<A> {
    /// Create a service with an injected tie-break source and announcer
    pub fn new(menu: Menu, tie_break: Box<dyn TieBreak + Send>, announcer: Arc<A>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                session: Session::new(),
                tie_break,
            }),
            menu,
            announcer,
        }
    }

    /// Start (or restart) a decision cycle; always succeeds
    pub async fn start(&self) -> SessionEvent {
        let event = {
            let mut inner = self.inner.lock().await;
            inner.session.start(&self.menu);
            SessionEvent::VoteStarted {
                options: inner.session.options().to_vec(),
            }
        };
        info!("Session started, {} options on the ballot", self.menu.cuisines().len());
        self.announce(event)
    }

    /// Append a suggested option to the current vote
    pub async fn suggest(&self, name: &str) -> Result<SessionEvent, SessionError> {
        let event = {
            let mut inner = self.inner.lock().await;
            inner.session.suggest(name)?;
            SessionEvent::OptionsUpdated {
                options: inner.session.options().to_vec(),
            }
        };
        debug!(option = name, "Option suggested");
        Ok(self.announce(event))
    }

    /// Snapshot of the current numbered option list, any phase
    pub async fn options(&self) -> Vec<String> {
        self.inner.lock().await.session.options().to_vec()
    }

    /// Current stage, for status display
    pub async fn stage(&self) -> Stage {
        self.inner.lock().await.session.stage()
    }

    /// The final restaurant once one is decided
    pub async fn final_restaurant(&self) -> Option<String> {
        self.inner
            .lock()
            .await
            .session
            .final_restaurant()
            .map(String::from)
    }

    /// The full runoff breakdown behind the final restaurant
    pub async fn final_runoff(&self) -> Option<forkvote_domain::RunoffResult> {
        self.inner.lock().await.session.final_runoff().cloned()
    }

    /// Parse and store a voter's ranked ballot
    ///
    /// The phase gate is checked before the input is parsed, so a closed
    /// vote rejects even malformed input with the phase error. A parse
    /// failure discards the entire ballot and leaves any previous ballot
    /// from the same voter in place.
    pub async fn rank(&self, voter: VoterId, input: &str) -> Result<SessionEvent, SessionError> {
        let event = {
            let mut inner = self.inner.lock().await;
            if !inner.session.voting_open() {
                return Err(SessionError::VotingClosed);
            }
            let ballot: Ballot = input.parse()?;
            inner.session.submit_ballot(voter.clone(), ballot)?;
            SessionEvent::BallotRecorded { voter }
        };
        debug!("Ballot recorded");
        Ok(self.announce(event))
    }

    /// Close the current vote and resolve the winner
    pub async fn end_vote(&self) -> Result<SessionEvent, SessionError> {
        let event = {
            let mut inner = self.inner.lock().await;
            let Inner { session, tie_break } = &mut *inner;
            match session.end_vote(&self.menu, tie_break.as_mut())? {
                EndVoteOutcome::StageAdvanced { runoff } => {
                    info!(winner = %runoff.winner, "Cuisine vote closed, restaurant vote open");
                    SessionEvent::StageAdvanced {
                        runoff,
                        options: session.options().to_vec(),
                    }
                }
                EndVoteOutcome::FinalChoice { runoff } => {
                    info!(winner = %runoff.winner, "Voting complete, ordering open");
                    SessionEvent::FinalChoice { runoff }
                }
            }
        };
        Ok(self.announce(event))
    }

    /// Store a voter's order
    pub async fn order(&self, voter: VoterId, item: &str) -> Result<SessionEvent, SessionError> {
        let event = {
            let mut inner = self.inner.lock().await;
            inner.session.submit_order(voter.clone(), item)?;
            SessionEvent::OrderRecorded { voter }
        };
        debug!("Order recorded");
        Ok(self.announce(event))
    }

    /// Close ordering and announce the complete order list
    pub async fn finalize(&self) -> Result<SessionEvent, SessionError> {
        let event = {
            let mut inner = self.inner.lock().await;
            let orders = inner.session.finalize_orders()?;
            SessionEvent::OrdersFinalized { orders }
        };
        info!("Orders finalized");
        Ok(self.announce(event))
    }

    /// Publish an event and hand it back to the caller
    fn announce(&self, event: SessionEvent) -> SessionEvent {
        self.announcer.announce(&event);
        event
    }
}
