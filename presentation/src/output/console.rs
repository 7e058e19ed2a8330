//! Console announcer
//!
//! The production [`Announcer`]: renders each session event through
//! [`ConsoleFormatter`] and prints it.

use crate::output::formatter::ConsoleFormatter;
use forkvote_application::{Announcer, SessionEvent};

/// Announcer that prints formatted events to stdout
pub struct ConsoleAnnouncer;

impl Announcer for ConsoleAnnouncer {
    fn announce(&self, event: &SessionEvent) {
        println!("{}", ConsoleFormatter::format_event(event));
    }
}
