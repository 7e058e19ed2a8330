//! Interactive chat module
//!
//! Provides a readline-based stand-in for the chat collaborator.

mod repl;

pub use repl::SessionRepl;
