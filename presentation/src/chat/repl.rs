//! REPL (Read-Eval-Print Loop) standing in for the chat collaborator
//!
//! In a bot deployment each command arrives from a chat platform together
//! with the caller's identity. The REPL simulates that: slash commands map
//! one-to-one onto session commands, and `/as` switches the identity the
//! next commands are issued under.

use crate::output::formatter::ConsoleFormatter;
use forkvote_application::{Announcer, SessionEvent, SessionService};
use forkvote_domain::{SessionError, VoterId};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;

/// Interactive session REPL
pub struct SessionRepl<A: Announcer + 'static> {
    service: Arc<SessionService<A>>,
    speaker: VoterId,
    history_file: Option<PathBuf>,
}

impl<A: Announcer + 'static> SessionRepl<A> {
    /// Create a new REPL speaking as `speaker`
    pub fn new(service: Arc<SessionService<A>>, speaker: impl Into<String>) -> Self {
        Self {
            service,
            speaker: VoterId::new(speaker),
            history_file: None,
        }
    }

    /// Override the history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self
            .history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("forkvote").join("history.txt")));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    match line.strip_prefix('/') {
                        Some(command) => {
                            if self.handle_command(command).await {
                                break;
                            }
                        }
                        None => println!("Commands start with '/'. Try /help."),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Handle one slash command. Returns true if the REPL should exit.
    async fn handle_command(&mut self, input: &str) -> bool {
        let (command, arg) = match input.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (input, ""),
        };

        match command {
            "start" => {
                self.service.start().await;
            }
            "suggest" => {
                if arg.is_empty() {
                    println!("Usage: /suggest <name>");
                } else {
                    self.report(self.service.suggest(arg).await);
                }
            }
            "options" => {
                let options = self.service.options().await;
                if options.is_empty() {
                    println!("No options yet. Use /start to begin a vote.");
                } else {
                    println!("{}", ConsoleFormatter::format_numbered(&options));
                }
            }
            "rank" => {
                self.report(self.service.rank(self.speaker.clone(), arg).await);
            }
            "endvote" => {
                self.report(self.service.end_vote().await);
            }
            "order" => {
                if arg.is_empty() {
                    println!("Usage: /order <item>");
                } else {
                    self.report(self.service.order(self.speaker.clone(), arg).await);
                }
            }
            "finalize" => {
                self.report(self.service.finalize().await);
            }
            "as" => {
                if arg.is_empty() {
                    println!("Speaking as {}", self.speaker);
                } else {
                    self.speaker = VoterId::new(arg);
                    println!("Now speaking as {}", self.speaker);
                }
            }
            "status" => {
                let stage = self.service.stage().await;
                match self.service.final_restaurant().await {
                    Some(winner) => println!("Stage: {stage} (winner: {winner})"),
                    None => println!("Stage: {stage}"),
                }
            }
            "result" => match self.service.final_runoff().await {
                Some(runoff) if arg == "json" => {
                    println!("{}", ConsoleFormatter::format_runoff_json(&runoff));
                }
                Some(runoff) => {
                    println!("Winner: {}", runoff.winner);
                    println!("{}", ConsoleFormatter::format_rounds(&runoff));
                }
                None => println!("No final result yet."),
            },
            "help" | "h" | "?" => self.print_help(),
            "quit" | "exit" | "q" => {
                println!("Bye!");
                return true;
            }
            _ => println!("Unknown command: /{command}. Try /help."),
        }

        false
    }

    /// Print a rejection; successful commands announce themselves
    fn report(&self, result: Result<SessionEvent, SessionError>) {
        if let Err(err) = result {
            println!("{err}");
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              forkvote - Food Vote           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Speaking as {}. Use /as <name> to switch.", self.speaker);
        println!();
        println!("Commands:");
        println!("  /start            - Start a new food vote");
        println!("  /suggest <name>   - Add an option to the ballot");
        println!("  /options          - Show the numbered option list");
        println!("  /rank <numbers>   - Submit your ranked ballot, e.g. /rank 3 1 2");
        println!("  /endvote          - Close voting and resolve the winner");
        println!("  /order <item>     - Submit your order");
        println!("  /finalize         - Close ordering and show the order list");
        println!("  /status, /result  - Show where the session stands");
        println!("  /help, /quit      - This help / exit");
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /start            - Start a new food vote (resets everything)");
        println!("  /suggest <name>   - Add an option while voting is open");
        println!("  /options          - Show the numbered option list");
        println!("  /rank <numbers>   - Submit your ranked ballot, e.g. /rank 3 1 2");
        println!("  /endvote          - Close voting and resolve the winner");
        println!("  /order <item>     - Submit your order while ordering is open");
        println!("  /finalize         - Close ordering and show the final list");
        println!("  /as <name>        - Switch who the next commands speak as");
        println!("  /status           - Show the current stage");
        println!("  /result [json]    - Show the final runoff breakdown");
        println!("  /quit, /exit, /q  - Exit");
        println!();
    }
}
