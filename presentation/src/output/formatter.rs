//! Console output formatter for session announcements

use colored::Colorize;
use forkvote_application::SessionEvent;
use forkvote_domain::{Decision, RunoffResult, VoterId};

/// Formats session events for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one announcement
    pub fn format_event(event: &SessionEvent) -> String {
        match event {
            SessionEvent::VoteStarted { options } => Self::format_vote_started(options),
            SessionEvent::OptionsUpdated { options } => format!(
                "{}\n{}",
                "Current options:".cyan().bold(),
                Self::format_numbered(options)
            ),
            SessionEvent::BallotRecorded { voter } => format!("Ballot recorded for {voter}."),
            SessionEvent::StageAdvanced { runoff, options } => {
                Self::format_stage_advanced(runoff, options)
            }
            SessionEvent::FinalChoice { runoff } => Self::format_final_choice(runoff),
            SessionEvent::OrderRecorded { voter } => format!("Order saved for {voter}."),
            SessionEvent::OrdersFinalized { orders } => Self::format_orders(orders),
        }
    }

    /// Number an option list, 1-based, one option per line
    pub fn format_numbered(options: &[String]) -> String {
        options
            .iter()
            .enumerate()
            .map(|(i, option)| format!("{}. {}", i + 1, option))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Round-by-round runoff breakdown
    pub fn format_rounds(runoff: &RunoffResult) -> String {
        let mut output = String::new();
        for (i, round) in runoff.rounds.iter().enumerate() {
            let counts = round
                .counts
                .iter()
                .map(|(option, count)| format!("{option} {count}"))
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!("Round {}: {}", i + 1, counts));
            if !round.eliminated.is_empty() {
                output.push_str(&format!("  (eliminated: {})", round.eliminated.join(", ")));
            }
            output.push('\n');
        }
        match runoff.decision {
            Decision::Majority => output.push_str("Decided by majority."),
            Decision::Deadlock => output.push_str("Drawn at random from a full tie."),
        }
        output
    }

    /// JSON rendering of a runoff breakdown
    pub fn format_runoff_json(runoff: &RunoffResult) -> String {
        serde_json::to_string_pretty(runoff).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_vote_started(options: &[String]) -> String {
        format!(
            "{}\n\nOptions:\n{}\n\nUse /suggest <name> to add options.\nUse /rank followed by numbers separated by spaces. Example: /rank 3 1 2",
            "Food vote started".green().bold(),
            Self::format_numbered(options)
        )
    }

    fn format_stage_advanced(runoff: &RunoffResult, options: &[String]) -> String {
        format!(
            "{}\n{}\n\n{}\n\nOptions:\n{}\n\nUse /rank followed by numbers separated by spaces. Example: /rank 2 1",
            format!("{} wins the cuisine vote", runoff.winner)
                .green()
                .bold(),
            Self::format_rounds(runoff),
            "Restaurant vote started".cyan().bold(),
            Self::format_numbered(options)
        )
    }

    fn format_final_choice(runoff: &RunoffResult) -> String {
        format!(
            "{}\n{}\n\nVoting complete. Ordering is now open.\nUse /order <item> to submit your food.",
            format!("Winner: {}", runoff.winner).green().bold(),
            Self::format_rounds(runoff)
        )
    }

    fn format_orders(orders: &[(VoterId, String)]) -> String {
        let mut output = format!("{}\n", "Final order list".green().bold());
        if orders.is_empty() {
            output.push_str("(no orders were submitted)");
            return output;
        }
        for (voter, item) in orders {
            output.push_str(&format!("{voter} - {item}\n"));
        }
        output.pop();
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forkvote_domain::RoundTally;

    fn no_color() {
        colored::control::set_override(false);
    }

    fn sample_runoff() -> RunoffResult {
        RunoffResult {
            winner: "Pizza".to_string(),
            decision: Decision::Majority,
            rounds: vec![
                RoundTally {
                    counts: vec![
                        ("Chinese".to_string(), 2),
                        ("Thai".to_string(), 1),
                        ("Pizza".to_string(), 2),
                    ],
                    total: 5,
                    eliminated: vec!["Thai".to_string()],
                },
                RoundTally {
                    counts: vec![("Chinese".to_string(), 2), ("Pizza".to_string(), 3)],
                    total: 5,
                    eliminated: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_numbered_list_is_one_based() {
        no_color();
        let formatted =
            ConsoleFormatter::format_numbered(&["Chinese".to_string(), "Pizza".to_string()]);
        assert_eq!(formatted, "1. Chinese\n2. Pizza");
    }

    #[test]
    fn test_rounds_show_eliminations_and_decision() {
        no_color();
        let formatted = ConsoleFormatter::format_rounds(&sample_runoff());
        assert!(formatted.contains("Round 1: Chinese 2, Thai 1, Pizza 2  (eliminated: Thai)"));
        assert!(formatted.contains("Round 2: Chinese 2, Pizza 3"));
        assert!(formatted.contains("Decided by majority."));
    }

    #[test]
    fn test_vote_started_carries_usage_hints() {
        no_color();
        let event = SessionEvent::VoteStarted {
            options: vec!["Chinese".to_string()],
        };
        let formatted = ConsoleFormatter::format_event(&event);
        assert!(formatted.contains("1. Chinese"));
        assert!(formatted.contains("/rank"));
        assert!(formatted.contains("/suggest"));
    }

    #[test]
    fn test_orders_keep_submission_order() {
        no_color();
        let event = SessionEvent::OrdersFinalized {
            orders: vec![
                (VoterId::new("bob"), "hawaiian".to_string()),
                (VoterId::new("alice"), "margherita".to_string()),
            ],
        };
        let formatted = ConsoleFormatter::format_event(&event);
        let bob = formatted.find("bob - hawaiian").unwrap();
        let alice = formatted.find("alice - margherita").unwrap();
        assert!(bob < alice);
    }

    #[test]
    fn test_runoff_json_round_trips() {
        let json = ConsoleFormatter::format_runoff_json(&sample_runoff());
        let parsed: RunoffResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.winner, "Pizza");
        assert_eq!(parsed.rounds.len(), 2);
    }
}
