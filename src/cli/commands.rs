//! CLI command definitions

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "habitlog")]
#[command(
    about = "Log the habits you keep and replay your history",
    long_about = "Interactive habit logger. Type a habit to record it, 'history' to \
                  view your log, or 'exit' to quit.\n\n\
                  Storage: habit_log.json in the current directory, overridden by \
                  habitlog.toml, HABITLOG_CONFIG or HABITLOG_FILE (empty = in-memory). \
                  Diagnostics go to habitlog.log or HABITLOG_LOG."
)]
#[command(version)]
pub struct Cli {}

/// One line typed at the session prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    History,
    /// Blank or whitespace-only input
    Empty,
    /// Anything else, trimmed, case preserved
    Track(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            Command::Empty
        } else if trimmed.eq_ignore_ascii_case("exit") {
            Command::Exit
        } else if trimmed.eq_ignore_ascii_case("history") {
            Command::History
        } else {
            Command::Track(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_rejects_flags() {
        assert!(Cli::try_parse_from(["habitlog", "--file", "x.json"]).is_err());
        assert!(Cli::try_parse_from(["habitlog"]).is_ok());
    }

    #[test]
    fn test_parse_keywords_case_insensitive() {
        assert_eq!(Command::parse("exit"), Command::Exit);
        assert_eq!(Command::parse("EXIT\n"), Command::Exit);
        assert_eq!(Command::parse("  History  "), Command::History);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   \t\n"), Command::Empty);
    }

    #[test]
    fn test_parse_habit_preserves_case() {
        assert_eq!(
            Command::parse("  Morning Run \n"),
            Command::Track("Morning Run".to_string())
        );
        // Keywords only match the whole line
        assert_eq!(
            Command::parse("exit early"),
            Command::Track("exit early".to_string())
        );
    }
}
