//! Transcript text shown to the user

use crate::domain::{catalog, HabitEntry};

pub const WELCOME: &str = "🌟 Welcome to Habit Builder with OOP 🌟";
pub const NAME_PROMPT: &str = "👤 Enter your name: ";
pub const EMPTY_NAME_WARNING: &str = "⚠️ Please enter a name.";
pub const COMMAND_PROMPT: &str =
    "\n🔹 Type a habit to log, 'history' to view log, or 'exit' to quit: ";
pub const EMPTY_COMMAND_WARNING: &str = "⚠️ Please type a habit name.";
pub const FAREWELL: &str = "👋 Keep growing, one habit at a time. See you again!";
pub const EMPTY_HISTORY: &str = "📭 No habits logged yet.";

/// Format the history listing, or the empty-log notice
pub fn format_history(user_name: &str, entries: Option<&[HabitEntry]>) -> String {
    let Some(entries) = entries else {
        return EMPTY_HISTORY.to_string();
    };

    let mut output = format!("📜 Habit History for {}:\n", user_name);
    for entry in entries {
        output.push_str(&format!(
            "🔹 {} at {}\n",
            entry.display_name(),
            entry.timestamp()
        ));
    }
    output
}

/// Format the encouragement printed after tracking a habit
pub fn format_response(user_name: &str, habit: &str) -> String {
    format!("{}, {}", user_name, catalog::response_for(habit))
}
