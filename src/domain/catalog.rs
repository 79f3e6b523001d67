//! Encouragement messages for tracked habits

/// Fallback for habits the catalog does not know
pub const GENERIC_RESPONSE: &str = "That's a valuable habit! Keep going 💪";

/// Look up the encouragement for a habit, ignoring case
pub fn response_for(habit: &str) -> &'static str {
    known_response(habit).unwrap_or(GENERIC_RESPONSE)
}

/// Whether the catalog has a dedicated message for this habit
pub fn is_known(habit: &str) -> bool {
    known_response(habit).is_some()
}

fn known_response(habit: &str) -> Option<&'static str> {
    let message = match habit.to_lowercase().as_str() {
        "exercise" => "Awesome! Keep your body strong and your mind sharper 🏋️‍♀️🧠",
        "study" => "You're building your future, one session at a time 📚🌟",
        "read" => "Books are your brain's best friends 📖💡",
        "meditate" => "Peace within brings peace outside 🧘‍♀️🌼",
        "journal" => "Writing clears your mind and boosts clarity 📝✨",
        _ => return None,
    };
    Some(message)
}
