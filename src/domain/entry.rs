//! Habit entry model and its on-disk timestamp format

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Timestamp layout used in the storage file and on the transcript
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One recorded habit occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitEntry {
    #[serde(deserialize_with = "non_blank")]
    habit: String,
    #[serde(rename = "timestamp", with = "timestamp_format")]
    logged_at: NaiveDateTime,
}

impl HabitEntry {
    /// Create an entry stamped with an explicit time, truncated to whole seconds
    pub fn new(habit: impl Into<String>, logged_at: NaiveDateTime) -> Self {
        HabitEntry {
            habit: habit.into(),
            logged_at: truncate_to_seconds(logged_at),
        }
    }

    /// Create an entry stamped with the current local time
    pub fn now(habit: impl Into<String>) -> Self {
        Self::new(habit, Local::now().naive_local())
    }

    pub fn habit(&self) -> &str {
        &self.habit
    }

    pub fn logged_at(&self) -> NaiveDateTime {
        self.logged_at
    }

    /// Timestamp rendered as `YYYY-MM-DD HH:MM:SS`
    pub fn timestamp(&self) -> String {
        self.logged_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Habit name in title case for display
    pub fn display_name(&self) -> String {
        title_case(&self.habit)
    }
}

/// Whether `habit` is usable as an entry name
pub fn is_valid_habit(habit: &str) -> bool {
    !habit.trim().is_empty()
}

fn non_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let habit = String::deserialize(deserializer)?;
    if !is_valid_habit(&habit) {
        return Err(serde::de::Error::custom("habit must not be blank"));
    }
    Ok(habit)
}

fn truncate_to_seconds(at: NaiveDateTime) -> NaiveDateTime {
    at.with_nanosecond(0).unwrap_or(at)
}

/// Upper-case the first letter of each word and lower-case the rest.
///
/// A word starts after any character that is neither alphanumeric nor an
/// apostrophe, so "don't stop" becomes "Don't Stop". Unlike Python's
/// `str.title()`, digits and apostrophes do not end a word ("10k" stays
/// "10k"); see the title casing note in DESIGN.md.
pub fn title_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                output.extend(ch.to_uppercase());
            } else {
                output.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            output.push(ch);
            at_word_start = !(ch.is_alphanumeric() || ch == '\'');
        }
    }

    output
}

mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(at: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&at.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
