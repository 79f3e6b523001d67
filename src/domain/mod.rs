//! Domain layer - Habit entries and the message catalog

pub mod catalog;
pub mod entry;

pub use entry::{HabitEntry, TIMESTAMP_FORMAT};
