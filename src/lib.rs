//! habitlog - Terminal habit logger
//!
//! An interactive command-line tool that timestamps the habits you report,
//! keeps them in a JSON log file and replays your history on request.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::HabitError;
