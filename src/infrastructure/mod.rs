//! Infrastructure layer - Persistence, configuration and diagnostics

pub mod config;
pub mod logging;
pub mod store;

pub use config::Config;
pub use store::HabitStore;
