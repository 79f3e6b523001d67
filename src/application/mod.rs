//! Application layer - Use cases and orchestration

pub mod session;

pub use session::SessionService;
