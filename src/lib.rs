//! Study Cat - A state-managed HTTP server for a Pomodoro study timer
//!
//! This library runs a focus/break countdown behind an HTTP API. A popup
//! client drives the timer through operation endpoints and polls `/status`
//! for the remaining time, the mascot's mood, and celebration flags.

pub mod api;
pub mod config;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use state::AppState;
pub use utils::signals::shutdown_signal;
