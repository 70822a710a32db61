//! State management module
//!
//! This module contains all state-related structures and their management logic.

pub mod app_state;
pub mod celebrations;
pub mod mood;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use celebrations::Celebrations;
pub use mood::Mood;
pub use timer_state::{Mode, TickEvent, TimerState};
