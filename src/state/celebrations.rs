//! Transient celebration flags

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the five-minute milestone celebration stays visible
pub const MILESTONE_DISPLAY: Duration = Duration::from_millis(3000);
/// How long the session-complete celebration stays visible
pub const COMPLETION_DISPLAY: Duration = Duration::from_millis(5000);

/// Celebration flags reported to clients. Both are transient: they are
/// raised by the countdown task and cleared by a delayed one-shot after
/// their display window. Clearing an already-cleared flag is a no-op,
/// so overlapping or stale clears are harmless.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Celebrations {
    /// Five elapsed minutes of focus
    pub milestone: bool,
    /// A focus session just finished
    pub session_complete: bool,
}

impl Celebrations {
    pub fn new() -> Self {
        Self::default()
    }
}
