//! Cat mascot mood selection
//!
//! The mood is a pure function of the current mode and elapsed progress.
//! Clients render it from the static image path reported by `GET /status`.

use serde::{Deserialize, Serialize};

use super::timer_state::Mode;

/// Mascot mood, selected from progress thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Break mode, regardless of progress
    Sleeping,
    /// Focus session fully elapsed
    Complete,
    /// Focus progress above 75%
    Focused,
    /// Focus progress above 50%
    Engaged,
    /// Focus progress above 25%
    Tiring,
    /// Fresh start of a focus session
    Fresh,
}

impl Mood {
    /// Pick the mood for the given progress fraction and mode.
    /// Thresholds are exclusive lower bounds, so progress of exactly
    /// 0.75 is still Engaged; only exactly 1.0 counts as Complete.
    pub fn for_progress(progress: f64, mode: Mode) -> Self {
        if mode == Mode::Break {
            return Mood::Sleeping;
        }
        if progress >= 1.0 {
            Mood::Complete
        } else if progress > 0.75 {
            Mood::Focused
        } else if progress > 0.5 {
            Mood::Engaged
        } else if progress > 0.25 {
            Mood::Tiring
        } else {
            Mood::Fresh
        }
    }

    /// Static image asset served to the popup client
    pub fn image_path(&self) -> &'static str {
        match self {
            Mood::Sleeping => "/images/sleep.png",
            Mood::Complete => "/images/aplus.png",
            Mood::Focused => "/images/focused.png",
            Mood::Engaged => "/images/study.png",
            Mood::Tiring => "/images/tired.png",
            Mood::Fresh => "/images/nerd-cat.png",
        }
    }
}
