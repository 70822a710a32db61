//! Timer state structure and the countdown reducer

use serde::{Deserialize, Serialize};

/// Default focus session length: 25 minutes
pub const DEFAULT_FOCUS_SECONDS: u64 = 25 * 60;
/// Default break length: 5 minutes
pub const DEFAULT_BREAK_SECONDS: u64 = 5 * 60;
/// A milestone celebration fires every 5 elapsed minutes of focus
pub const MILESTONE_INTERVAL_SECONDS: u64 = 5 * 60;

/// The two countdown phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Focus,
    Break,
}

impl Mode {
    /// The mode the countdown rolls into when this one finishes
    pub fn other(&self) -> Self {
        match self {
            Mode::Focus => Mode::Break,
            Mode::Break => Mode::Focus,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Focus => "focus",
            Mode::Break => "break",
        }
    }
}

/// What a single tick of the countdown produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Plain decrement, nothing to celebrate
    None,
    /// The pre-decrement value crossed a 5-minute focus milestone
    Milestone,
    /// The countdown ran out and the mode flipped; carries the mode
    /// that just finished
    Completed { finished: Mode },
}

/// Timer state for the study/break countdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerState {
    pub mode: Mode,
    pub focus_duration: u64,
    pub break_duration: u64,
    pub seconds_left: u64,
    pub is_running: bool,
}

impl TimerState {
    /// Create a paused timer in focus mode with the given durations
    pub fn new(focus_duration: u64, break_duration: u64) -> Self {
        Self {
            mode: Mode::Focus,
            focus_duration,
            break_duration,
            seconds_left: focus_duration,
            is_running: false,
        }
    }

    /// The configured duration of a mode, in seconds
    pub fn duration_for(&self, mode: Mode) -> u64 {
        match mode {
            Mode::Focus => self.focus_duration,
            Mode::Break => self.break_duration,
        }
    }

    /// The configured duration of the current mode
    pub fn current_duration(&self) -> u64 {
        self.duration_for(self.mode)
    }

    /// Fraction of the current mode already elapsed, in [0, 1]
    pub fn progress(&self) -> f64 {
        let total = self.current_duration();
        if total == 0 {
            return 1.0;
        }
        1.0 - self.seconds_left as f64 / total as f64
    }

    /// Toggle between running and paused
    pub fn start_pause(&mut self) {
        self.is_running = !self.is_running;
    }

    /// Pause and wind the current mode back to its full duration
    pub fn reset(&mut self) {
        self.is_running = false;
        self.seconds_left = self.current_duration();
    }

    /// Switch to the given mode and restart its countdown, paused.
    /// Switching is a user-initiated restart, so it always pauses even
    /// when the timer was running.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.is_running = false;
        self.seconds_left = self.current_duration();
    }

    /// Replace both durations. The current mode's countdown restarts at
    /// the full new duration (partial progress is discarded) and the
    /// timer pauses rather than resuming behind the closed settings view.
    pub fn save_settings(&mut self, focus_duration: u64, break_duration: u64) {
        self.focus_duration = focus_duration;
        self.break_duration = break_duration;
        self.is_running = false;
        self.seconds_left = self.current_duration();
    }

    /// Advance the countdown by one second.
    ///
    /// With more than one second left this decrements and reports a
    /// milestone when the pre-decrement value is a positive multiple of
    /// five minutes during focus. With one second (or less) left the
    /// mode flips, the countdown restarts at the new mode's duration,
    /// and the finished mode is reported. The running flag is untouched:
    /// the countdown rolls straight into the next mode. Callers gate on
    /// `is_running` (see `AppState::advance_countdown`); this step only
    /// counts.
    pub fn tick(&mut self) -> TickEvent {
        if self.seconds_left <= 1 {
            let finished = self.mode;
            self.mode = finished.other();
            self.seconds_left = self.current_duration();
            return TickEvent::Completed { finished };
        }

        let prev = self.seconds_left;
        self.seconds_left -= 1;

        if self.mode == Mode::Focus && prev % MILESTONE_INTERVAL_SECONDS == 0 {
            TickEvent::Milestone
        } else {
            TickEvent::None
        }
    }

    /// Remaining time as an mm:ss clock string
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}", self.seconds_left / 60, self.seconds_left % 60)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_SECONDS, DEFAULT_BREAK_SECONDS)
    }
}
