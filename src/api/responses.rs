//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Celebrations, Mode, Mood, TimerState};

/// API response structure for timer operation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerState,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, timer: TimerState) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            timer,
        }
    }

    /// Create a response whose status reflects the timer's running flag
    pub fn for_timer(message: String, timer: TimerState) -> Self {
        let status = if timer.is_running { "running" } else { "paused" };
        Self::new(status.to_string(), message, timer)
    }
}

/// Error payload for rejected requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message,
            timestamp: Utc::now(),
        }
    }
}

/// Full popup-facing status: everything a client needs to re-render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub mode: Mode,
    pub is_running: bool,
    pub seconds_left: u64,
    /// Remaining time as an mm:ss string
    pub clock: String,
    /// Elapsed fraction of the current mode, in [0, 1]
    pub progress: f64,
    pub mood: Mood,
    pub mood_image: String,
    /// Audio asset the client plays on mode transitions
    pub chime_audio: String,
    pub celebrations: Celebrations,
    pub focus_duration: u64,
    pub break_duration: u64,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
