//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};

use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{info, warn};

use super::celebrations::{Celebrations, COMPLETION_DISPLAY, MILESTONE_DISPLAY};
use super::timer_state::{Mode, TickEvent, TimerState};

/// Main application state that owns the timer and celebration flags
#[derive(Debug)]
pub struct AppState {
    /// The one timer, mutated only through the methods below
    pub timer: Arc<Mutex<TimerState>>,
    /// Transient celebration flags with delayed auto-clear
    pub celebrations: Arc<Mutex<Celebrations>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// User operations broadcast here; the countdown task tears down
    /// and rebuilds its tick interval on every message
    pub timer_change_tx: broadcast::Sender<TimerState>,
    /// Per-tick snapshots for watchers; ticks deliberately do not go
    /// through `timer_change_tx`, or they would cancel their own interval
    pub timer_update_tx: watch::Sender<TimerState>,
    /// Keep the receiver alive to prevent channel closure
    pub _timer_update_rx: watch::Receiver<TimerState>,
}

impl AppState {
    /// Create a new AppState with a paused focus timer
    pub fn new(port: u16, host: String, focus_seconds: u64, break_seconds: u64) -> Self {
        let timer = TimerState::new(focus_seconds, break_seconds);
        let (timer_change_tx, _) = broadcast::channel(100);
        let (timer_update_tx, timer_update_rx) = watch::channel(timer.clone());

        Self {
            timer: Arc::new(Mutex::new(timer)),
            celebrations: Arc::new(Mutex::new(Celebrations::new())),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            timer_change_tx,
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
        }
    }

    /// Apply a user operation to the timer and notify the countdown task
    pub fn update_timer<F>(&self, action: &str, updater: F) -> Result<TimerState, String>
    where
        F: FnOnce(&mut TimerState),
    {
        let mut timer = self
            .timer
            .lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        updater(&mut timer);
        let new_timer = timer.clone();
        drop(timer);

        // Update last action tracking
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        // Restart the countdown task against the new inputs
        if let Err(e) = self.timer_change_tx.send(new_timer.clone()) {
            warn!("Failed to send timer change notification: {}", e);
        }
        if let Err(e) = self.timer_update_tx.send(new_timer.clone()) {
            warn!("Failed to send timer update: {}", e);
        }

        Ok(new_timer)
    }

    /// Toggle between running and paused
    pub fn start_pause(&self) -> Result<TimerState, String> {
        info!("Toggling timer run state");
        self.update_timer("start-pause", |timer| timer.start_pause())
    }

    /// Pause and rewind the current mode to its full duration
    pub fn reset(&self) -> Result<TimerState, String> {
        info!("Resetting timer");
        self.update_timer("reset", |timer| timer.reset())
    }

    /// Switch to the given mode, paused at its full duration
    pub fn switch_mode(&self, mode: Mode) -> Result<TimerState, String> {
        info!("Switching timer to {} mode", mode.as_str());
        self.update_timer(mode.as_str(), |timer| timer.switch_mode(mode))
    }

    /// Replace both session durations
    pub fn save_settings(&self, focus_seconds: u64, break_seconds: u64) -> Result<TimerState, String> {
        info!(
            "Saving settings: focus={}s, break={}s",
            focus_seconds, break_seconds
        );
        self.update_timer("settings", |timer| {
            timer.save_settings(focus_seconds, break_seconds)
        })
    }

    /// Advance the running countdown by one second. Called only by the
    /// countdown task; publishes to watchers but never to the restart
    /// channel. A tick against a paused timer is a no-op: a pause and a
    /// pending interval tick can both be ready in the same select
    /// iteration of the countdown task, and the tick arm may win.
    pub fn advance_countdown(&self) -> Result<(TickEvent, TimerState), String> {
        let mut timer = self
            .timer
            .lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        if !timer.is_running {
            return Ok((TickEvent::None, timer.clone()));
        }

        let event = timer.tick();
        let new_timer = timer.clone();
        drop(timer);

        if let Err(e) = self.timer_update_tx.send(new_timer.clone()) {
            warn!("Failed to send timer update: {}", e);
        }

        Ok((event, new_timer))
    }

    /// Raise the five-minute milestone flag and schedule its clear.
    /// Fire-and-forget: a clear landing after the flag was already
    /// lowered is a no-op.
    pub fn raise_milestone(&self) {
        if let Ok(mut celebrations) = self.celebrations.lock() {
            celebrations.milestone = true;
        }

        let celebrations = Arc::clone(&self.celebrations);
        tokio::spawn(async move {
            tokio::time::sleep(MILESTONE_DISPLAY).await;
            if let Ok(mut celebrations) = celebrations.lock() {
                celebrations.milestone = false;
            }
        });
    }

    /// Raise the session-complete flag and schedule its clear
    pub fn raise_session_complete(&self) {
        if let Ok(mut celebrations) = self.celebrations.lock() {
            celebrations.session_complete = true;
        }

        let celebrations = Arc::clone(&self.celebrations);
        tokio::spawn(async move {
            tokio::time::sleep(COMPLETION_DISPLAY).await;
            if let Ok(mut celebrations) = celebrations.lock() {
                celebrations.session_complete = false;
            }
        });
    }

    /// Get a snapshot of the current timer state
    pub fn get_timer_state(&self) -> Result<TimerState, String> {
        self.timer
            .lock()
            .map(|timer| timer.clone())
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Get a snapshot of the current celebration flags
    pub fn get_celebrations(&self) -> Result<Celebrations, String> {
        self.celebrations
            .lock()
            .map(|celebrations| celebrations.clone())
            .map_err(|e| format!("Failed to lock celebration state: {}", e))
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
