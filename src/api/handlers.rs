//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::services::CHIME_ASSET;
use crate::state::{AppState, Mode, Mood};

use super::responses::{ApiResponse, ErrorResponse, HealthResponse, StatusResponse};

/// Request body for POST /settings; whole minutes per session
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsRequest {
    pub focus_minutes: u64,
    pub break_minutes: u64,
}

/// Handle POST /start-pause - Toggle between running and paused
pub async fn start_pause_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.start_pause() {
        Ok(timer) => {
            let message = if timer.is_running {
                "Timer started"
            } else {
                "Timer paused"
            };
            info!("Start-pause endpoint called - {}", message.to_lowercase());
            Ok(Json(ApiResponse::for_timer(message.to_string(), timer)))
        }
        Err(e) => {
            error!("Failed to toggle timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /reset - Rewind the current mode, paused
pub async fn reset_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.reset() {
        Ok(timer) => {
            info!("Reset endpoint called - timer rewound");
            Ok(Json(ApiResponse::for_timer(
                format!("Timer reset to {}", timer.clock()),
                timer,
            )))
        }
        Err(e) => {
            error!("Failed to reset timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /mode/focus - Switch to focus mode
pub async fn focus_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    switch_mode(state, Mode::Focus)
}

/// Handle POST /mode/break - Switch to break mode
pub async fn break_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    switch_mode(state, Mode::Break)
}

fn switch_mode(state: Arc<AppState>, mode: Mode) -> Result<Json<ApiResponse>, StatusCode> {
    match state.switch_mode(mode) {
        Ok(timer) => {
            info!("Mode endpoint called - switched to {}", mode.as_str());
            Ok(Json(ApiResponse::for_timer(
                format!("Switched to {} mode", mode.as_str()),
                timer,
            )))
        }
        Err(e) => {
            error!("Failed to switch mode: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /settings - Replace both session durations.
/// Minutes are whole numbers converted to seconds; zero-minute sessions
/// are rejected rather than producing a degenerate countdown.
pub async fn settings_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SettingsRequest>,
) -> Result<Json<ApiResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.focus_minutes == 0 || request.break_minutes == 0 {
        warn!(
            "Rejected settings with zero-minute duration: focus={}, break={}",
            request.focus_minutes, request.break_minutes
        );
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(
                "Session durations must be at least one minute".to_string(),
            )),
        ));
    }

    match state.save_settings(request.focus_minutes * 60, request.break_minutes * 60) {
        Ok(timer) => {
            info!(
                "Settings endpoint called - focus={}min, break={}min",
                request.focus_minutes, request.break_minutes
            );
            Ok(Json(ApiResponse::for_timer(
                "Settings saved".to_string(),
                timer,
            )))
        }
        Err(e) => {
            error!("Failed to save settings: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e)),
            ))
        }
    }
}

/// Handle GET /status - Return everything the popup needs to render
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.get_timer_state() {
        Ok(timer) => timer,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let celebrations = match state.get_celebrations() {
        Ok(celebrations) => celebrations,
        Err(e) => {
            error!("Failed to get celebration state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let progress = timer.progress();
    let mood = Mood::for_progress(progress, timer.mode);
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        mode: timer.mode,
        is_running: timer.is_running,
        seconds_left: timer.seconds_left,
        clock: timer.clock(),
        progress,
        mood,
        mood_image: mood.image_path().to_string(),
        chime_audio: CHIME_ASSET.to_string(),
        celebrations,
        focus_duration: timer.focus_duration,
        break_duration: timer.break_duration,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
