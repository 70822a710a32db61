//! Study Cat - A state-managed HTTP server for a Pomodoro study timer
//!
//! This is the main entry point for the study-cat application.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use study_cat::{
    api::create_router,
    config::Config,
    services::check_audio_player_available,
    state::AppState,
    tasks::countdown_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("study_cat={},tower_http=info", config.log_level()))
        .init();

    info!("Starting study-cat server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, focus={}min, break={}min",
        config.host, config.port, config.focus, config.r#break
    );

    // The chime is optional; a missing player only degrades to the bell
    if let Err(e) = check_audio_player_available().await {
        warn!("{}", e);
    }

    // Create application state
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        config.focus_seconds(),
        config.break_seconds(),
    ));

    // Start the countdown background task
    let countdown_state = Arc::clone(&state);
    tokio::spawn(async move {
        countdown_task(countdown_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start-pause - Toggle the countdown");
    info!("  POST /reset       - Rewind the current mode");
    info!("  POST /mode/focus  - Switch to focus mode");
    info!("  POST /mode/break  - Switch to break mode");
    info!("  POST /settings    - Replace session durations");
    info!("  GET  /status      - Timer, mood and celebration snapshot");
    info!("  GET  /health      - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
