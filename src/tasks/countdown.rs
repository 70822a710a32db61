//! Countdown background task

use std::{sync::Arc, time::Duration};

use tokio::time::{interval, sleep};
use tracing::{debug, error, info, warn};

use crate::{
    services::play_transition_chime,
    state::{AppState, Mode, TickEvent},
};

/// Background task that drives the one-second countdown while the timer
/// is running.
///
/// The tick interval's lifecycle is a pure function of the timer inputs
/// (running flag, mode, both durations): every user operation lands on
/// the restart channel and tears the current interval down, after which
/// the loop re-evaluates from a fresh snapshot. A mode flip produced by
/// a tick rebuilds the interval the same way. At most one tick source is
/// live at any time.
pub async fn countdown_task(state: Arc<AppState>) {
    info!("Starting countdown task");

    let mut timer_rx = state.timer_change_tx.subscribe();

    loop {
        let snapshot = match state.get_timer_state() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!("Failed to read timer state: {}", e);
                sleep(Duration::from_secs(1)).await;
                continue;
            }
        };

        if !snapshot.is_running {
            debug!("Timer paused, waiting for the next operation");
            if let Err(e) = timer_rx.recv().await {
                error!("Error receiving timer change: {}", e);
                sleep(Duration::from_secs(1)).await;
            }
            continue;
        }

        info!(
            "Countdown running: {} mode, {}s left",
            snapshot.mode.as_str(),
            snapshot.seconds_left
        );

        let mut ticker = interval(Duration::from_secs(1));
        // An interval's first tick completes immediately; consume it so
        // the countdown advances a full second after the operation.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let (event, timer) = match state.advance_countdown() {
                        Ok(result) => result,
                        Err(e) => {
                            error!("Failed to advance countdown: {}", e);
                            break;
                        }
                    };

                    match event {
                        TickEvent::None => {}
                        TickEvent::Milestone => {
                            info!("Five-minute focus milestone reached");
                            state.raise_milestone();
                        }
                        TickEvent::Completed { finished } => {
                            info!(
                                "{} session complete, rolling into {} mode ({}s)",
                                finished.as_str(),
                                timer.mode.as_str(),
                                timer.seconds_left
                            );

                            if finished == Mode::Focus {
                                state.raise_session_complete();
                            }

                            tokio::spawn(async move {
                                if let Err(e) = play_transition_chime().await {
                                    warn!("Failed to play transition chime: {}", e);
                                }
                            });

                            // The mode changed, so rebuild the tick source
                            break;
                        }
                    }
                }

                changed = timer_rx.recv() => {
                    match changed {
                        Ok(timer) => {
                            debug!(
                                "Timer inputs changed (running={}, mode={}), tearing down tick source",
                                timer.is_running,
                                timer.mode.as_str()
                            );
                        }
                        Err(e) => {
                            error!("Error receiving timer change: {}", e);
                        }
                    }
                    break;
                }
            }
        }
    }
}
