//! Countdown task integration tests, driven with paused tokio time

use std::{sync::Arc, time::Duration};

use tokio::time::sleep;

use study_cat::{
    state::{AppState, Mode},
    tasks::countdown_task,
};

fn spawn_engine(focus_seconds: u64, break_seconds: u64) -> Arc<AppState> {
    let state = Arc::new(AppState::new(
        0,
        "127.0.0.1".to_string(),
        focus_seconds,
        break_seconds,
    ));
    tokio::spawn(countdown_task(Arc::clone(&state)));
    state
}

#[tokio::test(start_paused = true)]
async fn ticks_once_per_second_only_while_running() {
    let state = spawn_engine(1500, 300);
    // Let the task subscribe before the first operation.
    tokio::task::yield_now().await;

    state.start_pause().expect("start");
    sleep(Duration::from_millis(3500)).await;
    assert_eq!(state.get_timer_state().expect("timer").seconds_left, 1497);

    state.start_pause().expect("pause");
    sleep(Duration::from_secs(5)).await;
    let timer = state.get_timer_state().expect("timer");
    assert_eq!(timer.seconds_left, 1497);
    assert!(!timer.is_running);
}

#[tokio::test(start_paused = true)]
async fn finished_focus_rolls_into_break_and_celebrates() {
    let state = spawn_engine(2, 300);
    tokio::task::yield_now().await;

    state.start_pause().expect("start");
    sleep(Duration::from_millis(2500)).await;

    let timer = state.get_timer_state().expect("timer");
    assert_eq!(timer.mode, Mode::Break);
    assert_eq!(timer.seconds_left, 300);
    assert!(timer.is_running, "countdown rolls straight into the break");
    assert!(state.get_celebrations().expect("flags").session_complete);
}

#[tokio::test(start_paused = true)]
async fn finished_break_does_not_raise_the_completion_flag() {
    let state = spawn_engine(1500, 2);
    tokio::task::yield_now().await;

    state.switch_mode(Mode::Break).expect("switch");
    state.start_pause().expect("start");
    sleep(Duration::from_millis(2500)).await;

    let timer = state.get_timer_state().expect("timer");
    assert_eq!(timer.mode, Mode::Focus);
    assert_eq!(timer.seconds_left, 1500);
    assert!(!state.get_celebrations().expect("flags").session_complete);
}

#[tokio::test(start_paused = true)]
async fn milestone_raises_and_clears_in_real_time() {
    // The very first tick of a 300 second focus session sees a
    // pre-decrement value of 300, which is already a milestone multiple.
    let state = spawn_engine(300, 60);
    tokio::task::yield_now().await;

    state.start_pause().expect("start");
    sleep(Duration::from_millis(1500)).await;
    assert!(state.get_celebrations().expect("flags").milestone);

    // The milestone display window is 3 seconds.
    sleep(Duration::from_secs(4)).await;
    assert!(!state.get_celebrations().expect("flags").milestone);
}

#[tokio::test(start_paused = true)]
async fn switching_modes_tears_down_and_rearms_the_tick_source() {
    let state = spawn_engine(1500, 300);
    tokio::task::yield_now().await;

    state.start_pause().expect("start");
    sleep(Duration::from_millis(2500)).await;
    assert_eq!(state.get_timer_state().expect("timer").seconds_left, 1498);

    let timer = state.switch_mode(Mode::Break).expect("switch");
    assert!(!timer.is_running);
    assert_eq!(timer.seconds_left, 300);

    // Paused after the switch: nothing ticks.
    sleep(Duration::from_secs(3)).await;
    assert_eq!(state.get_timer_state().expect("timer").seconds_left, 300);

    state.start_pause().expect("restart");
    sleep(Duration::from_millis(1500)).await;
    assert_eq!(state.get_timer_state().expect("timer").seconds_left, 299);
}

#[tokio::test(start_paused = true)]
async fn saving_settings_resizes_the_running_countdown() {
    let state = spawn_engine(1500, 300);
    tokio::task::yield_now().await;

    state.start_pause().expect("start");
    sleep(Duration::from_millis(2500)).await;

    let timer = state.save_settings(600, 120).expect("settings");
    assert_eq!(timer.seconds_left, 600);
    assert!(!timer.is_running);

    sleep(Duration::from_secs(3)).await;
    assert_eq!(state.get_timer_state().expect("timer").seconds_left, 600);
}
