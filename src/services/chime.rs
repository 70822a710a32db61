//! Audible cue played when a countdown finishes and the mode flips

use std::io::Write;

use tokio::process::Command;
use tracing::{debug, info};

/// Audio asset played on every mode transition
pub const CHIME_ASSET: &str = "meow.mp3";

/// Audio players tried in order; the first one that exits cleanly wins
const PLAYERS: &[&str] = &["paplay", "aplay", "afplay"];

/// Play the transition chime through the first available system player.
/// Falls back to the terminal bell when no player can handle the asset.
pub async fn play_transition_chime() -> Result<(), String> {
    for player in PLAYERS {
        debug!("Trying audio player: {}", player);

        let output = match Command::new(player).arg(CHIME_ASSET).output().await {
            Ok(output) => output,
            Err(_) => continue, // player not installed
        };

        if output.status.success() {
            info!("Transition chime played via {}", player);
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!("{} failed to play chime: {}", player, stderr.trim());
    }

    // Terminal bell as a last resort
    print!("\x07");
    std::io::stdout()
        .flush()
        .map_err(|e| format!("Failed to ring terminal bell: {}", e))?;

    info!("No audio player available, rang terminal bell instead");
    Ok(())
}

/// Check whether any supported audio player is installed
pub async fn check_audio_player_available() -> Result<(), String> {
    for player in PLAYERS {
        if Command::new(player).arg("--help").output().await.is_ok() {
            info!("Audio player available: {}", player);
            return Ok(());
        }
    }

    Err(format!(
        "No audio player found (tried {}); transition cues will fall back to the terminal bell",
        PLAYERS.join(", ")
    ))
}
