//! External side-effect module
//!
//! This module contains the audio cue played on mode transitions.

pub mod chime;

// Re-export main functions
pub use chime::*;
