//! playstate - playback state for a single audio track
//!
//! Tracks whether a track is loaded and playing, and derives the current
//! playback position from a start-time anchor, an optional pause anchor,
//! and a seek offset.

pub mod cli;
pub mod config;
pub mod logging;
pub mod player;
pub mod script;

pub use config::Config;
pub use player::{PlaybackState, Transport, TransitionError};
