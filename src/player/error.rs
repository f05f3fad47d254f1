//! Transition errors.

use std::fmt;

/// A transport action, used to label rejected transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Play,
    Pause,
    Seek,
    LoadTrack,
    Unload,
}

impl Action {
    /// Action name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Seek => "seek",
            Self::LoadTrack => "load_track",
            Self::Unload => "unload",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The precondition a rejected transition violated.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Precondition {
    /// No track has finished loading.
    TrackNotLoaded,
    /// Pause requested while stopped.
    NotPlaying,
    /// Seek target outside `[0, duration]` or not finite.
    SeekOutOfRange { target: f64, duration: f64 },
    /// Track duration negative or not finite.
    InvalidDuration { duration: f64 },
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrackNotLoaded => f.write_str("no track is loaded"),
            Self::NotPlaying => f.write_str("playback is not running"),
            Self::SeekOutOfRange { target, duration } => {
                write!(f, "seek target {} is outside 0..={}", target, duration)
            }
            Self::InvalidDuration { duration } => {
                write!(f, "track duration {} is not a non-negative number", duration)
            }
        }
    }
}

/// Errors returned by playback state transitions.
///
/// A rejected transition never modifies the state.
#[derive(Debug, Clone, PartialEq, thiserror::Error, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionError {
    #[error("Cannot {action}: {reason}")]
    InvalidStateTransition {
        action: Action,
        reason: Precondition,
    },
}

impl TransitionError {
    pub(crate) fn invalid(action: Action, reason: Precondition) -> Self {
        Self::InvalidStateTransition { action, reason }
    }

    /// The action that was rejected.
    pub fn action(&self) -> Action {
        match self {
            Self::InvalidStateTransition { action, .. } => *action,
        }
    }

    /// The precondition that was violated.
    pub fn reason(&self) -> Precondition {
        match self {
            Self::InvalidStateTransition { reason, .. } => *reason,
        }
    }
}
