//! Player state management
//!
//! Contains the central `PlaybackState` struct that holds the transport
//! state of a single track, and the `Transport` actions that mutate it.

use serde::Serialize;

use super::error::{Action, Precondition, TransitionError};

/// A user-initiated transport action.
///
/// Passed to [`PlaybackState::apply`] by input handlers and script replay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Transport {
    Play,
    Pause,
    Seek { target: f64 },
    LoadTrack { index: usize, duration: f64 },
    Unload,
}

impl Transport {
    /// The action kind, without arguments.
    pub fn action(&self) -> Action {
        match self {
            Self::Play => Action::Play,
            Self::Pause => Action::Pause,
            Self::Seek { .. } => Action::Seek,
            Self::LoadTrack { .. } => Action::LoadTrack,
            Self::Unload => Action::Unload,
        }
    }
}

/// Playback state of the track shown by a view.
///
/// Times are in seconds. `start_time` and `pause_time` are wall-clock
/// readings from whatever [`Clock`](super::clock::Clock) the owner uses;
/// `offset`, `play_time` and `track_duration` are positions in the track.
///
/// Fields are only changed through the five transitions, so the following
/// always hold:
/// - `playing` implies `pause_time` is `None`
/// - `!track_loaded` implies `!playing`
/// - `0 <= offset <= track_duration` while a track is loaded
/// - `interactions` never decreases
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlaybackState {
    playing: bool,
    track_loaded: bool,
    current_track: usize,
    play_time: f64,
    start_time: f64,
    pause_time: Option<f64>,
    offset: f64,
    track_duration: f64,
    interactions: u64,
}

impl PlaybackState {
    /// Create an empty state: nothing loaded, nothing playing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn track_loaded(&self) -> bool {
        self.track_loaded
    }

    pub fn current_track(&self) -> usize {
        self.current_track
    }

    /// Position stored by the last [`tick`](Self::tick).
    pub fn play_time(&self) -> f64 {
        self.play_time
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn pause_time(&self) -> Option<f64> {
        self.pause_time
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn track_duration(&self) -> f64 {
        self.track_duration
    }

    /// Number of successfully applied transitions.
    pub fn interactions(&self) -> u64 {
        self.interactions
    }

    /// Current playback position at wall-clock time `now`.
    ///
    /// Not clamped; see [`clamped_position`](Self::clamped_position).
    pub fn position(&self, now: f64) -> f64 {
        if self.playing {
            self.offset + (now - self.start_time)
        } else if let Some(paused_at) = self.pause_time {
            self.offset + (paused_at - self.start_time)
        } else {
            self.offset
        }
    }

    /// Current position clamped into `[0, track_duration]`.
    pub fn clamped_position(&self, now: f64) -> f64 {
        self.position(now).clamp(0.0, self.track_duration.max(0.0))
    }

    /// True once the position has reached the end of a loaded track.
    pub fn is_finished(&self, now: f64) -> bool {
        self.track_loaded && self.position(now) >= self.track_duration
    }

    /// Record the current position in `play_time`.
    ///
    /// Timer callbacks call this; it is not a transition and does not
    /// count as an interaction.
    pub fn tick(&mut self, now: f64) -> f64 {
        self.play_time = self.position(now);
        self.play_time
    }

    /// Start or resume playback at `now`.
    ///
    /// The position reached so far becomes the new offset, so resuming
    /// after a pause continues where playback stopped.
    pub fn play(&mut self, now: f64) -> Result<(), TransitionError> {
        self.require_loaded(Action::Play)?;

        self.offset = self.clamped_position(now);
        self.playing = true;
        self.start_time = now;
        self.pause_time = None;
        self.commit(Action::Play);
        Ok(())
    }

    /// Pause playback at `now`, freezing the position.
    pub fn pause(&mut self, now: f64) -> Result<(), TransitionError> {
        if !self.playing {
            return Err(self.reject(Action::Pause, Precondition::NotPlaying));
        }

        self.playing = false;
        self.pause_time = Some(now);
        self.commit(Action::Pause);
        Ok(())
    }

    /// Move the position to `target` seconds into the track.
    pub fn seek(&mut self, target: f64, now: f64) -> Result<(), TransitionError> {
        self.require_loaded(Action::Seek)?;
        if !target.is_finite() || target < 0.0 || target > self.track_duration {
            return Err(self.reject(
                Action::Seek,
                Precondition::SeekOutOfRange {
                    target,
                    duration: self.track_duration,
                },
            ));
        }

        self.offset = target;
        if self.playing {
            self.start_time = now;
        } else if let Some(paused_at) = self.pause_time {
            // Frozen position must read back as the target
            self.start_time = paused_at;
        }
        self.commit(Action::Seek);
        Ok(())
    }

    /// Mark track `index` as loaded and ready, positioned at its start.
    ///
    /// Called by the audio collaborator once the track's data is decodable.
    pub fn load_track(&mut self, index: usize, duration: f64) -> Result<(), TransitionError> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(self.reject(
                Action::LoadTrack,
                Precondition::InvalidDuration { duration },
            ));
        }

        self.current_track = index;
        self.track_duration = duration;
        self.track_loaded = true;
        self.offset = 0.0;
        self.play_time = 0.0;
        self.playing = false;
        self.pause_time = None;
        self.commit(Action::LoadTrack);
        Ok(())
    }

    /// Drop the loaded track and stop playback.
    pub fn unload(&mut self) -> Result<(), TransitionError> {
        self.track_loaded = false;
        self.playing = false;
        self.pause_time = None;
        self.commit(Action::Unload);
        Ok(())
    }

    /// Apply a transport action at wall-clock time `now`.
    pub fn apply(&mut self, transport: Transport, now: f64) -> Result<(), TransitionError> {
        match transport {
            Transport::Play => self.play(now),
            Transport::Pause => self.pause(now),
            Transport::Seek { target } => self.seek(target, now),
            Transport::LoadTrack { index, duration } => self.load_track(index, duration),
            Transport::Unload => self.unload(),
        }
    }

    /// Pause when playing, play otherwise.
    pub fn toggle(&mut self, now: f64) -> Result<(), TransitionError> {
        if self.playing {
            self.pause(now)
        } else {
            self.play(now)
        }
    }

    fn require_loaded(&self, action: Action) -> Result<(), TransitionError> {
        if self.track_loaded {
            Ok(())
        } else {
            Err(self.reject(action, Precondition::TrackNotLoaded))
        }
    }

    fn reject(&self, action: Action, reason: Precondition) -> TransitionError {
        tracing::warn!(%action, %reason, interactions = self.interactions, "transition rejected");
        TransitionError::invalid(action, reason)
    }

    fn commit(&mut self, action: Action) {
        self.interactions = self.interactions.saturating_add(1);
        tracing::debug!(
            %action,
            track = self.current_track,
            playing = self.playing,
            offset = self.offset,
            interactions = self.interactions,
            "transition applied"
        );
    }
}
