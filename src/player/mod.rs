//! Playback state for a single track.
//!
//! # Architecture
//!
//! - `state`: `PlaybackState` and the `Transport` actions that mutate it
//! - `error`: `TransitionError`, returned when a transition's precondition fails
//! - `clock`: wall-clock sources (`SystemClock`, `ManualClock`)
//! - `render/`: view layer (progress bar, status line)
//!
//! # Usage
//!
//! ```
//! use playstate::player::PlaybackState;
//!
//! let mut state = PlaybackState::new();
//! state.load_track(0, 120.0).unwrap();
//! state.play(0.0).unwrap();
//! assert_eq!(state.position(30.0), 30.0);
//! ```

pub mod clock;
pub mod error;
pub mod render;
pub mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Action, Precondition, TransitionError};
pub use state::{PlaybackState, Transport};
