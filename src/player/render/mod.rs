//! Rendering components for the view layer.
//!
//! Turns playback state into text: a progress bar and a status line.

mod progress;
mod status;

pub use progress::{build_progress_bar_chars, format_duration, render_progress_bar};
pub use status::{status_line, transport_glyph};
