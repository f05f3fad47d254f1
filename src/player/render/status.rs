//! Status line rendering.
//!
//! One line summarizing transport state: glyph, track, progress.

use crate::player::state::PlaybackState;

use super::progress::render_progress_bar;

/// Glyph for the transport state at wall-clock time `now`.
pub fn transport_glyph(state: &PlaybackState, now: f64) -> char {
    if !state.track_loaded() {
        '■'
    } else if state.is_finished(now) {
        '⏹'
    } else if state.playing() {
        '▶'
    } else {
        '⏸'
    }
}

/// Render the status line for `state` at wall-clock time `now`.
///
/// The position is clamped into the track; an unloaded state renders
/// without a progress bar.
///
/// # Arguments
/// * `state` - Playback state to describe
/// * `now` - Wall-clock time of the query
/// * `bar_width` - Width of the progress bar in characters
/// * `color` - Emit ANSI colors
pub fn status_line(state: &PlaybackState, now: f64, bar_width: usize, color: bool) -> String {
    let glyph = transport_glyph(state, now);
    if !state.track_loaded() {
        return format!("{} no track", glyph);
    }

    let position = state.clamped_position(now);
    format!(
        "{} track {} {}",
        glyph,
        state.current_track() + 1,
        render_progress_bar(bar_width, position, state.track_duration(), color)
    )
}
