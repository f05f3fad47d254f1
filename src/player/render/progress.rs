//! Progress bar rendering.
//!
//! Displays the playback position within the loaded track.

/// Format a duration in seconds to MM:SS format.
///
/// # Arguments
/// * `seconds` - Duration in seconds
///
/// # Returns
/// A string in MM:SS format
pub fn format_duration(seconds: f64) -> String {
    let total_secs = seconds as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Build the progress bar character array.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `position` - Current playback position
/// * `duration` - Total duration of the track
///
/// # Returns
/// A tuple of (bar_chars, filled_count) where filled_count is the number
/// of positions before the playhead.
pub fn build_progress_bar_chars(bar_width: usize, position: f64, duration: f64) -> (Vec<char>, usize) {
    let progress = if duration > 0.0 {
        (position / duration).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];
    for c in bar.iter_mut().take(filled) {
        *c = '━';
    }
    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Render the progress bar followed by ` MM:SS/MM:SS`.
///
/// # Arguments
/// * `bar_width` - Width of the bar part in characters
/// * `position` - Current playback position
/// * `duration` - Total duration of the track
/// * `color` - Emit ANSI colors
pub fn render_progress_bar(bar_width: usize, position: f64, duration: f64, color: bool) -> String {
    const GREEN: &str = "\x1b[32m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const RESET: &str = "\x1b[0m";

    let (bar, filled) = build_progress_bar_chars(bar_width, position, duration);
    let time_display = format!(" {}/{}", format_duration(position), format_duration(duration));

    let mut output = String::with_capacity(bar_width * 4 + time_display.len() + 16);
    if !color {
        output.extend(bar.iter());
        output.push_str(&time_display);
        return output;
    }

    output.push_str(GREEN);
    for (i, &c) in bar.iter().enumerate() {
        if i == filled {
            output.push_str(WHITE);
        } else if i == filled + 1 {
            output.push_str(DARK_GREY);
        }
        output.push(c);
    }
    output.push_str(RESET);
    output.push_str(&time_display);
    output
}
