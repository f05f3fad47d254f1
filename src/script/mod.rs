//! Transport scripts: timed play/pause/seek commands replayed against a
//! `PlaybackState` on a manual clock.

mod error;
mod parse;
mod replay;

pub use error::ScriptError;
pub use parse::{Command, Script, Step};
pub use replay::{replay, ReplayOptions, Replayer, StepOutcome, StepReport};

/// Load a two-minute track, play, pause, seek, resume.
pub const DEMO_SCRIPT: &str = "\
# time  command  args
0   load   0 120
0   play
30  query
30  pause
30  query
30  seek   10
30  query
40  play
50  query
";
