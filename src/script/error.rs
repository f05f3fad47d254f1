//! Script parsing and replay errors.

use crate::player::TransitionError;

/// Errors that can occur while loading or replaying a transport script.
///
/// Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Line {line}: unknown command '{word}'")]
    UnknownCommand { line: usize, word: String },

    #[error("Line {line}: '{command}' needs a {argument} argument")]
    MissingArgument {
        line: usize,
        command: &'static str,
        argument: &'static str,
    },

    #[error("Line {line}: unexpected argument '{word}'")]
    UnexpectedArgument { line: usize, word: String },

    #[error("Line {line}: '{value}' is not a valid {expected}")]
    InvalidNumber {
        line: usize,
        value: String,
        expected: &'static str,
    },

    #[error("Line {line}: time {time} is earlier than the previous step ({previous})")]
    TimeWentBackwards { line: usize, time: f64, previous: f64 },

    #[error("Line {line}: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: TransitionError,
    },

    #[error("Failed to read script: {0}")]
    ReadError(#[from] std::io::Error),
}
