//! Line-based transport script parser.
//!
//! ```text
//! # time  command  args
//! 0       load     0 120
//! 0       play
//! 30      query
//! 30      pause
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::error::ScriptError;
use crate::player::Transport;

/// One script command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Apply a transition.
    Transport(Transport),
    /// Report the current position.
    Query,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str("query"),
            Self::Transport(Transport::Play) => f.write_str("play"),
            Self::Transport(Transport::Pause) => f.write_str("pause"),
            Self::Transport(Transport::Unload) => f.write_str("unload"),
            Self::Transport(Transport::Seek { target }) => write!(f, "seek {}", target),
            Self::Transport(Transport::LoadTrack { index, duration }) => {
                write!(f, "load {} {}", index, duration)
            }
        }
    }
}

/// A command scheduled at a wall-clock time.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// 1-based source line
    pub line: usize,
    /// Wall-clock second the command happens at
    pub time: f64,
    pub command: Command,
}

/// A parsed transport script with non-decreasing step times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    /// Parse script text.
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        let mut steps = Vec::new();
        let mut previous: Option<f64> = None;

        for (idx, raw) in source.lines().enumerate() {
            let line = idx + 1;
            let content = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            };
            let mut words = content.split_whitespace();
            let Some(time_word) = words.next() else {
                continue;
            };

            let time: f64 = parse_number(line, time_word, "time")?;
            if !time.is_finite() || time < 0.0 {
                return Err(ScriptError::InvalidNumber {
                    line,
                    value: time_word.to_string(),
                    expected: "time",
                });
            }
            if let Some(previous) = previous {
                if time < previous {
                    return Err(ScriptError::TimeWentBackwards {
                        line,
                        time,
                        previous,
                    });
                }
            }
            previous = Some(time);

            let command = parse_command(line, &mut words)?;
            if let Some(extra) = words.next() {
                return Err(ScriptError::UnexpectedArgument {
                    line,
                    word: extra.to_string(),
                });
            }

            steps.push(Step {
                line,
                time,
                command,
            });
        }

        Ok(Self { steps })
    }

    /// Read and parse a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = std::fs::read_to_string(path)?;
        Self::parse(&source)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_command<'a>(
    line: usize,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<Command, ScriptError> {
    let Some(word) = words.next() else {
        return Err(ScriptError::MissingArgument {
            line,
            command: "step",
            argument: "command",
        });
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "play" => Command::Transport(Transport::Play),
        "pause" => Command::Transport(Transport::Pause),
        "unload" => Command::Transport(Transport::Unload),
        "query" => Command::Query,
        "seek" => {
            let target = require(line, words, "seek", "target")?;
            Command::Transport(Transport::Seek {
                target: parse_number(line, target, "seek target")?,
            })
        }
        "load" => {
            let index = require(line, words, "load", "track index")?;
            let duration = require(line, words, "load", "duration")?;
            Command::Transport(Transport::LoadTrack {
                index: parse_number(line, index, "track index")?,
                duration: parse_number(line, duration, "duration")?,
            })
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                word: word.to_string(),
            })
        }
    };

    Ok(command)
}

fn require<'a>(
    line: usize,
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, ScriptError> {
    words.next().ok_or(ScriptError::MissingArgument {
        line,
        command,
        argument,
    })
}

fn parse_number<T: FromStr>(line: usize, value: &str, expected: &'static str) -> Result<T, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidNumber {
        line,
        value: value.to_string(),
        expected,
    })
}
