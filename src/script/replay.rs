//! Replay a transport script against a fresh `PlaybackState`.

use serde::Serialize;

use super::error::ScriptError;
use super::parse::{Command, Script, Step};
use crate::player::{Clock, ManualClock, PlaybackState, TransitionError};

/// What happened when a step was replayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    /// The transition was applied
    Applied,
    /// The transition's precondition failed; state unchanged
    Rejected { error: TransitionError },
    /// A position query
    Position { position: f64 },
}

impl StepOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Report for one replayed step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub line: usize,
    pub time: f64,
    pub command: String,
    #[serde(flatten)]
    pub outcome: StepOutcome,
    /// State after the step
    pub state: PlaybackState,
}

/// Options controlling replay.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayOptions {
    /// Stop at the first rejected transition
    pub strict: bool,
}

/// Replays scripts step by step on a manual clock.
#[derive(Debug, Default)]
pub struct Replayer {
    clock: ManualClock,
    state: PlaybackState,
    options: ReplayOptions,
}

impl Replayer {
    pub fn new(options: ReplayOptions) -> Self {
        Self {
            clock: ManualClock::default(),
            state: PlaybackState::new(),
            options,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    /// Replay a single step.
    pub fn step(&mut self, step: &Step) -> Result<StepReport, ScriptError> {
        self.clock.set(step.time);
        let now = self.clock.now();

        let outcome = match step.command {
            Command::Query => StepOutcome::Position {
                position: self.state.tick(now),
            },
            Command::Transport(transport) => match self.state.apply(transport, now) {
                Ok(()) => StepOutcome::Applied,
                Err(error) if self.options.strict => {
                    return Err(ScriptError::Rejected {
                        line: step.line,
                        source: error,
                    })
                }
                Err(error) => StepOutcome::Rejected { error },
            },
        };

        Ok(StepReport {
            line: step.line,
            time: step.time,
            command: step.command.to_string(),
            outcome,
            state: self.state.clone(),
        })
    }

    /// Replay every step of `script`.
    pub fn run(&mut self, script: &Script) -> Result<Vec<StepReport>, ScriptError> {
        tracing::info!(steps = script.steps().len(), strict = self.options.strict, "replaying script");
        script.steps().iter().map(|step| self.step(step)).collect()
    }
}

/// Replay `script` on a fresh state.
pub fn replay(script: &Script, options: ReplayOptions) -> Result<Vec<StepReport>, ScriptError> {
    Replayer::new(options).run(script)
}
