//! `run` and `demo` subcommand handlers

use std::path::Path;

use anyhow::{Context, Result};

use playstate::cli::OutputArgs;
use playstate::player::render::status_line;
use playstate::script::{ReplayOptions, Replayer, Script, StepOutcome, StepReport, DEMO_SCRIPT};
use playstate::Config;

/// Replay a script file.
#[cfg(not(tarpaulin_include))]
pub fn handle_run(file: &Path, output: &OutputArgs) -> Result<()> {
    let script = Script::load(file).with_context(|| format!("Failed to load {}", file.display()))?;
    replay_and_print(&script, output)
}

/// Replay the built-in scenario.
#[cfg(not(tarpaulin_include))]
pub fn handle_demo(output: &OutputArgs) -> Result<()> {
    let script = Script::parse(DEMO_SCRIPT)?;
    replay_and_print(&script, output)
}

fn replay_and_print(script: &Script, output: &OutputArgs) -> Result<()> {
    let config = Config::load()?;
    let options = ReplayOptions {
        strict: output.strict || config.player.strict,
    };
    let width = output.width.unwrap_or(config.player.progress_width) as usize;
    let color = config.player.color && !output.no_color && std::env::var_os("NO_COLOR").is_none();

    let mut replayer = Replayer::new(options);

    if output.json {
        let reports = replayer.run(script)?;
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for step in script.steps() {
        let report = replayer.step(step)?;
        println!("{}", format_report(&report, width, color));
    }
    Ok(())
}

/// One human-readable line per replayed step.
pub fn format_report(report: &StepReport, width: usize, color: bool) -> String {
    let detail = match &report.outcome {
        StepOutcome::Applied => "ok".to_string(),
        StepOutcome::Rejected { error } => format!("rejected: {}", error),
        StepOutcome::Position { .. } => status_line(&report.state, report.time, width, color),
    };
    format!("{:>8.3}  {:<14} {}", report.time, report.command, detail)
}
