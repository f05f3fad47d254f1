//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can generate man pages from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Drive a single-track playback state from transport scripts.
#[derive(Debug, Parser)]
#[command(name = "playstate", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replay a transport script and print the derived positions
    Run {
        /// Script file (one `<time> <command> [args]` per line)
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Replay the built-in play/pause/seek scenario
    Demo {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Output options shared by `run` and `demo`.
#[derive(Debug, Clone, clap::Args)]
pub struct OutputArgs {
    /// Print step reports as JSON
    #[arg(long)]
    pub json: bool,

    /// Stop at the first rejected transition (exit code 1)
    #[arg(long)]
    pub strict: bool,

    /// Progress bar width (overrides config)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16))]
    pub width: Option<u16>,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write the default configuration if no file exists
    Init,
}
