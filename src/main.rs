//! playstate CLI entry point

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use playstate::cli::{Cli, Commands, ConfigCommands};
use playstate::{logging, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging must not depend on a valid config; fall back to defaults
    let log_config = Config::load().map(|c| c.log).unwrap_or_default();
    logging::init(&log_config);

    match cli.command {
        Commands::Run { file, output } => commands::run::handle_run(&file, &output),
        Commands::Demo { output } => commands::run::handle_demo(&output),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init => commands::config::handle_init(),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "playstate", &mut std::io::stdout());
            Ok(())
        }
    }
}
