use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use colima_bar::cli::{execute, Cli, Commands};
use colima_bar::config::{self, Config};
use colima_bar::controller::MenuController;
use colima_bar::logging;
use colima_bar::runner::ShellRunner;

fn main() -> ExitCode {
    let cli = Cli::parse();
    // Keep the guard alive so the JSONL file is flushed on exit
    let _guard = logging::init();

    let config = match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };

    let result = match cli.command.as_ref().unwrap_or(&Commands::Tray) {
        Commands::Tray => run_tray(config).map(|_| true),
        command => {
            let runner = ShellRunner::new(config.shell.clone());
            let mut controller = MenuController::new(runner, config);
            execute(command, &mut controller, &mut io::stdout().lock())
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = ?e, "colima-bar failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_os = "macos")]
fn run_tray(config: Config) -> Result<()> {
    colima_bar::app::run(config)
}

#[cfg(not(target_os = "macos"))]
fn run_tray(_config: Config) -> Result<()> {
    anyhow::bail!("the menu bar app is only available on macOS; use `list`, `current` or `switch`")
}
