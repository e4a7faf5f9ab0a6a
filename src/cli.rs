//! Command-line interface
//!
//! Without a subcommand the binary runs the menu bar app. The other
//! subcommands drive the same [`MenuController`] from a terminal.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::controller::MenuController;
use crate::runner::CommandRunner;

#[derive(Debug, Parser)]
#[command(name = "colima-bar", version, about = "Switch colima instances from the menu bar")]
pub struct Cli {
    /// Config file (default: ~/.colima-bar/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run the menu bar status item (default)
    Tray,
    /// Print instances as `name<TAB>arch<TAB>status`
    List,
    /// Print the instance behind the active docker context
    Current,
    /// Stop every other instance, start NAME and switch the docker context
    Switch {
        /// Instance name as shown by `list`
        name: String,
    },
}

/// Run a terminal subcommand. Returns `false` when the command should exit
/// with a failure status.
pub fn execute<R: CommandRunner>(
    command: &Commands,
    controller: &mut MenuController<R>,
    out: &mut impl Write,
) -> Result<bool> {
    match command {
        Commands::Tray => Ok(true),
        Commands::List => {
            controller.refresh();
            for instance in controller.instances() {
                writeln!(out, "{}\t{}\t{}", instance.name, instance.arch, instance.status)?;
            }
            Ok(true)
        }
        Commands::Current => match controller.start() {
            Some(instance) => {
                writeln!(out, "{}\t{}", instance.name, instance.arch)?;
                Ok(true)
            }
            None => Ok(false),
        },
        Commands::Switch { name } => {
            controller.refresh();
            match controller.select(name, |_| {}) {
                Some(_) => {
                    writeln!(out, "{}", controller.title())?;
                    Ok(true)
                }
                None => {
                    writeln!(out, "unknown instance: {}", name)?;
                    Ok(false)
                }
            }
        }
    }
}
