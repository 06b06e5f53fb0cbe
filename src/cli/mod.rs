//! Command-line interface layer.
//!
//! ## Module Structure
//!
//! - `args`: clap argument definitions
//! - `commands`: One handler per subcommand
//! - `exit_status`: Process exit codes
//! - `report`: Cargo-style issue output and token listings

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    crate::logging::init(args.verbose());

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    Ok(run::run(args)?.into())
}
