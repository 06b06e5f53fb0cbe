use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{check::check, init::init, list::list, resolve::resolve},
    exit_status::ExitStatus,
};

/// Dispatch a parsed command to its handler.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::List(cmd)) => list(cmd),
        Some(Command::Resolve(cmd)) => resolve(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
