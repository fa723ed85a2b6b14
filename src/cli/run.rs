use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{batch::batch, check::check, export::export, init::init, key::key},
    exit_status::ExitStatus,
};

/// Dispatch the parsed arguments to their command handler.
///
/// # Returns
/// - `Ok(ExitStatus)` describing how the command finished
/// - `Err` if the command fails (e.g., invalid config, unreadable table, key limit hit)
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Init) => init(),
        Some(Command::Key(cmd)) => key(cmd),
        Some(Command::Batch(cmd)) => batch(cmd),
        Some(Command::Export(cmd)) => export(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
