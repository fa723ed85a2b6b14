//! Command-line interface layer.
//!
//! Separate from the key generation core so lutkey can be embedded as a
//! library by extraction tools.

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
mod logging;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;
pub use logging::init_logging;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}
