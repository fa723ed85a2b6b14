use anyhow::Result;

use super::super::args::CheckCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_overlaps, print_success};
use super::CommandContext;
use crate::core::find_overlaps;

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let table = ctx.load_table()?;
    let overlaps = find_overlaps(&table);

    if overlaps.is_empty() {
        print_success(&format!(
            "No overlapping keys in {} entries",
            table.len()
        ));
        return Ok(ExitStatus::Success);
    }

    print_overlaps(&overlaps, table.len());
    Ok(ExitStatus::Failure)
}
