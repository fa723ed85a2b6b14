use anyhow::{Context, Result};

use super::super::args::ExportCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_success;
use super::CommandContext;
use crate::core::{export_grouped, pseudo_localize};
use crate::table_file::write_json;

pub fn export(cmd: ExportCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let table = ctx.load_table()?;
    let tree = if cmd.pseudo {
        export_grouped(&pseudo_localize(&table), true)
    } else {
        export_grouped(&table, cmd.values)
    };

    match &cmd.output {
        Some(path) => {
            write_json(path, &tree)?;
            print_success(&format!(
                "Exported {} entries to {}",
                table.len(),
                path.display()
            ));
        }
        None => {
            let content =
                serde_json::to_string_pretty(&tree).context("Failed to serialize JSON")?;
            println!("{}", content);
        }
    }

    Ok(ExitStatus::Success)
}
