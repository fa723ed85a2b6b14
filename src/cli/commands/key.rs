use anyhow::Result;

use super::super::args::KeyCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_dry_run;
use super::CommandContext;
use crate::table_file::save_table;

pub fn key(cmd: KeyCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let mut generator = ctx.generator()?;
    let before = generator.get_table().len();

    let labels = ctx.context_labels(cmd.file.as_deref(), &cmd.path);
    let key = generator.derive_and_resolve(&cmd.text, &labels, &cmd.suffix)?;
    println!("{}", key);

    let new_entries = generator.get_table().len() - before;
    if new_entries > 0 {
        if cmd.apply {
            save_table(&ctx.table_path, generator.get_table())?;
        } else {
            print_dry_run(new_entries);
        }
    }

    Ok(ExitStatus::Success)
}
