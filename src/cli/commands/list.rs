use anyhow::{Ok, Result};

use super::{CommandResult, CommandSummary, ListSummary};
use crate::cli::args::ListCommand;
use crate::core::{ScanContext, StepType};

pub fn list(cmd: ListCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = ScanContext::new(&args.common)?;

    let types = if cmd.types.is_empty() {
        StepType::ALL.to_vec()
    } else {
        cmd.types.clone()
    };

    let catalog = ctx.catalog();
    let steps = catalog
        .steps
        .iter()
        .filter(|s| types.contains(&s.step_type))
        .cloned()
        .collect();

    Ok(CommandResult {
        summary: CommandSummary::List(ListSummary {
            steps,
            stats: catalog.stats.clone(),
            format: args.format,
            show_code: args.show_code,
        }),
        issues: catalog.issues.clone(),
        strict: args.strict,
    })
}
