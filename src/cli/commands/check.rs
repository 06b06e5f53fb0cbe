use anyhow::Result;

use super::super::{
    args::CheckCommand,
    exit_status::ExitStatus,
    report::{print_success, report},
};
use crate::{
    core::{ProjectContext, collect_leaves},
    rules::check_references,
};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let issues = check_references(&ctx.token_file);

    if issues.is_empty() {
        let token_count = collect_leaves(ctx.token_file.document.root(), "").len();
        print_success(token_count);
        return Ok(ExitStatus::Success);
    }

    report(&issues);
    Ok(ExitStatus::Failure)
}
