use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::super::{args::ResolveCommand, exit_status::ExitStatus, report::print_not_found};
use crate::core::{ProjectContext, TokenValue};

#[derive(Debug, Serialize)]
struct ResolvedToken<'a> {
    path: &'a str,
    value: Option<TokenValue>,
}

pub fn resolve(cmd: ResolveCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let path = cmd.token_path.as_str();

    let value = match ctx.resolver().resolve_path(path) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("{} {}", "error:".bold().red(), err);
            return Ok(ExitStatus::Failure);
        }
    };
    let found = value.is_some();

    if cmd.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ResolvedToken { path, value })?
        );
    } else {
        match value {
            Some(value) => println!("{}", value),
            None => print_not_found(path),
        }
    }

    Ok(if found {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    })
}
