use anyhow::{Context, Result};
use glob::Pattern;
use indexmap::IndexMap;

use super::super::{args::ListCommand, exit_status::ExitStatus, report::print_listing};
use crate::core::{CatalogEntry, Category, ProjectContext};

pub fn list(cmd: ListCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let mut buckets = ctx.categorized_tokens();

    if let Some(ref filter) = cmd.filter {
        let pattern = Pattern::new(filter)
            .with_context(|| format!("Invalid glob pattern in '--filter': \"{}\"", filter))?;
        buckets.retain(|entry| pattern.matches(&entry.path));
    }

    let categories = if cmd.category.is_empty() {
        Category::ALL.to_vec()
    } else {
        cmd.category.clone()
    };

    if cmd.json {
        let selected: IndexMap<&str, &[CatalogEntry]> = categories
            .iter()
            .map(|&category| (category.key(), buckets.get(category)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&selected)?);
    } else {
        print_listing(&buckets, &categories);
    }

    Ok(ExitStatus::Success)
}
