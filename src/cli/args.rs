//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `list`: Show namespace tokens grouped by category
//! - `resolve`: Resolve a single dotted token path
//! - `check`: Report unresolved and circular references
//! - `init`: Initialize tokenctl configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::Category;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::List(cmd)) => cmd.common.verbose,
            Some(Command::Resolve(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Token file path relative to the project root (overrides config file)
    #[arg(long)]
    pub tokens_file: Option<PathBuf>,

    /// Namespace group to list; empty for the whole document (overrides config file)
    #[arg(long)]
    pub namespace: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for CommonArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            tokens_file: None,
            namespace: None,
            verbose: false,
        }
    }
}

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only show these categories (default: all)
    /// Can be specified multiple times: --category colors --category spacing
    #[arg(long, value_enum)]
    pub category: Vec<Category>,

    /// Only show tokens whose path matches this glob (e.g. "ld.color.*")
    #[arg(long)]
    pub filter: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Dotted token path, e.g. ld.color.brand.500
    pub token_path: String,

    /// Print JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List tokens grouped by category (colors, spacing, borderRadius, typography, effects)
    List(ListCommand),
    /// Resolve a token path to its final value, following references
    Resolve(ResolveCommand),
    /// Check for unresolved and circular token references
    Check(CheckCommand),
    /// Initialize a new .tokenrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
