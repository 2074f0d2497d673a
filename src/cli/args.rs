//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `list`: Scan step definition files and print the catalog
//! - `init`: Initialize stepcat configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::core::StepType;

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
            Some(Command::List(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by scanning commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (where the config file is searched from)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Directory or glob to scan (overrides config file, repeatable)
    #[arg(long)]
    pub include: Vec<String>,

    /// Extra ignore pattern or path (added to config file, repeatable)
    #[arg(long)]
    pub ignore: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
pub struct ListArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print each step's comments and body under it
    #[arg(long)]
    pub show_code: bool,

    /// Exit with status 1 when low-confidence extractions are found
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only list these step types (default: all)
    #[arg(value_enum)]
    pub types: Vec<StepType>,
    #[command(flatten)]
    pub args: ListArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan step definition files and list Given/When/Then steps and hooks
    List(ListCommand),
    /// Initialize a new .stepcatrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
