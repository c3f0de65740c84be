//! CLI command definitions and dispatch.
//!
//! Every command seeds a fresh in-memory session, applies the requested
//! actions, and prints the outcome. Nothing persists between invocations;
//! the session is the process.

pub mod events;
pub mod files;
pub mod requests;

use clap::{Parser, Subcommand};

use opshub_core::error::AppError;

use crate::output::OutputFormat;

/// OpsHub — Emergency Operations Dashboard
#[derive(Debug, Parser)]
#[command(name = "opshub", version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Significant events board
    Events(events::EventArgs),
    /// Shared file library
    Files(files::FileArgs),
    /// Resource request log
    Requests(requests::RequestArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Events(args) => events::execute(args, self.format),
            Commands::Files(args) => files::execute(args, self.format),
            Commands::Requests(args) => requests::execute(args, self.format),
        }
    }
}

/// Helper: map a prompt failure into an application error
pub fn prompt_error(err: dialoguer::Error) -> AppError {
    AppError::internal(format!("Prompt failed: {err}"))
}
