//! CLI module providing command-line interface functionality.
//!
//! Handles argument parsing and routing to the appropriate handlers.

pub mod commands;
pub mod context;
pub mod handlers;

use anyhow::Result;
use clap::Parser;

pub use commands::{Cli, Commands, ConfigAction};
pub use context::CliContext;
pub use handlers::CommandHandler;

/// Main CLI application.
pub struct CliApp;

impl CliApp {
    /// Parse command line arguments and execute the requested command.
    pub async fn run() -> Result<()> {
        let cli = Cli::parse();

        let context = CliContext::new(cli.config.clone(), cli.verbose)?;

        // Keep the file-writer guard alive until the command finishes
        let _log_guard = context.init_logging()?;

        let handler = CommandHandler::new(context);

        // Serving is the default mode when called without a subcommand
        let command = cli.command.unwrap_or(Commands::Serve { port: None });

        handler.handle_command(command).await
    }
}
