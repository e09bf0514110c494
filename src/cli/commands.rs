//! Command definitions and structures for the CLI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure.
#[derive(Parser)]
#[command(name = "forward-notifier")]
#[command(about = "Receives forwarded notifications over HTTP and shows them as desktop toasts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the receiver daemon (default when no subcommand)
    Serve {
        /// Port to listen on (overrides the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show a toast locally without going through HTTP
    Test {
        /// Message to display
        message: String,

        /// Optional title
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Configure settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration
    Show,
}
