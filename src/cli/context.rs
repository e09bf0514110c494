//! CLI context for shared state and logging setup.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::ConfigManager;

/// CLI execution context containing shared dependencies and configuration.
pub struct CliContext {
    pub config_path: Option<PathBuf>,
    pub verbose: bool,
    pub config_manager: Arc<ConfigManager>,
}

impl CliContext {
    /// Create a new CLI context with the specified config path and verbosity.
    pub fn new(config_path: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let config_manager = Arc::new(ConfigManager::new(config_path.clone())?);

        Ok(Self { config_path, verbose, config_manager })
    }

    /// Initialize the logging subsystem based on verbosity and configuration.
    ///
    /// Returns the worker guard of the file writer when file logging is
    /// configured; the caller must keep it alive for the process lifetime.
    pub fn init_logging(&self) -> Result<Option<WorkerGuard>> {
        let log = &self.config_manager.config().log;
        let level = if self.verbose { "debug" } else { log.level.as_str() };

        let env_filter = tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(level.parse().unwrap_or_else(|_| tracing::Level::INFO.into()));

        if let Some(path_str) = &log.path {
            use tracing_subscriber::prelude::*;

            let log_path = PathBuf::from(path_str);
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).context("Failed to create log directory")?;
            }

            let file_appender = tracing_appender::rolling::daily(
                log_path.parent().unwrap_or_else(|| std::path::Path::new(".")),
                log_path
                    .file_name()
                    .unwrap_or_else(|| std::ffi::OsStr::new("forward-notifier.log")),
            );
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

            let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .with(file_layer)
                .init();

            Ok(Some(guard))
        } else {
            tracing_subscriber::fmt().with_env_filter(env_filter).init();

            Ok(None)
        }
    }
}
