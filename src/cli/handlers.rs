//! Command handlers.
//!
//! Each handler wires configuration into the runtime components and
//! executes one CLI command to completion.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use crate::config::ConfigManager;
use crate::connectivity::ConnectivityGate;
use crate::dispatch::Dispatcher;
use crate::notify::create_notifier;
use crate::{platform, server};

use super::commands::{Commands, ConfigAction};
use super::context::CliContext;

/// Routes parsed commands to their handlers.
pub struct CommandHandler {
    context: CliContext,
}

impl CommandHandler {
    pub fn new(context: CliContext) -> Self {
        Self { context }
    }

    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Serve { port } => self.handle_serve(port).await,
            Commands::Test { message, title } => self.handle_test(title, message).await,
            Commands::Init { force } => self.handle_init(force),
            Commands::Config { action } => self.handle_config(action),
        }
    }

    /// Run the receiver: bind the listener, run the connectivity gate, then
    /// serve until interrupted. The listener is bound before the gate so no
    /// request is accepted while the gate retries.
    async fn handle_serve(&self, port_override: Option<u16>) -> Result<()> {
        let config = self.context.config_manager.config();

        platform::register_app_identity();

        let dispatcher = Arc::new(Dispatcher::new(create_notifier(), &config.device));

        let port = port_override.unwrap_or(config.server.port);
        let listener = TcpListener::bind(("0.0.0.0", port))
            .await
            .with_context(|| format!("Failed to bind port {port}"))?;

        let gate = ConnectivityGate::from_config(&config.connectivity, dispatcher.clone())?;
        gate.ensure_connectivity().await;

        server::run(listener, dispatcher).await?;
        Ok(())
    }

    /// Dispatch one toast through the real pipeline, bypassing HTTP.
    async fn handle_test(&self, title: Option<String>, message: String) -> Result<()> {
        let config = self.context.config_manager.config();
        let dispatcher = Dispatcher::new(create_notifier(), &config.device);

        let title = title.unwrap_or_else(|| "Forward Notifier".to_string());
        dispatcher.dispatch(&title, &message).await;

        println!("Toast dispatched (via {}).", dispatcher.attribution());
        Ok(())
    }

    fn handle_init(&self, force: bool) -> Result<()> {
        let manager = ConfigManager::init(self.context.config_path.clone(), force)?;
        println!("Configuration written to {}", manager.config_path().display());
        Ok(())
    }

    fn handle_config(&self, action: ConfigAction) -> Result<()> {
        match action {
            ConfigAction::Show => {
                let manager = &self.context.config_manager;
                let content = toml::to_string_pretty(manager.config())
                    .context("Failed to serialize configuration")?;
                println!("# {}", manager.config_path().display());
                print!("{content}");
                Ok(())
            }
        }
    }
}
