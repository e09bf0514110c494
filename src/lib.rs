//! Forward Notifier receiver library.
//!
//! Receives notification payloads over a minimal HTTP surface and forwards
//! them to the operating system's native notification facility as desktop
//! toasts.

pub mod cli;
pub mod config;
pub mod connectivity;
pub mod dispatch;
pub mod errors;
pub mod notify;
pub mod payload;
pub mod platform;
pub mod server;
pub mod test_helpers;

// Re-export commonly used types for convenience
pub use config::{Config, ConfigManager, DeviceConfig};
pub use dispatch::Dispatcher;
pub use payload::{validate, NotificationRequest, ValidationOutcome};
pub use server::ResponseEnvelope;
