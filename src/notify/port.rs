//! Notifier port interface.

use crate::notify::toast::RenderedToast;
use async_trait::async_trait;
use thiserror::Error;

/// Notification delivery errors.
#[derive(Debug, Clone, Error)]
pub enum NotifyError {
    #[error("Failed to show notification: {0}")]
    ShowFailed(String),
}

/// Port for the native desktop notification surface.
///
/// The dispatcher only ever talks to this trait, so the core stays testable
/// without a real OS notification subsystem.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a rendered toast. Best-effort; callers treat failures as
    /// non-fatal.
    async fn show(&self, toast: &RenderedToast) -> Result<(), NotifyError>;
}

/// Blanket implementation for boxed notifier types.
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn show(&self, toast: &RenderedToast) -> Result<(), NotifyError> {
        self.as_ref().show(toast).await
    }
}
