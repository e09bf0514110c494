//! Native notification adapter using notify-rust.
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;
use notify_rust::{Notification, Timeout};

use crate::notify::port::{Notifier, NotifyError};
use crate::notify::toast::{RenderedToast, ToastDuration};

/// Cross-platform notifier backed by notify-rust.
pub struct NativeNotifier {
    app_name: String,
}

impl NativeNotifier {
    pub fn new() -> Self {
        Self { app_name: "Forward Notifier".to_string() }
    }

    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self { app_name: app_name.into() }
    }
}

impl Default for NativeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NativeNotifier {
    async fn show(&self, toast: &RenderedToast) -> Result<(), NotifyError> {
        let app_name = self.app_name.clone();
        let title = toast.title.clone();
        // The attribution line rides along in the body; notify-rust has no
        // cross-platform attribution slot.
        let body = format!("{}\nvia {}", toast.body, toast.attribution);
        let sound = (!toast.audio.silent).then(|| toast.audio.event.clone());
        let timeout = match toast.duration {
            ToastDuration::Short => Timeout::Default,
            ToastDuration::Long => Timeout::Milliseconds(25_000),
        };

        // notify-rust can block, so keep it off the async workers
        tokio::task::spawn_blocking(move || {
            let mut notification = Notification::new();
            notification
                .appname(&app_name)
                .summary(&title)
                .body(&body)
                .timeout(timeout);

            if let Some(sound) = sound {
                notification.sound_name(&sound);
            }

            notification
                .show()
                .map(|_| ())
                .map_err(|e| NotifyError::ShowFailed(e.to_string()))
        })
        .await
        .map_err(|e| NotifyError::ShowFailed(format!("task join error: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_has_default_app_name() {
        let notifier = NativeNotifier::new();
        assert_eq!(notifier.app_name, "Forward Notifier");
    }

    #[test]
    fn notifier_with_custom_app_name() {
        let notifier = NativeNotifier::with_app_name("TestApp");
        assert_eq!(notifier.app_name, "TestApp");
    }
}
