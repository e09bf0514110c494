//! Notification dispatch.
//!
//! The dispatcher owns the decode → render → deliver pipeline: it applies
//! the base64 convenience to both fields, stamps the device attribution,
//! suppresses silent pings, and hands the rendered toast to the notifier
//! port. Delivery is fire-and-forget; native-layer failures are logged and
//! swallowed.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::DeviceConfig;
use crate::notify::toast::decode_field;
use crate::notify::{Notifier, RenderedToast};

/// Dispatches notifications to the native notifier.
pub struct Dispatcher {
    notifier: Arc<dyn Notifier>,
    attribution: String,
}

impl Dispatcher {
    /// Build a dispatcher with the attribution resolved once from the
    /// device configuration.
    pub fn new(notifier: Arc<dyn Notifier>, device: &DeviceConfig) -> Self {
        Dispatcher { notifier, attribution: device.display_name().to_string() }
    }

    /// The attribution label stamped onto every toast.
    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    /// Decode, render, and deliver one notification.
    ///
    /// A decoded message equal to `(null)` (case-insensitive) renders the
    /// toast but never shows it; that is the wire-level mechanism for
    /// silent pings.
    pub async fn dispatch(&self, title: &str, message: &str) {
        let title = decode_field(title).into_string();
        let message = decode_field(message).into_string();

        let toast = RenderedToast::new(title, message, self.attribution.clone());

        if toast.is_silent_ping() {
            debug!(title = %toast.title, "suppressing silent ping");
            return;
        }

        if let Err(e) = self.notifier.show(&toast).await {
            warn!(error = %e, title = %toast.title, "failed to show notification");
        }
    }
}
