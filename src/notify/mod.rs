//! Notification rendering and delivery.
//!
//! The [`Notifier`] trait is the seam between the core and the OS
//! notification surface; [`NativeNotifier`] is the production adapter.

pub mod native;
pub mod port;
pub mod toast;

pub use native::NativeNotifier;
pub use port::{Notifier, NotifyError};
pub use toast::{decode_field, DecodedField, RenderedToast};

use std::sync::Arc;

/// Create the default notifier for the current platform.
pub fn create_notifier() -> Arc<dyn Notifier> {
    Arc::new(NativeNotifier::new())
}
