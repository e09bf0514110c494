//! A set of helpers for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::connectivity::ReachabilityProbe;
use crate::notify::{Notifier, NotifyError, RenderedToast};

/// Notifier test double that records every toast instead of displaying it.
#[derive(Default)]
pub struct RecordingNotifier {
    shown: Mutex<Vec<RenderedToast>>,
    attempts: AtomicU32,
    fail: bool,
}

impl RecordingNotifier {
    /// A notifier whose every `show` call fails.
    pub fn failing() -> Self {
        RecordingNotifier { fail: true, ..Default::default() }
    }

    /// Toasts shown so far.
    pub fn shown(&self) -> Vec<RenderedToast> {
        self.shown.lock().expect("notifier mutex poisoned").clone()
    }

    /// Number of `show` calls, successful or not.
    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn show(&self, toast: &RenderedToast) -> Result<(), NotifyError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(NotifyError::ShowFailed("recording notifier set to fail".to_string()));
        }
        self.shown.lock().expect("notifier mutex poisoned").push(toast.clone());
        Ok(())
    }
}

/// Reachability probe test double with a scripted failure count.
pub struct FlakyProbe {
    failures_before_success: Option<u32>,
    calls: AtomicU32,
}

impl FlakyProbe {
    /// Fails the first `n` checks, then succeeds forever.
    pub fn failing_times(n: u32) -> Self {
        FlakyProbe { failures_before_success: Some(n), calls: AtomicU32::new(0) }
    }

    /// Never succeeds.
    pub fn always_failing() -> Self {
        FlakyProbe { failures_before_success: None, calls: AtomicU32::new(0) }
    }

    /// Number of checks performed.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReachabilityProbe for FlakyProbe {
    async fn check(&self) -> bool {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failures_before_success {
            Some(failures) => call >= failures,
            None => false,
        }
    }
}
