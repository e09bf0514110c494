//! Startup connectivity gate.
//!
//! The receiver is only useful when the sending device can reach it over
//! the network, so startup probes outbound reachability as a proxy signal.
//! Failure is advisory: the user is told via a toast and the probe retries
//! on a fixed delay, but once the attempt limit is reached the server
//! starts anyway.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::ConnectivityConfig;
use crate::dispatch::Dispatcher;
use crate::errors::{AppError, AppResult};

/// Outbound reachability probe.
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    /// One probe attempt; true means the network is reachable.
    async fn check(&self) -> bool;
}

/// Production probe: a GET against a well-known stable endpoint.
///
/// Only transport-level failures count as unreachable; an HTTP error status
/// still proves the network path works.
pub struct HttpProbe {
    client: reqwest::Client,
    url: String,
}

impl HttpProbe {
    pub fn new(url: impl Into<String>) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::server_with_source("failed to build probe client", e))?;
        Ok(HttpProbe { client, url: url.into() })
    }
}

#[async_trait]
impl ReachabilityProbe for HttpProbe {
    async fn check(&self) -> bool {
        self.client.get(&self.url).send().await.is_ok()
    }
}

/// Bounded retry loop run once before the server starts accepting.
pub struct ConnectivityGate {
    probe: Arc<dyn ReachabilityProbe>,
    dispatcher: Arc<Dispatcher>,
    max_attempts: u32,
    retry_delay: Duration,
}

impl ConnectivityGate {
    pub fn new(
        probe: Arc<dyn ReachabilityProbe>,
        dispatcher: Arc<Dispatcher>,
        max_attempts: u32,
        retry_delay: Duration,
    ) -> Self {
        ConnectivityGate { probe, dispatcher, max_attempts, retry_delay }
    }

    /// Build the gate from configuration with the production HTTP probe.
    pub fn from_config(config: &ConnectivityConfig, dispatcher: Arc<Dispatcher>) -> AppResult<Self> {
        let probe = Arc::new(HttpProbe::new(config.probe_url.clone())?);
        Ok(ConnectivityGate::new(
            probe,
            dispatcher,
            config.max_attempts,
            Duration::from_secs(config.retry_delay_secs),
        ))
    }

    /// Probe until reachable or the attempt limit is exhausted.
    ///
    /// Each failure is reported to the user through the dispatcher before
    /// sleeping out the retry delay. Never fails startup.
    pub async fn ensure_connectivity(&self) {
        let mut attempts = 0;

        while attempts < self.max_attempts {
            if self.probe.check().await {
                info!("connectivity check passed");
                return;
            }

            attempts += 1;
            warn!(attempt = attempts, max = self.max_attempts, "connectivity check failed");

            self.dispatcher
                .dispatch(
                    "Cannot connect to the internet!",
                    &format!("Trying again in {} seconds.", self.retry_delay.as_secs()),
                )
                .await;

            sleep(self.retry_delay).await;
        }

        warn!(
            attempts = self.max_attempts,
            "giving up on connectivity checks, serving anyway"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeviceConfig;
    use crate::test_helpers::{FlakyProbe, RecordingNotifier};

    fn gate_with(probe: Arc<FlakyProbe>, max_attempts: u32) -> (ConnectivityGate, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let dispatcher =
            Arc::new(Dispatcher::new(notifier.clone(), &DeviceConfig::default()));
        let gate = ConnectivityGate::new(probe, dispatcher, max_attempts, Duration::ZERO);
        (gate, notifier)
    }

    #[tokio::test]
    async fn first_success_returns_after_one_probe() {
        let probe = Arc::new(FlakyProbe::failing_times(0));
        let (gate, notifier) = gate_with(probe.clone(), 10);

        gate.ensure_connectivity().await;

        assert_eq!(probe.calls(), 1);
        assert!(notifier.shown().is_empty());
    }

    #[tokio::test]
    async fn k_failures_then_success_probes_k_plus_one_times() {
        let probe = Arc::new(FlakyProbe::failing_times(3));
        let (gate, notifier) = gate_with(probe.clone(), 10);

        gate.ensure_connectivity().await;

        assert_eq!(probe.calls(), 4);
        // one user-facing toast per failure
        assert_eq!(notifier.shown().len(), 3);
    }

    #[tokio::test]
    async fn persistent_failure_gives_up_after_max_attempts() {
        let probe = Arc::new(FlakyProbe::always_failing());
        let (gate, notifier) = gate_with(probe.clone(), 10);

        gate.ensure_connectivity().await;

        assert_eq!(probe.calls(), 10);
        assert_eq!(notifier.shown().len(), 10);
    }

    #[tokio::test]
    async fn failure_toast_names_the_retry_delay() {
        let probe = Arc::new(FlakyProbe::failing_times(1));
        let (gate, notifier) = gate_with(probe.clone(), 10);

        gate.ensure_connectivity().await;

        let shown = notifier.shown();
        assert_eq!(shown[0].title, "Cannot connect to the internet!");
        assert_eq!(shown[0].body, "Trying again in 0 seconds.");
    }
}
