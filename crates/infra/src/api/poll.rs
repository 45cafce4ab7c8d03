//! Call history poller
//!
//! Periodically refreshes the call list while a history view is active and
//! publishes each snapshot through a watch channel. Whichever response
//! arrives last wins; there is no sequencing guard. Stopping the poller (or
//! dropping it) cancels the loop, which is how a consumer clears the
//! interval when navigating away.

use std::sync::Arc;
use std::time::Duration;

use calldash_domain::constants::DEFAULT_POLL_INTERVAL_SECS;
use calldash_domain::Call;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use super::client::CallApiClient;

/// Type alias for task handle to avoid complexity warnings
type TaskHandle = Arc<Mutex<Option<JoinHandle<()>>>>;

/// Configuration for the call history poller
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Refresh interval
    pub interval: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self { interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS) }
    }
}

/// Periodic call-list poller
pub struct CallPoller {
    client: Arc<CallApiClient>,
    config: PollerConfig,
    cancellation_token: CancellationToken,
    task_handle: TaskHandle,
    snapshot_tx: watch::Sender<Vec<Call>>,
}

impl CallPoller {
    /// Create a new poller
    ///
    /// # Arguments
    ///
    /// * `client` - Call API client
    /// * `config` - Poller configuration
    pub fn new(client: Arc<CallApiClient>, config: PollerConfig) -> Self {
        let (snapshot_tx, _) = watch::channel(Vec::new());
        Self {
            client,
            config,
            cancellation_token: CancellationToken::new(),
            task_handle: Arc::new(Mutex::new(None)),
            snapshot_tx,
        }
    }

    /// Subscribe to call-list snapshots.
    ///
    /// The receiver always holds the most recent successful snapshot; failed
    /// ticks leave the previous one in place.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Call>> {
        self.snapshot_tx.subscribe()
    }

    /// Start the poller
    ///
    /// Spawns a background task that refreshes the call list periodically.
    ///
    /// # Errors
    ///
    /// Returns error if the poller is already running
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> Result<(), String> {
        if self.is_running().await {
            return Err("Poller already running".to_string());
        }

        info!(interval_secs = self.config.interval.as_secs(), "Starting call poller");

        // Create a new cancellation token (supports restart after stop)
        self.cancellation_token = CancellationToken::new();

        let client = Arc::clone(&self.client);
        let interval = self.config.interval;
        let cancel = self.cancellation_token.clone();
        let snapshot_tx = self.snapshot_tx.clone();

        let handle = tokio::spawn(async move {
            Self::poll_loop(client, interval, cancel, snapshot_tx).await;
        });

        *self.task_handle.lock().await = Some(handle);

        Ok(())
    }

    /// Stop the poller gracefully
    ///
    /// Cancels the background task and awaits completion.
    ///
    /// # Errors
    ///
    /// Returns error if the poller is not running
    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> Result<(), String> {
        if self.task_handle.lock().await.is_none() {
            return Err("Poller not running".to_string());
        }

        info!("Stopping call poller");

        self.cancellation_token.cancel();

        if let Some(handle) = self.task_handle.lock().await.take() {
            match tokio::time::timeout(Duration::from_secs(5), handle).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    warn!("Poller task panicked: {}", e);
                    return Err("Poller task panicked".to_string());
                }
                Err(_) => {
                    warn!("Poller task did not complete within timeout");
                    return Err("Poller task timeout".to_string());
                }
            }
        }

        info!("Call poller stopped");

        Ok(())
    }

    /// Check if the poller has a live background task
    pub async fn is_running(&self) -> bool {
        self.task_handle.lock().await.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Background refresh loop
    ///
    /// Tick failures are logged and skipped; the next tick proceeds with the
    /// previous snapshot still published. Session expiry ends the loop, since
    /// every further tick would fail the same way until a new login.
    async fn poll_loop(
        client: Arc<CallApiClient>,
        interval: Duration,
        cancel: CancellationToken,
        snapshot_tx: watch::Sender<Vec<Call>>,
    ) {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Poll loop cancelled");
                    break;
                }
                _ = tokio::time::sleep(interval) => {
                    match client.get_calls().await {
                        Ok(calls) => {
                            debug!(count = calls.len(), "Call list refreshed");
                            snapshot_tx.send_replace(calls);
                        }
                        Err(err) if err.is_auth_expired() => {
                            warn!("Session expired during poll; stopping");
                            break;
                        }
                        Err(err) => {
                            warn!(error = %err, "Call list refresh failed");
                        }
                    }
                }
            }
        }
    }
}

/// Ensure the poller is stopped when dropped
impl Drop for CallPoller {
    fn drop(&mut self) {
        // Note: Can't check task_handle (async), so check if token is not cancelled
        // This is best-effort cleanup in Drop
        if !self.cancellation_token.is_cancelled() {
            self.cancellation_token.cancel();
        }
    }
}
