//! Periodic snapshot refresh worker
//!
//! Polls the backend's status and signals endpoints on a fixed interval
//! and streams the results to the UI as events. Every cycle is stamped
//! with a sequence number so the dashboard can discard responses that
//! arrive out of order.

use super::core::EventSender;
use crate::api::ApiClient;
use crate::consts::cli_consts::refresh;
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::events::{Event, EventType};
use tokio::sync::broadcast;
use tokio::time::interval;

/// Fetches account/position and signal snapshots from the backend
pub struct SnapshotFetcher {
    client: Box<dyn ApiClient>,
    event_sender: EventSender,
    error_classifier: ErrorClassifier,
    seq: u64,
}

impl SnapshotFetcher {
    pub fn new(client: Box<dyn ApiClient>, event_sender: EventSender) -> Self {
        Self {
            client,
            event_sender,
            error_classifier: ErrorClassifier::new(),
            seq: 0,
        }
    }

    /// Run one refresh cycle.
    ///
    /// Both requests are issued concurrently; neither waits on the other.
    /// A failed request only produces an error event, leaving whatever
    /// the dashboard already displays untouched.
    pub async fn refresh_cycle(&mut self) {
        self.seq += 1;
        let seq = self.seq;

        self.event_sender
            .send_status_event(
                format!("Refreshing snapshot #{}...", seq),
                EventType::Refresh,
                LogLevel::Debug,
            )
            .await;

        let (status, signals) =
            tokio::join!(self.client.get_status(), self.client.get_recent_signals());

        match status {
            Ok(status) => {
                self.event_sender
                    .send_event(Event::status_snapshot(seq, status))
                    .await;
            }
            Err(e) => {
                let log_level = self.error_classifier.classify_fetch_error(&e);
                self.event_sender
                    .send_status_event(
                        format!("Status fetch failed: {}", e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
            }
        }

        match signals {
            Ok(signals) => {
                self.event_sender
                    .send_event(Event::signals_snapshot(seq, signals))
                    .await;
            }
            Err(e) => {
                let log_level = self.error_classifier.classify_fetch_error(&e);
                self.event_sender
                    .send_signals_event(
                        format!("Signals fetch failed: {}", e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
            }
        }
    }
}

/// Run the refresh loop until a shutdown signal arrives.
///
/// The first cycle fires immediately, then one per interval tick. On
/// shutdown any in-flight cycle is dropped with it, so no event is
/// emitted after teardown.
pub async fn run_refresh_worker(mut fetcher: SnapshotFetcher, mut shutdown: broadcast::Receiver<()>) {
    let mut ticker = interval(refresh::interval());

    loop {
        tokio::select! {
            _ = shutdown.recv() => break,
            _ = ticker.tick() => fetcher.refresh_cycle().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApiClient;
    use crate::api::error::ApiError;
    use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
    use crate::events::{Snapshot, Worker};
    use crate::model::{NavInfo, SignalsByMarket, StatusResponse};
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn sample_status() -> StatusResponse {
        StatusResponse {
            account: NavInfo {
                total: 1000.5,
                spot: 400.0,
                fut: 600.5,
            },
            positions: vec![],
        }
    }

    fn drain(rx: &mut mpsc::Receiver<Event>) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_cadence_until_shutdown() {
        let mut mock = MockApiClient::new();
        // One pair at t=0, then one per 60s boundary: 3 pairs in 150s.
        mock.expect_get_status()
            .times(3)
            .returning(|| Ok(sample_status()));
        mock.expect_get_recent_signals()
            .times(3)
            .returning(|| Ok(SignalsByMarket::default()));

        let (tx, mut rx) = mpsc::channel(EVENT_QUEUE_SIZE);
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let fetcher = SnapshotFetcher::new(Box::new(mock), EventSender::new(tx));
        let handle = tokio::spawn(run_refresh_worker(fetcher, shutdown_rx));

        tokio::time::sleep(Duration::from_secs(150)).await;
        shutdown_tx.send(()).unwrap();
        handle.await.unwrap();

        // The worker is gone; advancing time further must not produce fetches.
        // The mock's times(3) guard panics if a fourth call ever happens.
        tokio::time::sleep(Duration::from_secs(300)).await;

        let events = drain(&mut rx);
        let status_snapshots = events
            .iter()
            .filter(|e| e.worker == Worker::StatusFetcher && e.event_type == EventType::Success)
            .count();
        let signal_snapshots = events
            .iter()
            .filter(|e| e.worker == Worker::SignalsFetcher && e.event_type == EventType::Success)
            .count();
        assert_eq!(status_snapshots, 3);
        assert_eq!(signal_snapshots, 3);
    }

    #[tokio::test]
    async fn test_cycle_stamps_increasing_sequence_numbers() {
        let mut mock = MockApiClient::new();
        mock.expect_get_status().returning(|| Ok(sample_status()));
        mock.expect_get_recent_signals()
            .returning(|| Ok(SignalsByMarket::default()));

        let (tx, mut rx) = mpsc::channel(EVENT_QUEUE_SIZE);
        let mut fetcher = SnapshotFetcher::new(Box::new(mock), EventSender::new(tx));
        fetcher.refresh_cycle().await;
        fetcher.refresh_cycle().await;

        let seqs: Vec<u64> = drain(&mut rx)
            .into_iter()
            .filter_map(|e| match e.snapshot {
                Some(Snapshot::Status { seq, .. }) => Some(seq),
                _ => None,
            })
            .collect();
        assert_eq!(seqs, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_failed_fetch_emits_error_without_snapshot() {
        let mut mock = MockApiClient::new();
        mock.expect_get_status().returning(|| {
            Err(ApiError::Http {
                status: 502,
                message: "Bad Gateway".to_string(),
            })
        });
        mock.expect_get_recent_signals()
            .returning(|| Ok(SignalsByMarket::default()));

        let (tx, mut rx) = mpsc::channel(EVENT_QUEUE_SIZE);
        let mut fetcher = SnapshotFetcher::new(Box::new(mock), EventSender::new(tx));
        fetcher.refresh_cycle().await;

        let events = drain(&mut rx);
        let status_error = events
            .iter()
            .find(|e| e.worker == Worker::StatusFetcher && e.event_type == EventType::Error)
            .expect("status error event");
        assert!(status_error.snapshot.is_none());
        assert_eq!(status_error.log_level, LogLevel::Warn);

        // The signals fetch is independent and still succeeds.
        assert!(
            events
                .iter()
                .any(|e| e.worker == Worker::SignalsFetcher
                    && e.event_type == EventType::Success)
        );
    }
}
