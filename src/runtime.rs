//! Simplified runtime for coordinating the refresh worker

use crate::api::DashboardClient;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::Event;
use crate::workers::core::EventSender;
use crate::workers::refresher::{SnapshotFetcher, run_refresh_worker};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Start the background refresh worker
pub async fn start_refresh_worker(
    client: DashboardClient,
    shutdown: broadcast::Receiver<()>,
) -> (mpsc::Receiver<Event>, Vec<JoinHandle<()>>) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);

    let fetcher = SnapshotFetcher::new(Box::new(client), EventSender::new(event_sender));

    let mut join_handles = Vec::new();
    join_handles.push(tokio::spawn(run_refresh_worker(fetcher, shutdown)));

    (event_receiver, join_handles)
}
