//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events

use super::state::DashboardState;

use crate::events::{Event as WorkerEvent, EventType, Snapshot};

use std::time::Instant;

impl DashboardState {
    /// Update the dashboard state with a new tick, draining queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            // Add to activity logs for display
            self.add_to_activity_log(event.clone());

            // Process the event for state updates
            self.process_event(&event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        match event.event_type {
            EventType::Success => {
                if let Some(snapshot) = &event.snapshot {
                    self.apply_snapshot(snapshot, &event.timestamp);
                }
            }
            EventType::Error => {
                // Keep whatever is on screen; only record the failure.
                self.fetch_failures += 1;
            }
            EventType::Refresh => {
                self.set_refresh_started_at(Instant::now());
            }
        }
    }

    /// Apply a snapshot, discarding responses from superseded cycles.
    ///
    /// `nav` and `positions` come from one payload and are replaced
    /// together; `signals` is its own slot with its own sequence.
    fn apply_snapshot(&mut self, snapshot: &Snapshot, timestamp: &str) {
        match snapshot {
            Snapshot::Status {
                seq,
                account,
                positions,
            } => {
                if *seq <= self.status_seq() {
                    return;
                }
                self.set_status_seq(*seq);
                self.nav = account.clone();
                self.positions = positions.clone();
                self.last_status_at = Some(timestamp.to_string());
            }
            Snapshot::Signals { seq, signals } => {
                if *seq <= self.signals_seq() {
                    return;
                }
                self.set_signals_seq(*seq);
                self.signals = signals.clone();
                self.last_signals_at = Some(timestamp.to_string());
            }
        }
    }
}
