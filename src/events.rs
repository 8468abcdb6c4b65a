//! Event System
//!
//! Types and implementations for worker events and logging

use crate::error_classifier::LogLevel;
use crate::logging::should_log_with_env;
use crate::model::{NavInfo, Position, SignalsByMarket, StatusResponse};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Worker request that fetches the account/position snapshot.
    StatusFetcher,
    /// Worker request that fetches recent screener signals.
    SignalsFetcher,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

/// Snapshot payload delivered alongside a successful fetch event.
///
/// The sequence number is the refresh cycle that produced the snapshot;
/// the dashboard discards snapshots older than what it already applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Status {
        seq: u64,
        account: NavInfo,
        positions: Vec<Position>,
    },
    Signals {
        seq: u64,
        signals: SignalsByMarket,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Snapshot payload for successful fetches
    pub snapshot: Option<Snapshot>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            snapshot: None,
        }
    }

    pub fn status_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::StatusFetcher, msg, event_type, log_level)
    }

    pub fn signals_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::SignalsFetcher, msg, event_type, log_level)
    }

    /// A successful status fetch carrying the decoded snapshot.
    pub fn status_snapshot(seq: u64, status: StatusResponse) -> Self {
        let mut event = Self::new(
            Worker::StatusFetcher,
            format!(
                "Snapshot #{}: {} open positions",
                seq,
                status.positions.len()
            ),
            EventType::Success,
            LogLevel::Info,
        );
        event.snapshot = Some(Snapshot::Status {
            seq,
            account: status.account,
            positions: status.positions,
        });
        event
    }

    /// A successful signals fetch carrying the decoded snapshot.
    pub fn signals_snapshot(seq: u64, signals: SignalsByMarket) -> Self {
        let mut event = Self::new(
            Worker::SignalsFetcher,
            format!("Snapshot #{}: {} signals", seq, signals.total_signals()),
            EventType::Success,
            LogLevel::Info,
        );
        event.snapshot = Some(Snapshot::Signals { seq, signals });
        event
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_snapshot_event_carries_payload() {
        let status = StatusResponse {
            account: NavInfo {
                total: 1000.5,
                spot: 400.0,
                fut: 600.5,
            },
            positions: vec![],
        };
        let event = Event::status_snapshot(3, status);
        assert_eq!(event.worker, Worker::StatusFetcher);
        assert_eq!(event.event_type, EventType::Success);
        match event.snapshot {
            Some(Snapshot::Status { seq, account, .. }) => {
                assert_eq!(seq, 3);
                assert_eq!(account.total, 1000.5);
            }
            other => panic!("unexpected snapshot: {:?}", other),
        }
    }

    #[test]
    fn test_error_events_carry_no_snapshot() {
        let event = Event::signals_with_level(
            "Signals fetch failed".to_string(),
            EventType::Error,
            LogLevel::Warn,
        );
        assert!(event.snapshot.is_none());
    }
}
