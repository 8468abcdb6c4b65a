//! Dashboard state management
//!
//! Contains the main dashboard state struct

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::model::{NavInfo, Position, SignalsByMarket};

use std::collections::VecDeque;
use std::time::Instant;

/// Dashboard state: the latest applied snapshots plus display bookkeeping.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Latest applied account valuation.
    pub nav: NavInfo,
    /// Latest applied open positions, replaced wholesale per snapshot.
    pub positions: Vec<Position>,
    /// Latest applied signals, grouped by market.
    pub signals: SignalsByMarket,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
    /// Timestamp of the last applied status snapshot
    pub last_status_at: Option<String>,
    /// Timestamp of the last applied signals snapshot
    pub last_signals_at: Option<String>,
    /// Number of failed fetches observed since startup
    pub fetch_failures: u64,

    /// When the current refresh countdown started
    refresh_started_at: Option<Instant>,
    /// Highest status snapshot sequence applied so far
    status_seq: u64,
    /// Highest signals snapshot sequence applied so far
    signals_seq: u64,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, with_background_color: bool) -> Self {
        Self {
            environment,
            start_time,
            nav: NavInfo::default(),
            positions: Vec::new(),
            signals: SignalsByMarket::default(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color,
            tick: 0,
            last_status_at: None,
            last_signals_at: None,
            fetch_failures: 0,
            refresh_started_at: None,
            status_seq: 0,
            signals_seq: 0,
        }
    }

    // Getter methods for private fields
    pub fn refresh_started_at(&self) -> Option<Instant> {
        self.refresh_started_at
    }

    pub fn status_seq(&self) -> u64 {
        self.status_seq
    }

    pub fn signals_seq(&self) -> u64 {
        self.signals_seq
    }

    // Setter methods for private fields (for updaters)
    pub fn set_refresh_started_at(&mut self, at: Instant) {
        self.refresh_started_at = Some(at);
    }

    pub fn set_status_seq(&mut self, seq: u64) {
        self.status_seq = seq;
    }

    pub fn set_signals_seq(&mut self, seq: u64) {
        self.signals_seq = seq;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
