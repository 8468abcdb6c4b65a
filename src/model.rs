//! Wire types for the trading bot API
//!
//! Shapes mirror the backend's JSON payloads. Snapshots are replaced
//! wholesale on each refresh, so none of these types carry identity
//! beyond what the backend sends.

use serde::Deserialize;
use std::collections::HashMap;

/// Account valuation split by sub-account.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NavInfo {
    pub total: f64,
    pub spot: f64,
    pub fut: f64,
}

/// One open trading position with its protective levels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Position {
    pub id: i64,
    pub symbol: String,
    pub side: String,
    pub qty: f64,
    pub sl: f64,
    pub tp: f64,
    pub status: String,
    pub updated_at: String,
}

/// One candidate trade signal produced by the screener.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderSignal {
    pub symbol: String,
    pub score: f64,
    pub action: String,
    pub atr_pct: f64,
    pub expected_return: f64,
}

/// Body of `GET /api/v1/status`.
///
/// The backend also sends `timestamp` and `settings` keys; the dashboard
/// only consumes the account and position fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusResponse {
    pub account: NavInfo,
    pub positions: Vec<Position>,
}

/// Body of `GET /api/v1/health`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// The two market groups the screener reports on, in display order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum MarketKind {
    Spot,
    Fut,
}

impl MarketKind {
    pub const ALL: [MarketKind; 2] = [MarketKind::Spot, MarketKind::Fut];

    /// The key this group uses in the signals payload.
    pub fn wire_key(&self) -> &'static str {
        match self {
            MarketKind::Spot => "SPOT",
            MarketKind::Fut => "FUT",
        }
    }
}

/// Body of `GET /api/v1/signals/recent`: signals grouped by market.
///
/// Signal order within a group is the response order. A group key may be
/// absent entirely; `market` papers over that with an empty slice.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SignalsByMarket {
    groups: HashMap<String, Vec<OrderSignal>>,
}

impl SignalsByMarket {
    pub fn market(&self, kind: MarketKind) -> &[OrderSignal] {
        self.groups
            .get(kind.wire_key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn total_signals(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    #[cfg(test)]
    pub fn from_groups(groups: HashMap<String, Vec<OrderSignal>>) -> Self {
        Self { groups }
    }
}
