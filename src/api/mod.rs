use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::model::{HealthResponse, SignalsByMarket, StatusResponse};

pub(crate) mod client;
pub use client::DashboardClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ApiClient: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the account snapshot and open positions.
    async fn get_status(&self) -> Result<StatusResponse, ApiError>;

    /// Fetch recent screener signals grouped by market.
    async fn get_recent_signals(&self) -> Result<SignalsByMarket, ApiError>;

    /// Probe the backend's health endpoint.
    async fn get_health(&self) -> Result<HealthResponse, ApiError>;
}
