//! Trading Bot API Client
//!
//! A read-only client for the bot backend's dashboard endpoints.

use crate::api::ApiClient;
use crate::api::error::ApiError;
use crate::consts::cli_consts::http;
use crate::environment::Environment;
use crate::model::{HealthResponse, SignalsByMarket, StatusResponse};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with dashboard version
const USER_AGENT: &str = concat!("tradedash/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: Client,
    environment: Environment,
}

impl DashboardClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl ApiClient for DashboardClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn get_status(&self) -> Result<StatusResponse, ApiError> {
        self.get_request("/api/v1/status").await
    }

    async fn get_recent_signals(&self) -> Result<SignalsByMarket, ApiError> {
        self.get_request("/api/v1/signals/recent").await
    }

    async fn get_health(&self) -> Result<HealthResponse, ApiError> {
        self.get_request("/api/v1/health").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_without_double_slash() {
        let client = DashboardClient::new(Environment::Custom {
            api_base_url: "http://10.0.0.5:8000/".to_string(),
        });
        assert_eq!(
            client.build_url("/api/v1/status"),
            "http://10.0.0.5:8000/api/v1/status"
        );
        assert_eq!(
            client.build_url("api/v1/health"),
            "http://10.0.0.5:8000/api/v1/health"
        );
    }

    #[test]
    fn test_decode_response_surfaces_decode_error() {
        let result: Result<StatusResponse, ApiError> =
            DashboardClient::decode_response(b"<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
