//! HTTP adapter for the SOC Portal JSON API
//!
//! Implements the core port traits against the portal's endpoints:
//! `GET /roster`, `GET /portal-tracker-log`, `POST /shift-exchange` and
//! `POST /take-leave`. Every payload arrives wrapped in the portal's
//! `{ success, data, ... }` envelope; HTTP-level failures and
//! `success: false` bodies both surface as domain errors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use socportal_core::{PortalLogProvider, RosterProvider, ShiftRequestGateway};
use socportal_domain::{
    ApiConfig, ApiResponse, PagedResponse, PageInfo, PortalAccessRecord, PortalLogQuery, Result,
    RosterDay, ShiftRequest, SocPortalError,
};
use tracing::debug;

use crate::errors::{status_error, InfraError};
use crate::http::HttpClient;

/// Client for the portal's JSON API
///
/// Cheap to clone; holds a shared connection pool.
#[derive(Clone)]
pub struct PortalApiClient {
    http: HttpClient,
    base_url: String,
}

impl PortalApiClient {
    /// Create a client from the application's API configuration.
    ///
    /// # Errors
    /// Returns `Internal` if the underlying HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .max_attempts(config.max_attempts)
            .build()?;
        Ok(Self::from_parts(http, config.base_url.clone()))
    }

    /// Create a client from an already-built HTTP client.
    pub fn from_parts(http: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET request");
        let builder = self.http.request(Method::GET, &url).query(query);
        let response = self.http.send(builder).await?;
        Self::decode(response).await
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST request");
        let builder = self.http.request(Method::POST, &url).json(body);
        let response = self.http.send(builder).await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }
        response.json::<T>().await.map_err(|err| SocPortalError::from(InfraError::from(err)))
    }
}

/// Unwrap a single-payload envelope into its data.
fn expect_data<T>(envelope: ApiResponse<T>) -> Result<T> {
    if !envelope.success {
        return Err(envelope_failure(envelope.message));
    }
    envelope
        .data
        .ok_or_else(|| SocPortalError::Api("successful response carried no data".to_string()))
}

fn envelope_failure(message: Option<String>) -> SocPortalError {
    SocPortalError::Api(message.unwrap_or_else(|| "portal reported failure".to_string()))
}

#[async_trait]
impl RosterProvider for PortalApiClient {
    async fn fetch_roster(&self, month: u32, year: i32) -> Result<Vec<RosterDay>> {
        let query = [("month", month.to_string()), ("year", year.to_string())];
        let envelope: ApiResponse<Vec<RosterDay>> = self.get("/roster", &query).await?;
        expect_data(envelope)
    }
}

#[async_trait]
impl ShiftRequestGateway for PortalApiClient {
    async fn submit_exchange(&self, request: &ShiftRequest) -> Result<()> {
        let envelope: ApiResponse<serde_json::Value> =
            self.post("/shift-exchange", request).await?;
        if envelope.success {
            Ok(())
        } else {
            Err(envelope_failure(envelope.message))
        }
    }

    async fn submit_leave(&self, request: &ShiftRequest) -> Result<()> {
        let envelope: ApiResponse<serde_json::Value> = self.post("/take-leave", request).await?;
        if envelope.success {
            Ok(())
        } else {
            Err(envelope_failure(envelope.message))
        }
    }
}

#[async_trait]
impl PortalLogProvider for PortalApiClient {
    async fn fetch_log(
        &self,
        query: &PortalLogQuery,
    ) -> Result<(Vec<PortalAccessRecord>, PageInfo)> {
        let pairs = query.to_query_pairs();
        let envelope: PagedResponse<PortalAccessRecord> =
            self.get("/portal-tracker-log", &pairs).await?;

        if !envelope.success {
            return Err(envelope_failure(envelope.message));
        }
        Ok((envelope.data, envelope.pagination.unwrap_or_default()))
    }
}
