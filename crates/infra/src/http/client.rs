//! HTTP client with built-in retry and timeout support.

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use socportal_domain::{Result, SocPortalError};
use tracing::debug;

use crate::errors::InfraError;

/// Thin reqwest wrapper that retries transient failures with bounded
/// exponential backoff.
///
/// Server errors (5xx), timeouts and connection failures are retried up to
/// `max_attempts`; client errors (4xx) are returned to the caller on the
/// first attempt.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: u32,
    base_backoff: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder with retry semantics.
    ///
    /// # Errors
    /// Returns `Internal` for requests whose body cannot be cloned for
    /// retries, and the mapped transport error once attempts are exhausted.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let attempts = self.max_attempts.max(1);
        let mut last_err: Option<SocPortalError> = None;

        for attempt in 1..=attempts {
            let request = builder
                .try_clone()
                .ok_or_else(|| {
                    SocPortalError::Internal(
                        "request body cannot be cloned; buffer the body to enable retries".into(),
                    )
                })?
                .build()
                .map_err(|err| SocPortalError::from(InfraError::from(err)))?;

            let method = request.method().clone();
            let url = request.url().clone();
            debug!(attempt, %method, %url, "sending HTTP request");

            match self.client.execute(request).await {
                Ok(response) => {
                    let status = response.status();
                    debug!(attempt, %method, %url, %status, "received HTTP response");

                    if status.is_server_error() && attempt < attempts {
                        self.backoff(attempt).await;
                        continue;
                    }
                    return Ok(response);
                }
                Err(err) => {
                    debug!(attempt, %method, %url, error = %err, "HTTP request failed");
                    let retryable = err.is_timeout() || err.is_connect() || err.is_request();
                    last_err = Some(SocPortalError::from(InfraError::from(err)));

                    if retryable && attempt < attempts {
                        self.backoff(attempt).await;
                        continue;
                    }
                    break;
                }
            }
        }

        Err(last_err.unwrap_or_else(|| {
            SocPortalError::Internal("http client exhausted retries without a result".into())
        }))
    }

    async fn backoff(&self, completed_attempts: u32) {
        let shift = completed_attempts.saturating_sub(1).min(8);
        let delay = self.base_backoff.saturating_mul(1 << shift);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    max_attempts: u32,
    base_backoff: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_attempts: 3,
            base_backoff: Duration::from_millis(200),
            user_agent: None,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configure the total number of attempts (initial try + retries).
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `Internal` if the underlying reqwest client cannot be
    /// constructed.
    pub fn build(self) -> Result<HttpClient> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client =
            builder.build().map_err(|err| SocPortalError::from(InfraError::from(err)))?;

        Ok(HttpClient {
            client,
            max_attempts: self.max_attempts.max(1),
            base_backoff: self.base_backoff,
        })
    }
}
