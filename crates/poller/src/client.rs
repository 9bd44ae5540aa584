use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use review_common::config::AppConfig;
use review_common::error::PollError;

/// Source of raw homework status responses.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetch statuses changed since `from_date` (unix seconds). The body is
    /// returned as parsed JSON without any shape checks.
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError>;
}

/// HTTP client for the homework status endpoint.
pub struct ApiClient {
    client: reqwest::Client,
    endpoint: String,
    auth_header: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            auth_header: format!("OAuth {}", config.practicum_token),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn connection_failure(&self, from_date: i64, source: reqwest::Error) -> PollError {
        PollError::ConnectionFailure {
            endpoint: self.endpoint.clone(),
            from_date,
            // The endpoint and cursor are already part of the message.
            source: source.without_url(),
        }
    }
}

#[async_trait]
impl HomeworkApi for ApiClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        tracing::debug!(endpoint = %self.endpoint, from_date, "Requesting homework statuses");

        let resp = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, &self.auth_header)
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| self.connection_failure(from_date, e))?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .text()
            .await
            .map_err(|e| self.connection_failure(from_date, e))?;

        if status != StatusCode::OK {
            tracing::warn!(
                endpoint = %self.endpoint,
                from_date,
                status = status.as_u16(),
                headers = ?headers,
                body = %body,
                "Homework API answered with non-OK status"
            );
            return Err(PollError::HttpStatusFailure {
                endpoint: self.endpoint.clone(),
                from_date,
                status,
                headers,
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| PollError::InvalidBody {
            endpoint: self.endpoint.clone(),
            source,
        })
    }
}
