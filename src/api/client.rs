//! HTTP API client
//!
//! Thin reqwest wrapper over the admin API. One response-checking path maps
//! HTTP failures onto the error taxonomy: 404 -> NotFound, 400 -> Validation,
//! other non-2xx -> Api, connection problems -> Transport. No retries, no
//! backoff, no auth.

use std::time::Duration;

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::errors::{Result, SurveyctlError};
use crate::schemas::Config;

/// Error body shape the backend uses for failures (`{"error": "..."}`)
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Typed client for the questionnaire/task admin API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.api_url)
            .map_err(|e| SurveyctlError::ConfigError(format!("invalid api_url: {}", e)))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()?;

        Ok(ApiClient { http, base_url })
    }

    /// The configured base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Resolve an endpoint path against the base URL
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(Into::into)
    }

    /// Check a response's status and deserialize its JSON body.
    pub(crate) async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::check(response).await?;
        response.json().await.map_err(Into::into)
    }

    /// Check a response's status, discarding the body on success.
    pub(crate) async fn check_ok(response: Response) -> Result<()> {
        Self::check(response).await.map(|_| ())
    }

    /// Map non-2xx responses onto the error taxonomy.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let path = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(_) if !body.trim().is_empty() => body.trim().to_string(),
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };

        match status.as_u16() {
            404 => Err(SurveyctlError::NotFound(format!("{}: {}", path, message))),
            400 => Err(SurveyctlError::Validation(message)),
            code => Err(SurveyctlError::Api {
                status: code,
                message,
            }),
        }
    }
}
