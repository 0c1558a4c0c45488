use log::debug;
use reqwest::header::{HeaderValue, CACHE_CONTROL};
use reqwest::StatusCode;
use thiserror::Error;

use crate::models::SensorReading;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(StatusCode),

    #[error("invalid sensor payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the grow station's sensor endpoint.
#[derive(Debug, Clone)]
pub struct SensorClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SensorClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    /// Fetch the latest reading. Caching is disabled so every call observes
    /// the current server state.
    pub async fn fetch(&self) -> Result<SensorReading, FetchError> {
        debug!("GET {}", self.endpoint);

        let response = self
            .http
            .get(&self.endpoint)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-store"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let reading = serde_json::from_str(&body)?;

        Ok(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "HTTP 500 Internal Server Error");

        let err = FetchError::Parse(serde_json::from_str::<SensorReading>("not json").unwrap_err());
        assert!(err.to_string().starts_with("invalid sensor payload:"));
    }
}
