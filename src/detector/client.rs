//! HTTP client for the detection endpoint.
//!
//! Thin wrapper over a single multipart POST. Pure parsing in
//! `parse_response` for testability.

use std::time::Duration;

use super::config::DetectorConfig;
use super::types::{Detect, DetectionResult, DetectorError};

/// Name of the multipart part carrying the image, fixed by the remote API.
const IMAGE_PART: &str = "image";

pub struct DetectorClient {
    http: reqwest::Client,
    endpoint_url: String,
}

impl DetectorClient {
    /// Build a detector client from environment variables (see
    /// [`DetectorConfig::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns an error if `DETECTOR_URL` is absent or the HTTP client fails
    /// to build.
    pub fn from_env() -> Result<Self, DetectorError> {
        Self::from_config(DetectorConfig::from_env()?)
    }

    /// Build a detector client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn from_config(config: DetectorConfig) -> Result<Self, DetectorError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| DetectorError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint_url: config.endpoint_url })
    }

    /// The configured detection endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint_url
    }
}

#[async_trait::async_trait]
impl Detect for DetectorClient {
    async fn detect(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<DetectionResult, DetectorError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_owned())
            .mime_str(content_type)
            .map_err(|e| DetectorError::ApiRequest(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part(IMAGE_PART, part);

        let response = self
            .http
            .post(&self.endpoint_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DetectorError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| DetectorError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(DetectorError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<DetectionResult, DetectorError> {
    serde_json::from_str(json).map_err(|e| DetectorError::ApiParse(e.to_string()))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
