//! Detector configuration parsed from environment variables.

use super::types::DetectorError;

pub const DEFAULT_DETECT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_DETECT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectorTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Full URL of the detection endpoint, e.g.
    /// `http://127.0.0.1:5000/detect_brain_tumor`.
    pub endpoint_url: String,
    pub timeouts: DetectorTimeouts,
}

impl DetectorConfig {
    /// Build typed detector config from environment variables.
    ///
    /// Required:
    /// - `DETECTOR_URL`
    ///
    /// Optional:
    /// - `DETECTOR_REQUEST_TIMEOUT_SECS`: default 60
    /// - `DETECTOR_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, DetectorError> {
        let endpoint_url = std::env::var("DETECTOR_URL")
            .map_err(|_| DetectorError::MissingEndpoint { var: "DETECTOR_URL".into() })?;
        if endpoint_url.trim().is_empty() {
            return Err(DetectorError::ConfigParse("DETECTOR_URL is empty".into()));
        }

        let timeouts = DetectorTimeouts {
            request_secs: env_parse_u64("DETECTOR_REQUEST_TIMEOUT_SECS", DEFAULT_DETECT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("DETECTOR_CONNECT_TIMEOUT_SECS", DEFAULT_DETECT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { endpoint_url, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
