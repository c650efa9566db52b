//! Detector types — wire structs for the externally-defined detection JSON,
//! plus errors and the mockable client trait.
//!
//! The response shape belongs to the remote service and is consumed as-is;
//! nothing here is created, mutated, or persisted by this app.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by detector client operations.
#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required endpoint environment variable is not set.
    #[error("missing detector endpoint: env var {var} not set")]
    MissingEndpoint { var: String },

    /// The HTTP request to the detection service failed.
    #[error("detect request failed: {0}")]
    ApiRequest(String),

    /// The detection service returned a non-success HTTP status.
    #[error("detect response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The detection service response body could not be deserialized.
    #[error("detect response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Corner coordinates of a detected region, in image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

/// Width/height/area of a detected region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: i64,
    pub height: i64,
    pub area: i64,
}

/// Center point of a detected region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Center {
    pub x: i64,
    pub y: i64,
}

/// A single detected region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    pub tumor_type: String,
    /// Model confidence in 0–1.
    pub confidence: f64,
    pub bbox: BoundingBox,
    pub dimensions: Dimensions,
    pub center: Center,
}

/// Full response from the detection endpoint.
///
/// `detections` defaults to empty and `annotated_image` to `None` so a
/// minimal no-tumor payload still deserializes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    pub tumor_detected: bool,
    pub message: String,
    /// Number of regions above the service's confidence floor.
    #[serde(default)]
    pub total_tumors: u32,
    /// Max confidence across detections, 0 when none.
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub detections: Vec<Detection>,
    /// Annotated copy of the upload as a `data:image/jpeg;base64,…` URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotated_image: Option<String>,
}

// =============================================================================
// DETECT TRAIT
// =============================================================================

/// Async trait for submitting an image to the detection service. Enables
/// mocking in route tests.
#[async_trait::async_trait]
pub trait Detect: Send + Sync {
    /// Submit one image and return the service's detection result.
    ///
    /// # Errors
    ///
    /// Returns a [`DetectorError`] if the request fails, the service answers
    /// with a non-success status, or the body is malformed.
    async fn detect(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<DetectionResult, DetectorError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
