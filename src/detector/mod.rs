//! Detector — client for the external brain-tumor detection service.
//!
//! DESIGN
//! ======
//! The detection model and its inference server are entirely external; this
//! module is the thin HTTP client consuming them. One operation: post an
//! uploaded image as a multipart body, get back the detection JSON. The wire
//! shape is defined by the remote service and passed through verbatim.

pub mod client;
pub mod config;
pub mod types;

pub use client::DetectorClient;
pub use types::{Detect, DetectionResult, DetectorError};
