//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the detector client behind the [`Detect`] trait so route handlers
//! can be exercised against a mock in tests. There is nothing else to hold:
//! the app persists no entities, and the only transient UI state (preview
//! image, button gating) lives in the browser page.

use std::sync::Arc;

use crate::detector::Detect;

/// Shared application state. Clone is required by Axum — the detector is
/// Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<dyn Detect>,
}

impl AppState {
    #[must_use]
    pub fn new(detector: Arc<dyn Detect>) -> Self {
        Self { detector }
    }
}
