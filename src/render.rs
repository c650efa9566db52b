//! HTML report rendering.
//!
//! Turns a [`DetectionResult`] into the fragment the upload page injects into
//! its results section: status block, confidence bar, and a per-detection
//! breakdown. Pure string building so every template is unit-testable.

use std::fmt::Write;

use crate::detector::DetectionResult;
use crate::detector::types::Detection;

/// Render the full report fragment for one detection result.
#[must_use]
pub fn report(result: &DetectionResult) -> String {
    let status_class = if result.tumor_detected { "tumor-detected" } else { "no-tumor" };
    let confidence = percent(result.confidence);

    let mut html = String::new();

    if let Some(uri) = &result.annotated_image {
        let _ = write!(
            html,
            r#"<img class="annotated-image" src="{}" alt="Annotated scan">"#,
            escape(uri)
        );
    }

    let _ = write!(
        html,
        concat!(
            r#"<div class="result-status {}">"#,
            "<strong>{}</strong>",
            "<p>Total detections: {}</p>",
            "</div>"
        ),
        status_class,
        escape(&result.message),
        result.total_tumors
    );

    let _ = write!(
        html,
        concat!(
            r#"<div class="confidence-section">"#,
            r#"<div class="confidence-score">"#,
            "<p>Max Confidence: {p}%</p>",
            r#"<div class="confidence-bar"><div class="confidence-fill" style="width: {p}%"></div></div>"#,
            "</div>"
        ),
        p = confidence
    );

    if !result.detections.is_empty() {
        html.push_str(&detections_list(&result.detections));
    }

    html.push_str("</div>");
    html
}

/// Render the "Detection Details" list.
#[must_use]
pub fn detections_list(detections: &[Detection]) -> String {
    let mut html = String::from(r#"<div class="detections-list"><h4>Detection Details:</h4>"#);

    for (index, detection) in detections.iter().enumerate() {
        let _ = write!(
            html,
            concat!(
                r#"<div class="detection-item">"#,
                r#"<div class="detection-header">"#,
                "<strong>Detection {n}: {tumor_type}</strong>",
                r#"<span class="confidence-badge">{confidence}%</span>"#,
                "</div>",
                r#"<div class="detection-details">"#,
                "<p>Location: ({x1}, {y1}) to ({x2}, {y2})</p>",
                "<p>Dimensions: {width} \u{d7} {height} pixels</p>",
                "<p>Area: {area} px\u{b2}</p>",
                "<p>Center: ({cx}, {cy})</p>",
                "</div>",
                "</div>"
            ),
            n = index + 1,
            tumor_type = escape(&detection.tumor_type),
            confidence = percent(detection.confidence),
            x1 = detection.bbox.x1,
            y1 = detection.bbox.y1,
            x2 = detection.bbox.x2,
            y2 = detection.bbox.y2,
            width = detection.dimensions.width,
            height = detection.dimensions.height,
            area = detection.dimensions.area,
            cx = detection.center.x,
            cy = detection.center.y
        );
    }

    html.push_str("</div>");
    html
}

/// Format a 0–1 confidence as a percentage with two decimals.
fn percent(confidence: f64) -> String {
    format!("{:.2}", confidence * 100.0)
}

/// Minimal HTML escaping for text and attribute positions.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
