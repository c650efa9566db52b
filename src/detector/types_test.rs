use super::*;

#[test]
fn minimal_no_tumor_payload_deserializes() {
    let json = serde_json::json!({
        "tumor_detected": false,
        "message": "No brain tumor detected.",
        "total_tumors": 0,
        "confidence": 0,
        "detections": [],
        "annotated_image": null
    })
    .to_string();

    let result: DetectionResult = serde_json::from_str(&json).unwrap();
    assert!(!result.tumor_detected);
    assert_eq!(result.message, "No brain tumor detected.");
    assert_eq!(result.total_tumors, 0);
    assert!(result.confidence.abs() < f64::EPSILON);
    assert!(result.detections.is_empty());
    assert!(result.annotated_image.is_none());
}

#[test]
fn absent_optional_fields_default() {
    // A terse payload without detections or annotated_image still parses.
    let json = r#"{"tumor_detected": false, "message": "No brain tumor detected."}"#;
    let result: DetectionResult = serde_json::from_str(json).unwrap();
    assert!(result.detections.is_empty());
    assert_eq!(result.total_tumors, 0);
    assert!(result.confidence.abs() < f64::EPSILON);
    assert!(result.annotated_image.is_none());
}

#[test]
fn detection_record_fields_parse() {
    let json = serde_json::json!({
        "tumor_type": "glioma",
        "confidence": 0.87,
        "bbox": { "x1": 10, "y1": 20, "x2": 110, "y2": 170 },
        "dimensions": { "width": 100, "height": 150, "area": 15000 },
        "center": { "x": 60, "y": 95 }
    })
    .to_string();

    let detection: Detection = serde_json::from_str(&json).unwrap();
    assert_eq!(detection.tumor_type, "glioma");
    assert!((detection.confidence - 0.87).abs() < f64::EPSILON);
    assert_eq!(detection.bbox, BoundingBox { x1: 10, y1: 20, x2: 110, y2: 170 });
    assert_eq!(detection.dimensions, Dimensions { width: 100, height: 150, area: 15_000 });
    assert_eq!(detection.center, Center { x: 60, y: 95 });
}

#[test]
fn none_annotated_image_is_skipped_on_serialize() {
    let result = DetectionResult {
        tumor_detected: false,
        message: "No brain tumor detected.".into(),
        total_tumors: 0,
        confidence: 0.0,
        detections: vec![],
        annotated_image: None,
    };

    let value = serde_json::to_value(&result).unwrap();
    assert!(value.get("annotated_image").is_none());
}

#[test]
fn present_annotated_image_round_trips() {
    let result = DetectionResult {
        tumor_detected: true,
        message: "Brain tumor detected: 1 region(s) found.".into(),
        total_tumors: 1,
        confidence: 0.92,
        detections: vec![],
        annotated_image: Some("data:image/jpeg;base64,AAAA".into()),
    };

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value.get("annotated_image").and_then(|v| v.as_str()),
        Some("data:image/jpeg;base64,AAAA")
    );
}
