//! Image analysis route.
//!
//! `POST /api/detect` accepts a multipart body with an `image` part, forwards
//! it to the external detection service, and answers with either the
//! detection JSON verbatim or a rendered HTML report fragment, depending on
//! the `Accept` header. The upload page sends `Accept: text/html` and injects
//! the fragment as-is.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::http::header::{ACCEPT, HeaderMap};
use axum::response::{Html, IntoResponse, Json, Response};

use crate::detector::{DetectionResult, DetectorError};
use crate::render;
use crate::state::AppState;

/// Multipart part name the upload page sends; forwarded under the same name.
const IMAGE_PART: &str = "image";

type ErrorBody = (StatusCode, Json<serde_json::Value>);

/// `POST /api/detect` — submit an image for analysis.
pub async fn detect(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<Response, ErrorBody> {
    let upload = read_image_part(multipart).await?;

    let result = state
        .detector
        .detect(&upload.file_name, &upload.content_type, upload.bytes)
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "detection request failed");
            error_body(detector_error_to_status(&err), "Analysis failed. Please try again.")
        })?;

    Ok(success_response(result, wants_html(&headers)))
}

#[derive(Debug)]
struct ImageUpload {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

/// Pull the `image` part out of the multipart body.
async fn read_image_part(mut multipart: Multipart) -> Result<ImageUpload, ErrorBody> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| error_body(StatusCode::BAD_REQUEST, "No image uploaded"))?
    {
        if field.name() != Some(IMAGE_PART) {
            continue;
        }

        let content_type = field.content_type().map(str::to_owned);
        if !is_image_content_type(content_type.as_deref()) {
            return Err(error_body(StatusCode::BAD_REQUEST, "Please upload an image file"));
        }

        let file_name = field.file_name().unwrap_or("upload").to_owned();
        let bytes = field
            .bytes()
            .await
            .map_err(|_| error_body(StatusCode::BAD_REQUEST, "No image uploaded"))?;

        return Ok(ImageUpload {
            file_name,
            // is_image_content_type rejected None above.
            content_type: content_type.unwrap_or_default(),
            bytes: bytes.to_vec(),
        });
    }

    Err(error_body(StatusCode::BAD_REQUEST, "No image uploaded"))
}

fn success_response(result: DetectionResult, as_html: bool) -> Response {
    if as_html {
        Html(render::report(&result)).into_response()
    } else {
        Json(result).into_response()
    }
}

fn error_body(status: StatusCode, message: &str) -> ErrorBody {
    (status, Json(serde_json::json!({ "error": message })))
}

/// MIME-type check is the only upload validation performed; the image is
/// never decoded here.
fn is_image_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.starts_with("image/"))
}

fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Single undifferentiated failure surface: whatever went wrong upstream, the
/// client gets a generic bad-gateway answer.
pub(crate) fn detector_error_to_status(_err: &DetectorError) -> StatusCode {
    StatusCode::BAD_GATEWAY
}

#[cfg(test)]
#[path = "detect_test.rs"]
mod tests;
