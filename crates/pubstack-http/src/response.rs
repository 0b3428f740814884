//! HTTP response builders.

use http::StatusCode;
use pubstack_model::ConversionResponse;

use crate::body::ResponseBody;

/// Filename used for the XML attachment on the file route.
pub const ATTACHMENT_FILENAME: &str = "converted.xml";

/// Build a JSON response from a conversion response payload.
///
/// Falls back to a bare 500 if the payload itself cannot be serialized,
/// which would be a defect in the response types rather than a runtime
/// condition.
#[must_use]
pub fn json_response(status: StatusCode, payload: &ConversionResponse) -> http::Response<ResponseBody> {
    match serde_json::to_vec(payload) {
        Ok(body) => http::Response::builder()
            .status(status)
            .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .body(ResponseBody::from_bytes(body))
            .unwrap_or_else(|_| plain_error_response()),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize response payload");
            plain_error_response()
        }
    }
}

/// Build an error JSON response carrying only a failure message.
#[must_use]
pub fn error_response(status: StatusCode, message: &str) -> http::Response<ResponseBody> {
    let payload = ConversionResponse {
        success: false,
        error_message: Some(message.to_owned()),
        xml_content: None,
    };
    json_response(status, &payload)
}

/// Build the XML file-download response for the file route.
#[must_use]
pub fn xml_attachment_response(xml: String) -> http::Response<ResponseBody> {
    http::Response::builder()
        .status(StatusCode::OK)
        .header(http::header::CONTENT_TYPE, "application/xml")
        .header(
            http::header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{ATTACHMENT_FILENAME}\""),
        )
        .body(ResponseBody::from_bytes(xml))
        .unwrap_or_else(|_| plain_error_response())
}

/// Build the health probe response.
#[must_use]
pub fn health_response() -> http::Response<ResponseBody> {
    let body = format!(
        r#"{{"status":"running","version":"{}"}}"#,
        env!("CARGO_PKG_VERSION"),
    );
    http::Response::builder()
        .status(StatusCode::OK)
        .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
        .body(ResponseBody::from_bytes(body))
        .unwrap_or_else(|_| plain_error_response())
}

/// Last-resort response when a builder fails; carries no body.
fn plain_error_response() -> http::Response<ResponseBody> {
    let mut response = http::Response::new(ResponseBody::empty());
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}
