//! Pubstack HTTP service implementing the hyper `Service` trait.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http::StatusCode;
use http_body_util::BodyExt;
use hyper::body::Incoming;

use pubstack_model::{ConversionResponse, ConversionResult, InputDocument};

use crate::body::ResponseBody;
use crate::dispatch::ConvertHandler;
use crate::response::{error_response, health_response, json_response, xml_attachment_response};
use crate::router::{Route, resolve_route};

/// Hyper `Service` implementation for the conversion API.
///
/// Wraps a [`ConvertHandler`] and routes incoming HTTP requests to it. The
/// handler is shared across connections behind an `Arc`; the service itself
/// is cheap to clone per connection.
#[derive(Debug)]
pub struct PublishHttpService<H: ConvertHandler> {
    handler: Arc<H>,
}

impl<H: ConvertHandler> PublishHttpService<H> {
    /// Create a new service around a conversion handler.
    pub fn new(handler: H) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
}

impl<H: ConvertHandler> Clone for PublishHttpService<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<H: ConvertHandler> hyper::service::Service<http::Request<Incoming>>
    for PublishHttpService<H>
{
    type Response = http::Response<ResponseBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<Incoming>) -> Self::Future {
        let handler = Arc::clone(&self.handler);
        let request_id = uuid::Uuid::new_v4().to_string();

        Box::pin(async move {
            let (parts, incoming) = req.into_parts();

            let response = match incoming.collect().await {
                Ok(collected) => {
                    process_request(&parts, collected.to_bytes(), handler.as_ref())
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to read request body");
                    error_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Failed to read the request body.",
                    )
                }
            };

            Ok(add_common_headers(response, &request_id))
        })
    }
}

/// Process a single request through routing, parsing, and conversion.
///
/// Split from the hyper glue so tests can drive it with plain parts and
/// bytes.
pub fn process_request<H: ConvertHandler>(
    parts: &http::request::Parts,
    body: Bytes,
    handler: &H,
) -> http::Response<ResponseBody> {
    match resolve_route(&parts.method, parts.uri.path()) {
        Route::Convert => convert_to_json(&body, handler),
        Route::ConvertFile => convert_to_file(&body, handler),
        Route::Health => health_response(),
        Route::MethodNotAllowed => {
            error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed.")
        }
        Route::NotFound => error_response(StatusCode::NOT_FOUND, "Not found."),
    }
}

/// `POST /api/convert`: respond with the conversion result as JSON.
fn convert_to_json<H: ConvertHandler>(body: &Bytes, handler: &H) -> http::Response<ResponseBody> {
    let input = match parse_input(body) {
        Ok(input) => input,
        Err(response) => return *response,
    };

    let result = run_conversion(&input, handler);
    let status = if result.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    json_response(status, &ConversionResponse::from(result))
}

/// `POST /api/convert/file`: respond with the XML document as an attachment.
fn convert_to_file<H: ConvertHandler>(body: &Bytes, handler: &H) -> http::Response<ResponseBody> {
    let input = match parse_input(body) {
        Ok(input) => input,
        Err(response) => return *response,
    };

    match run_conversion(&input, handler) {
        ConversionResult::Success { xml } => xml_attachment_response(xml),
        failure @ ConversionResult::Failure { .. } => {
            json_response(StatusCode::BAD_REQUEST, &ConversionResponse::from(failure))
        }
    }
}

/// Parse the request body into a publication record.
///
/// A malformed body is a client error, answered before the pipeline runs.
fn parse_input(body: &Bytes) -> Result<InputDocument, Box<http::Response<ResponseBody>>> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "rejecting malformed request body");
        Box::new(error_response(
            StatusCode::BAD_REQUEST,
            "Invalid JSON format in the request body.",
        ))
    })
}

/// Invoke the handler and log the outcome.
fn run_conversion<H: ConvertHandler>(input: &InputDocument, handler: &H) -> ConversionResult {
    tracing::info!(document_id = %input.id, "starting XML conversion");
    let result = handler.convert(input);

    match &result {
        ConversionResult::Success { .. } => {
            tracing::info!(document_id = %input.id, "XML conversion completed");
        }
        ConversionResult::Failure { message } => {
            tracing::warn!(document_id = %input.id, reason = %message, "XML conversion failed");
        }
    }

    result
}

/// Add common response headers to every response.
fn add_common_headers(
    mut response: http::Response<ResponseBody>,
    request_id: &str,
) -> http::Response<ResponseBody> {
    let headers = response.headers_mut();

    if let Ok(hv) = http::HeaderValue::from_str(request_id) {
        headers.insert("x-request-id", hv);
    }
    headers.insert("server", http::HeaderValue::from_static("Pubstack"));

    response
}
