//! Route resolution.

use http::Method;

/// The routes exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `POST /api/convert` — conversion result as JSON.
    Convert,
    /// `POST /api/convert/file` — XML document as a file attachment.
    ConvertFile,
    /// `GET /health` or `GET /_health` — health probe.
    Health,
    /// A known path with the wrong method.
    MethodNotAllowed,
    /// No matching route.
    NotFound,
}

/// Resolve a request's method and path to a route.
#[must_use]
pub fn resolve_route(method: &Method, path: &str) -> Route {
    match path {
        "/api/convert" => {
            if method == Method::POST {
                Route::Convert
            } else {
                Route::MethodNotAllowed
            }
        }
        "/api/convert/file" => {
            if method == Method::POST {
                Route::ConvertFile
            } else {
                Route::MethodNotAllowed
            }
        }
        "/health" | "/_health" => {
            if method == Method::GET {
                Route::Health
            } else {
                Route::MethodNotAllowed
            }
        }
        _ => Route::NotFound,
    }
}
