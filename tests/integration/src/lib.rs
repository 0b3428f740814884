//! Integration tests for the Pubstack server.
//!
//! These tests require a running server at `localhost:8080`.
//! They are marked `#[ignore]` so they don't run during normal `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p pubstack-integration -- --ignored
//! ```

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Endpoint URL for the server.
fn endpoint_url() -> String {
    std::env::var("PUBSTACK_ENDPOINT_URL").unwrap_or_else(|_| "http://localhost:8080".to_owned())
}

/// Create an HTTP client pointing at the local server.
#[must_use]
pub fn client() -> reqwest::Client {
    init_tracing();
    reqwest::Client::new()
}

/// URL of a path on the server under test.
#[must_use]
pub fn url(path: &str) -> String {
    format!("{}{path}", endpoint_url())
}

/// A complete, valid publication record used as the baseline input.
#[must_use]
pub fn valid_record() -> serde_json::Value {
    serde_json::json!({
        "Id": "doc-001",
        "Title": "Test Document",
        "CountryIds": ["US", "CA"],
        "PublishDate": "2024-06-15",
        "Status": 3,
        "TestRun": true,
        "ReportMetadata": {
            "Title": "Test Report",
            "ContactSection": [
                {
                    "ContactInformation": [
                        {
                            "ContactHeader": "Primary Contacts",
                            "Contacts": [
                                {
                                    "FirstName": "John",
                                    "LastName": "Doe",
                                    "Email": "john.doe@example.com",
                                    "Title": "Analyst",
                                    "PhoneNumber": "+1-555-123-4567",
                                    "Accreditation": "CFA"
                                }
                            ]
                        }
                    ]
                }
            ]
        }
    })
}

mod test_convert;
mod test_health;
