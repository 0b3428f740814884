//! Error types for the conversion pipeline.

use chrono::NaiveDate;

/// A business-rule validation failure.
///
/// The `Display` output of each variant is the exact message surfaced to the
/// caller; it is part of the service contract, not free-form diagnostics.
/// Validation failures are expected outcomes of the input — they are reported
/// as-is, never logged as error-level faults, and never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The record's status code is not the publishable status.
    #[error("Status must be equal to 3")]
    StatusNotPublishable,

    /// The record's publish date precedes the configured cutoff.
    #[error("Publish date must be on or after {cutoff}")]
    PublishDateBeforeCutoff {
        /// The configured cutoff date.
        cutoff: NaiveDate,
    },

    /// The record is not flagged for the production pipeline.
    #[error("TestRun must be true for production processing")]
    NotTestRun,
}

/// The message returned for internal faults, with no detail attached.
pub const INTERNAL_FAILURE_MESSAGE: &str = "An error occurred during XML conversion.";
