//! Conversion result types.

use serde::Serialize;

/// Outcome of one conversion call.
///
/// Business validation failures and internal faults both surface as
/// [`ConversionResult::Failure`]; the distinction is the message (verbatim
/// rule text for the former, a fixed generic message for the latter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    /// Conversion succeeded; carries the rendered XML document.
    Success {
        /// The complete XML document text.
        xml: String,
    },
    /// Conversion failed; carries a human-readable message.
    Failure {
        /// The failure message surfaced to the caller.
        message: String,
    },
}

impl ConversionResult {
    /// Build a success result.
    #[must_use]
    pub fn success(xml: impl Into<String>) -> Self {
        Self::Success { xml: xml.into() }
    }

    /// Build a failure result.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// Whether this result is a success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// JSON wire form of a [`ConversionResult`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    /// Whether the conversion succeeded.
    pub success: bool,
    /// Failure message, present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Rendered XML document, present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml_content: Option<String>,
}

impl From<ConversionResult> for ConversionResponse {
    fn from(result: ConversionResult) -> Self {
        match result {
            ConversionResult::Success { xml } => Self {
                success: true,
                error_message: None,
                xml_content: Some(xml),
            },
            ConversionResult::Failure { message } => Self {
                success: false,
                error_message: Some(message),
                xml_content: None,
            },
        }
    }
}
