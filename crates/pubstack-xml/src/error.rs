//! XML serialization error types.

use std::io;

/// Errors that can occur while writing the published-document XML.
///
/// These are internal faults: the conversion orchestrator catches them at its
/// boundary and surfaces a generic failure message, never the detail.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// The rendered document was not valid UTF-8.
    #[error("rendered XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
