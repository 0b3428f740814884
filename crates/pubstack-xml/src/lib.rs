//! XML serialization for the Pubstack published-document format.
//!
//! This crate renders a [`pubstack_model::PublishedDocument`] into the
//! `PublishedItem` XML distributed downstream. The output is a file-format
//! contract: element names, element order, the `sequence` attribute, and the
//! empty-member form are all load-bearing for consumers that parse the
//! document structurally.
//!
//! # Conventions
//!
//! - XML declaration: `<?xml version="1.0" encoding="UTF-8"?>`
//! - Pretty-printed with 4-space indentation
//! - Timestamps: unzoned seconds precision (`2024-06-15T00:00:00`)
//! - An empty person list renders `<PersonGroupMember/>`, never omits it

pub mod error;
pub mod serialize;

pub use error::XmlError;
pub use serialize::{XmlSerialize, to_xml};
