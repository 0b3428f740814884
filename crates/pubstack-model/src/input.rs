//! The inbound publication record.
//!
//! Field names on the wire are PascalCase (the upstream feed convention);
//! each field also carries a camelCase alias so records produced by
//! camelCase-emitting tooling deserialize without a translation step.
//! Every contact field is optional in JSON and defaults to an empty string —
//! downstream filtering treats empty and absent identically.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::timestamp;

/// A document-publication record as parsed from the inbound JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputDocument {
    /// Upstream document identifier (used for log correlation only).
    #[serde(default, alias = "id")]
    pub id: String,
    /// Document title, copied verbatim into the output.
    #[serde(default, alias = "title")]
    pub title: String,
    /// Ordered country codes; duplicates and whitespace are preserved.
    #[serde(default, alias = "countryIds")]
    pub country_ids: Vec<String>,
    /// Publication timestamp.
    #[serde(with = "timestamp", alias = "publishDate")]
    pub publish_date: NaiveDateTime,
    /// Publication status code; only status 3 is convertible.
    #[serde(default, alias = "status")]
    pub status: i32,
    /// Whether this record is flagged for the production pipeline.
    #[serde(default, alias = "testRun")]
    pub test_run: bool,
    /// Nested report metadata carrying the contact sections.
    #[serde(default, alias = "reportMetadata")]
    pub report_metadata: ReportMetadata,
}

/// Report-level metadata attached to a publication record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportMetadata {
    /// Report title; not carried into the output document.
    #[serde(default, alias = "title")]
    pub title: String,
    /// Ordered contact sections.
    #[serde(default, alias = "contactSection")]
    pub contact_section: Vec<ContactSection>,
}

/// One section of the report's contact listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactSection {
    /// Ordered contact-information blocks within the section.
    #[serde(default, alias = "contactInformation")]
    pub contact_information: Vec<ContactInformation>,
}

/// A block of raw contacts under an optional header label.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactInformation {
    /// Header label; not carried into the output document.
    #[serde(default, alias = "contactHeader")]
    pub contact_header: String,
    /// Ordered raw contact entries.
    #[serde(default, alias = "contacts")]
    pub contacts: Vec<RawContact>,
}

/// One contact channel for one person-mention, not yet deduplicated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawContact {
    /// Given name; a trimmed-empty value excludes the entry from aggregation.
    #[serde(default, alias = "firstName")]
    pub first_name: String,
    /// Family name; a trimmed-empty value excludes the entry from aggregation.
    #[serde(default, alias = "lastName")]
    pub last_name: String,
    /// Email address for this channel; may be empty.
    #[serde(default, alias = "email")]
    pub email: String,
    /// Job title or role.
    #[serde(default, alias = "title")]
    pub title: String,
    /// Phone number for this channel; may be empty.
    #[serde(default, alias = "phoneNumber")]
    pub phone_number: String,
    /// Professional accreditation; not carried into the output document.
    #[serde(default, alias = "accreditation")]
    pub accreditation: String,
}
