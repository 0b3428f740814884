//! The outbound document shape rendered to XML.
//!
//! These types mirror the `PublishedItem` XML structure one-to-one; the
//! element names and ordering live in `pubstack-xml`, which walks this graph
//! with an explicit writer.

use chrono::NaiveDateTime;

use crate::person::PersonRecord;

/// The normalized publication document distributed downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedDocument {
    /// Document title.
    pub title: String,
    /// Comma-joined country codes, exactly as given in the input.
    pub countries: String,
    /// Publication timestamp.
    pub published_date: NaiveDateTime,
    /// The single contact block.
    pub contact_information: ContactBlock,
}

/// The contact block wrapping the single person group.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactBlock {
    /// The one person group carried by every published document.
    pub person_group: PersonGroup,
}

/// A named, sequenced group of aggregated persons.
///
/// The sequence and name come from configuration, not from the input. An
/// empty `members` list is a valid state and still renders a group with an
/// empty member element.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonGroup {
    /// Group sequence number rendered as an XML attribute.
    pub sequence: i32,
    /// Group display name.
    pub name: String,
    /// Aggregated persons, in first-occurrence order.
    pub members: Vec<PersonRecord>,
}
