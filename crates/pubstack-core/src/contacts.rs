//! Contact aggregation: merging raw contact entries into person records.
//!
//! Upstream feeds repeat a person once per contact channel (one entry for the
//! phone number, another for the email, possibly spread across sections).
//! Aggregation collapses those repetitions into one [`PersonRecord`] per
//! person while preserving the order in which people first appear.
//!
//! The grouping structure is a `Vec` of accumulating records plus a
//! key-to-index map: the map gives O(1) membership lookup, the vec pins
//! first-seen order. A plain hash map alone would lose the source-order
//! guarantee.

use std::collections::HashMap;

use pubstack_model::{ContactSection, PersonRecord, RawContact};

/// Aggregate the raw contacts of all sections into ordered person records.
///
/// The contact stream is flattened depth-first (sections → contact-information
/// blocks → contacts) with source order preserved. Entries whose trimmed
/// first or last name is empty are dropped entirely — they contribute no
/// channels to any person. For each distinct case-insensitive trimmed
/// "first last" key, the display fields come verbatim from the first entry
/// seen, and every entry's non-empty phone number and email address is
/// appended in source order, duplicates included.
///
/// An input with no valid contacts yields an empty vec, never an error.
#[must_use]
pub fn collect_persons(sections: &[ContactSection]) -> Vec<PersonRecord> {
    let mut persons: Vec<PersonRecord> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    let contacts = sections
        .iter()
        .flat_map(|section| &section.contact_information)
        .flat_map(|info| &info.contacts);

    for contact in contacts {
        let Some(key) = grouping_key(contact) else {
            continue;
        };

        let index = *index_by_key.entry(key).or_insert_with(|| {
            persons.push(new_person(contact));
            persons.len() - 1
        });

        let person = &mut persons[index];
        if !contact.phone_number.is_empty() {
            person.phone_numbers.push(contact.phone_number.clone());
        }
        if !contact.email.is_empty() {
            person.email_addresses.push(contact.email.clone());
        }
    }

    persons
}

/// Build the normalized grouping key for a contact, or `None` if the entry
/// has no usable name and must be excluded.
fn grouping_key(contact: &RawContact) -> Option<String> {
    let first = contact.first_name.trim();
    let last = contact.last_name.trim();
    if first.is_empty() || last.is_empty() {
        return None;
    }
    Some(format!("{} {}", first.to_lowercase(), last.to_lowercase()))
}

/// Start a person record from the first contact seen for a key.
///
/// Display values are carried verbatim — untrimmed and case-preserved — even
/// though the key is normalized.
fn new_person(contact: &RawContact) -> PersonRecord {
    PersonRecord {
        family_name: contact.last_name.clone(),
        given_name: contact.first_name.clone(),
        display_name: format!("{} {}", contact.first_name, contact.last_name),
        job_title: contact.title.clone(),
        phone_numbers: Vec::new(),
        email_addresses: Vec::new(),
    }
}
