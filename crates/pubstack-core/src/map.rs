//! Structural mapping from the validated input to the output document.

use pubstack_model::{ContactBlock, InputDocument, PersonGroup, PersonRecord, PublishedDocument};

use crate::config::PersonGroupConfig;

/// Map a validated record plus its aggregated persons into the output shape.
///
/// Title and publish date are copied verbatim; country codes are joined with
/// `,` exactly as given (no trimming, no deduplication — an empty list yields
/// an empty string); the persons are wrapped under the single configured
/// group. No validation happens here — the record is assumed to have passed
/// [`crate::validation::validate`] already.
#[must_use]
pub fn map_document(
    input: &InputDocument,
    persons: Vec<PersonRecord>,
    group: &PersonGroupConfig,
) -> PublishedDocument {
    PublishedDocument {
        title: input.title.clone(),
        countries: input.country_ids.join(","),
        published_date: input.publish_date,
        contact_information: ContactBlock {
            person_group: PersonGroup {
                sequence: group.sequence,
                name: group.name.clone(),
                members: persons,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pubstack_model::ReportMetadata;
    use pubstack_model::timestamp::parse_timestamp;

    fn record(countries: &[&str]) -> InputDocument {
        InputDocument {
            id: "doc-001".to_owned(),
            title: "Test Document".to_owned(),
            country_ids: countries.iter().map(|c| (*c).to_owned()).collect(),
            publish_date: parse_timestamp("2024-06-15").expect("valid date"),
            status: 3,
            test_run: true,
            report_metadata: ReportMetadata::default(),
        }
    }

    #[test]
    fn test_should_copy_title_and_date_verbatim() {
        let doc = map_document(&record(&["US"]), Vec::new(), &PersonGroupConfig::default());
        assert_eq!(doc.title, "Test Document");
        assert_eq!(doc.published_date, parse_timestamp("2024-06-15").expect("valid date"));
    }

    #[test]
    fn test_should_join_countries_literally() {
        let doc = map_document(
            &record(&["US", " CA", "US"]),
            Vec::new(),
            &PersonGroupConfig::default(),
        );
        // No trimming, no deduplication.
        assert_eq!(doc.countries, "US, CA,US");
    }

    #[test]
    fn test_should_join_empty_country_list_to_empty_string() {
        let doc = map_document(&record(&[]), Vec::new(), &PersonGroupConfig::default());
        assert_eq!(doc.countries, "");
    }

    #[test]
    fn test_should_apply_group_config() {
        let group = PersonGroupConfig {
            sequence: 7,
            name: "Desk Contacts".to_owned(),
        };
        let doc = map_document(&record(&["US"]), Vec::new(), &group);
        assert_eq!(doc.contact_information.person_group.sequence, 7);
        assert_eq!(doc.contact_information.person_group.name, "Desk Contacts");
        assert!(doc.contact_information.person_group.members.is_empty());
    }
}
