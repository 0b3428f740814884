//! The aggregated person identity derived from raw contact entries.

/// One person, merged from every raw contact entry sharing the same
/// case-insensitive trimmed name key.
///
/// Display fields carry the verbatim (untrimmed, case-preserved) values of
/// the first raw contact encountered for the key; only the grouping key
/// itself is normalized. Phone and email lists preserve source order and
/// duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    /// Family name, verbatim from the first matching raw contact.
    pub family_name: String,
    /// Given name, verbatim from the first matching raw contact.
    pub given_name: String,
    /// `"{given} {family}"`, built from the verbatim values.
    pub display_name: String,
    /// Job title from the first matching raw contact.
    pub job_title: String,
    /// Non-empty phone numbers from every contact in the group, source order.
    pub phone_numbers: Vec<String>,
    /// Non-empty email addresses from every contact in the group, source order.
    pub email_addresses: Vec<String>,
}
