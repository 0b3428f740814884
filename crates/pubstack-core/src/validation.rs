//! Business-rule validation for publication records.
//!
//! Three rules, checked in a fixed order with the first failure winning.
//! Validation is a pure function of the record and the configured cutoff
//! date; it has no side effects and performs no normalization.

use chrono::{NaiveDate, NaiveTime};

use pubstack_model::InputDocument;

use crate::error::ValidationError;

/// The only status code accepted for conversion.
const PUBLISHABLE_STATUS: i32 = 3;

/// Validate a publication record against the business rules.
///
/// Checks, in order:
/// 1. `status == 3`
/// 2. `publish_date >= cutoff` (inclusive; the cutoff is compared at midnight)
/// 3. `test_run == true`
///
/// # Errors
///
/// Returns the first failing rule's [`ValidationError`]; later rules are not
/// evaluated.
pub fn validate(input: &InputDocument, cutoff: NaiveDate) -> Result<(), ValidationError> {
    if input.status != PUBLISHABLE_STATUS {
        return Err(ValidationError::StatusNotPublishable);
    }

    if input.publish_date < cutoff.and_time(NaiveTime::MIN) {
        return Err(ValidationError::PublishDateBeforeCutoff { cutoff });
    }

    if !input.test_run {
        return Err(ValidationError::NotTestRun);
    }

    Ok(())
}
