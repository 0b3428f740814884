//! The conversion orchestrator.

use pubstack_model::{ConversionResult, InputDocument};

use crate::config::PublishConfig;
use crate::contacts::collect_persons;
use crate::error::INTERNAL_FAILURE_MESSAGE;
use crate::map::map_document;
use crate::validation::validate;

/// Sequences the conversion pipeline: validate → aggregate → map → serialize.
///
/// Holds the immutable service configuration; one instance serves every
/// request for the process lifetime. The pipeline itself allocates a fresh
/// model graph per call and keeps no state, so `&self` conversion is safe
/// from any number of concurrent tasks.
#[derive(Debug, Clone)]
pub struct Converter {
    config: PublishConfig,
}

impl Converter {
    /// Create a converter over the given configuration.
    #[must_use]
    pub fn new(config: PublishConfig) -> Self {
        Self { config }
    }

    /// The configuration this converter was built with.
    #[must_use]
    pub fn config(&self) -> &PublishConfig {
        &self.config
    }

    /// Convert a publication record into its XML representation.
    ///
    /// Business validation failures short-circuit the pipeline and surface
    /// the rule's message verbatim. A serialization fault is logged here with
    /// full detail and surfaced only as a generic failure message — internal
    /// detail never reaches the caller. Conversion is all-or-nothing and
    /// deterministic; identical input and configuration produce identical
    /// XML.
    #[must_use]
    pub fn convert(&self, input: &InputDocument) -> ConversionResult {
        if let Err(rule) = validate(input, self.config.cutoff_date) {
            return ConversionResult::failure(rule.to_string());
        }

        let persons = collect_persons(&input.report_metadata.contact_section);
        let document = map_document(input, persons, &self.config.person_group);

        match pubstack_xml::to_xml(&document) {
            Ok(xml) => ConversionResult::success(xml),
            Err(e) => {
                tracing::error!(document_id = %input.id, error = %e, "XML serialization failed");
                ConversionResult::failure(INTERNAL_FAILURE_MESSAGE)
            }
        }
    }
}
