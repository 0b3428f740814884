//! Conversion handler implementation for [`Converter`].
//!
//! Bridges the HTTP layer (`pubstack-http`) with the pipeline
//! (`pubstack-core`) by implementing the [`ConvertHandler`] trait.

use pubstack_core::Converter;
use pubstack_http::ConvertHandler;
use pubstack_model::{ConversionResult, InputDocument};

/// Wrapper that implements [`ConvertHandler`] by delegating to [`Converter`].
#[derive(Debug, Clone)]
pub struct PipelineHandler(pub Converter);

impl ConvertHandler for PipelineHandler {
    fn convert(&self, input: &InputDocument) -> ConversionResult {
        self.0.convert(input)
    }
}
