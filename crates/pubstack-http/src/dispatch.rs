//! The seam between the HTTP layer and the conversion pipeline.

use pubstack_model::{ConversionResult, InputDocument};

/// Handler for conversion requests.
///
/// The HTTP service is generic over this trait so it can be driven by the
/// real pipeline in the server binary and by lightweight fakes in tests.
/// Conversion is synchronous: the pipeline is a bounded in-memory
/// computation with no suspension points.
pub trait ConvertHandler: Send + Sync + 'static {
    /// Convert a parsed publication record.
    fn convert(&self, input: &InputDocument) -> ConversionResult;
}
