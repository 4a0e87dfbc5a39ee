pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod shipping;
pub mod state;

use error::SkeppaError;
use extraction::PdfExtractor;
use model::ParsedForecast;
use parsing::SegmentOptions;

/// Main API entry point: extract per-part forecast records from an EDI
/// shipment-forecast PDF.
///
/// Extraction I/O failures propagate; everything after the text boundary
/// is best-effort and degrades to defaulted fields plus warnings.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    options: &SegmentOptions,
) -> Result<ParsedForecast, SkeppaError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let text = extraction::join_pages(&pages);
    Ok(parsing::segment(&text, options))
}

/// Segment already-extracted document text. Useful when the text comes
/// from somewhere other than the bundled pdftotext backend.
pub fn extract_text(text: &str, options: &SegmentOptions) -> ParsedForecast {
    parsing::segment(text, options)
}
