pub mod pdftotext;

use crate::error::SkeppaError;

/// Text fragments extracted from a single page of a PDF, in extraction
/// order. The segmenter never re-orders fragments; the line-offset
/// heuristics depend on this order.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub fragments: Vec<String>,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, SkeppaError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Join extracted pages into the single text blob the segmenter scans.
///
/// Fragments within a page are newline-joined and every page gets a trailing
/// newline, so the last fragment of page N and the first fragment of page
/// N+1 land on separate lines.
pub fn join_pages(pages: &[PageContent]) -> String {
    let mut text = String::new();
    for page in pages {
        text.push_str(&page.fragments.join("\n"));
        text.push('\n');
    }
    text
}
