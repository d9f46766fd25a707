use super::super::{flatten_pages, ExtractedText, PagedSource, TextExtractor};
use crate::domain::error::{AppError, Result};

use lopdf::Document;
use tracing::{debug, warn};

/// Pages of a loaded PDF, in page-number order
pub struct PdfPages {
    document: Document,
    page_numbers: Vec<u32>,
}

impl PdfPages {
    pub fn load(bytes: &[u8]) -> Result<Self> {
        let document = Document::load_mem(bytes)
            .map_err(|e| AppError::UnreadableDocument(format!("Failed to load PDF: {}", e)))?;
        // get_pages is keyed by page number, so iteration is already ordered
        let page_numbers = document.get_pages().into_keys().collect();
        Ok(Self {
            document,
            page_numbers,
        })
    }
}

impl PagedSource for PdfPages {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Option<String> {
        let page_number = *self.page_numbers.get(index)?;
        match self.document.extract_text(&[page_number]) {
            Ok(text) => Some(text),
            Err(e) => {
                debug!(page = page_number, error = %e, "No text layer on page");
                None
            }
        }
    }
}

impl TextExtractor {
    pub(in crate::application::use_cases::text_extraction) fn parse_pdf(
        &self,
        bytes: &[u8],
    ) -> Result<ExtractedText> {
        let pages = PdfPages::load(bytes)?;
        let page_count = pages.page_count();
        let text = flatten_pages(&pages);

        if text.trim().is_empty() {
            // Scanned cards land here; OCR is not attempted
            warn!(pages = page_count, "PDF has no extractable text layer");
        }

        Ok(ExtractedText { text, page_count })
    }
}
