use crate::domain::error::{AppError, Result};

use tracing::{debug, info};

mod parsers;
mod types;

pub use parsers::PdfPages;
pub use types::{ExtractedText, PagedSource, SoilDocument};

/// Flattens a document into one text blob
#[derive(Debug, Clone)]
pub struct TextExtractor {
    max_document_bytes: usize,
}

impl TextExtractor {
    pub fn new(max_document_bytes: usize) -> Self {
        Self { max_document_bytes }
    }

    pub fn extract(&self, document: &SoilDocument) -> Result<ExtractedText> {
        if let SoilDocument::Unsupported(kind) = document {
            return Err(AppError::UnsupportedFormat(kind.clone()));
        }

        let size = document.byte_len();
        if size > self.max_document_bytes {
            return Err(AppError::DocumentTooLarge(format!(
                "{} bytes exceeds limit of {} bytes",
                size, self.max_document_bytes
            )));
        }

        info!(kind = document.kind(), bytes = size, "Extracting document text");

        let extracted = match document {
            SoilDocument::PlainText(bytes) => self.parse_txt(bytes)?,
            SoilDocument::Pdf(bytes) => self.parse_pdf(bytes)?,
            SoilDocument::Unsupported(_) => unreachable!(),
        };

        debug!(
            pages = extracted.page_count,
            chars = extracted.text.chars().count(),
            "Extracted document text"
        );
        Ok(extracted)
    }
}

/// Concatenates page texts in order, one newline between pages.
///
/// Pages without a text layer contribute an empty string.
pub fn flatten_pages(source: &dyn PagedSource) -> String {
    (0..source.page_count())
        .map(|index| source.page_text(index).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n")
}
