use std::path::Path;

use crate::domain::error::Result;

/// A document handed over by the host application
#[derive(Debug, Clone, PartialEq)]
pub enum SoilDocument {
    /// Raw bytes to be decoded as UTF-8
    PlainText(Vec<u8>),
    /// Raw bytes of a PDF with (hopefully) a text layer
    Pdf(Vec<u8>),
    /// Anything else; carries the declared kind for error reporting
    Unsupported(String),
}

impl SoilDocument {
    /// Reads a file, choosing the document kind from its extension.
    ///
    /// Unsupported extensions are not read at all.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();

        let document = match extension.as_str() {
            "txt" | "text" | "md" => SoilDocument::PlainText(std::fs::read(path)?),
            "pdf" => SoilDocument::Pdf(std::fs::read(path)?),
            "" => SoilDocument::Unsupported("unknown".to_string()),
            other => SoilDocument::Unsupported(other.to_string()),
        };
        Ok(document)
    }

    pub fn kind(&self) -> &str {
        match self {
            SoilDocument::PlainText(_) => "txt",
            SoilDocument::Pdf(_) => "pdf",
            SoilDocument::Unsupported(kind) => kind,
        }
    }

    pub fn byte_len(&self) -> usize {
        match self {
            SoilDocument::PlainText(bytes) | SoilDocument::Pdf(bytes) => bytes.len(),
            SoilDocument::Unsupported(_) => 0,
        }
    }
}

/// A source exposing ordered pages, each with an optional text layer
pub trait PagedSource {
    fn page_count(&self) -> usize;

    /// `None` when the page has no extractable text layer
    fn page_text(&self, index: usize) -> Option<String>;
}

/// Linear text of a whole document
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
}

impl ExtractedText {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
