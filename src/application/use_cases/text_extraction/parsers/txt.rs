use super::super::{ExtractedText, TextExtractor};
use crate::domain::error::Result;

impl TextExtractor {
    /// Plain text is decoded as UTF-8 and passed through untouched
    pub(in crate::application::use_cases::text_extraction) fn parse_txt(
        &self,
        bytes: &[u8],
    ) -> Result<ExtractedText> {
        let text = String::from_utf8(bytes.to_vec())?;

        Ok(ExtractedText {
            text,
            page_count: 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::SoilDocument;
    use super::*;
    use crate::domain::error::AppError;

    #[test]
    fn test_plain_text_is_not_transformed() {
        let raw = "  Soil pH:6.8\r\n\tZinc 0.5  ";
        let extracted = TextExtractor::new(1024)
            .extract(&SoilDocument::PlainText(raw.as_bytes().to_vec()))
            .unwrap();
        assert_eq!(extracted.text, raw);
        assert_eq!(extracted.page_count, 1);
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let err = TextExtractor::new(1024)
            .extract(&SoilDocument::PlainText(vec![b'p', b'H', 0xc3, 0x28]))
            .unwrap_err();
        assert!(matches!(err, AppError::DecodeError(_)));
    }

    #[test]
    fn test_empty_text_is_blank_not_error() {
        let extracted = TextExtractor::new(1024)
            .extract(&SoilDocument::PlainText(Vec::new()))
            .unwrap();
        assert!(extracted.is_blank());
    }
}
