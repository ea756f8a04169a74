//! Text extraction: classified file bytes → one flat text buffer.
//!
//! TXT and MD share a single verbatim decode path; neither needs structural
//! parsing. PDF reconstruction walks pages in increasing order through the
//! [`DocumentReader`] capability, joining each page's item strings with a
//! single space and pages with a blank line (`\n\n`).
//!
//! Extraction is all-or-nothing: a failure on any page discards the pages
//! already reconstructed.

use crate::models::FileKind;
use crate::reader::DocumentReader;

/// Extraction failure taxonomy. No step retries; every failure is terminal
/// for that call.
#[derive(Debug)]
pub enum ExtractError {
    /// MIME type and extension both failed to map to a known kind.
    UnrecognizedType { mime: String, name: String },
    /// PDF extraction was requested but no Document Reader capability is
    /// wired into the current execution context.
    EnvironmentUnavailable,
    /// The Document Reader itself failed (malformed PDF, corrupt stream).
    /// Carries the reader's message unmasked.
    DocumentRead(String),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::UnrecognizedType { mime, name } => {
                write!(f, "unsupported file type: {:?} (name: {:?})", mime, name)
            }
            ExtractError::EnvironmentUnavailable => {
                write!(
                    f,
                    "PDF extraction is unavailable in this execution context"
                )
            }
            ExtractError::DocumentRead(e) => write!(f, "document reader failed: {}", e),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Produce the flat text buffer for a classified file.
///
/// `reader` is the PDF capability for this call; pass `None` in contexts
/// that cannot run one, and PDF files fail with
/// [`ExtractError::EnvironmentUnavailable`].
pub async fn extract_text(
    bytes: &[u8],
    kind: FileKind,
    reader: Option<&dyn DocumentReader>,
) -> Result<String, ExtractError> {
    match kind {
        FileKind::Txt | FileKind::Md => Ok(String::from_utf8_lossy(bytes).into_owned()),
        FileKind::Pdf => {
            let reader = reader.ok_or(ExtractError::EnvironmentUnavailable)?;
            extract_pdf(bytes, reader).await
        }
    }
}

async fn extract_pdf(bytes: &[u8], reader: &dyn DocumentReader) -> Result<String, ExtractError> {
    let doc = reader
        .open(bytes)
        .await
        .map_err(|e| ExtractError::DocumentRead(e.to_string()))?;

    let mut pages = Vec::with_capacity(doc.page_count());
    for page in 1..=doc.page_count() {
        let items = doc
            .page_items(page)
            .await
            .map_err(|e| ExtractError::DocumentRead(e.to_string()))?;
        // Items without a literal string contribute an empty slot, keeping
        // the join aligned with the reader's item count.
        let page_text = items
            .iter()
            .map(|item| item.text.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" ");
        pages.push(page_text);
    }

    Ok(pages.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{PageItem, ReaderDocument};
    use anyhow::{bail, Result};
    use async_trait::async_trait;

    /// Fake reader returning canned per-page items.
    struct FakeReader {
        pages: Vec<Vec<PageItem>>,
    }

    struct FakeDocument {
        pages: Vec<Vec<PageItem>>,
    }

    #[async_trait]
    impl DocumentReader for FakeReader {
        async fn open(&self, _bytes: &[u8]) -> Result<Box<dyn ReaderDocument>> {
            Ok(Box::new(FakeDocument {
                pages: self.pages.clone(),
            }))
        }
    }

    #[async_trait]
    impl ReaderDocument for FakeDocument {
        fn page_count(&self) -> usize {
            self.pages.len()
        }

        async fn page_items(&self, page: usize) -> Result<Vec<PageItem>> {
            Ok(self.pages[page - 1].clone())
        }
    }

    /// Reader whose open always fails, as with a corrupt stream.
    struct BrokenReader;

    #[async_trait]
    impl DocumentReader for BrokenReader {
        async fn open(&self, _bytes: &[u8]) -> Result<Box<dyn ReaderDocument>> {
            bail!("xref table is corrupt")
        }
    }

    #[tokio::test]
    async fn txt_and_md_decode_verbatim() {
        let body = "# Title\n\nSome *markdown* text.";
        let txt = extract_text(body.as_bytes(), FileKind::Txt, None)
            .await
            .unwrap();
        let md = extract_text(body.as_bytes(), FileKind::Md, None)
            .await
            .unwrap();
        assert_eq!(txt, body);
        assert_eq!(md, body);
    }

    #[tokio::test]
    async fn pdf_pages_join_with_blank_line_and_items_with_space() {
        let reader = FakeReader {
            pages: vec![
                vec![PageItem::literal("Hello"), PageItem::literal("world")],
                vec![PageItem::literal("second page")],
            ],
        };
        let text = extract_text(b"%PDF-", FileKind::Pdf, Some(&reader))
            .await
            .unwrap();
        assert_eq!(text, "Hello world\n\nsecond page");
    }

    #[tokio::test]
    async fn items_without_literal_text_contribute_empty_strings() {
        let reader = FakeReader {
            pages: vec![vec![
                PageItem::literal("a"),
                PageItem::default(),
                PageItem::literal("b"),
            ]],
        };
        let text = extract_text(b"%PDF-", FileKind::Pdf, Some(&reader))
            .await
            .unwrap();
        assert_eq!(text, "a  b");
    }

    #[tokio::test]
    async fn empty_document_extracts_to_empty_buffer() {
        let reader = FakeReader { pages: vec![] };
        let text = extract_text(b"%PDF-", FileKind::Pdf, Some(&reader))
            .await
            .unwrap();
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn pdf_without_reader_is_environment_unavailable() {
        let err = extract_text(b"%PDF-", FileKind::Pdf, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::EnvironmentUnavailable));
    }

    #[tokio::test]
    async fn reader_failure_propagates_message() {
        let err = extract_text(b"%PDF-", FileKind::Pdf, Some(&BrokenReader))
            .await
            .unwrap_err();
        match err {
            ExtractError::DocumentRead(msg) => assert!(msg.contains("xref table is corrupt")),
            other => panic!("expected DocumentRead, got {:?}", other),
        }
    }
}
