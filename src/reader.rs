//! Document Reader capability boundary for PDF parsing.
//!
//! Extraction never parses PDF bytes itself: it goes through the
//! [`DocumentReader`] trait, so the page-reconstruction logic in
//! [`crate::extract`] can be tested against a fake reader. The production
//! adapter wraps the `pdf-extract` crate.
//!
//! A reader is scoped to a single extraction call; no pooling or reuse of
//! opened documents across files is assumed.

use anyhow::{anyhow, Result};
use async_trait::async_trait;

/// One text item on a page.
///
/// Items without literal string content still occupy a slot, so the
/// within-page join stays aligned with the reader's item count.
#[derive(Debug, Clone, Default)]
pub struct PageItem {
    pub text: Option<String>,
}

impl PageItem {
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// An opened document exposing per-page text items.
#[async_trait]
pub trait ReaderDocument: Send + Sync {
    /// Total number of pages in the document.
    fn page_count(&self) -> usize;

    /// Text items for one page. Pages are 1-based through `page_count()`.
    async fn page_items(&self, page: usize) -> Result<Vec<PageItem>>;
}

/// Capability that turns a PDF byte buffer into a [`ReaderDocument`].
#[async_trait]
pub trait DocumentReader: Send + Sync {
    async fn open(&self, bytes: &[u8]) -> Result<Box<dyn ReaderDocument>>;
}

/// Production reader backed by `pdf-extract`.
///
/// `pdf-extract` yields one text run per page, so each page surfaces as a
/// single [`PageItem`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractReader;

struct ExtractedDocument {
    pages: Vec<String>,
}

#[async_trait]
impl ReaderDocument for ExtractedDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    async fn page_items(&self, page: usize) -> Result<Vec<PageItem>> {
        let text = page
            .checked_sub(1)
            .and_then(|i| self.pages.get(i))
            .ok_or_else(|| {
                anyhow!(
                    "page {} out of range (document has {} pages)",
                    page,
                    self.pages.len()
                )
            })?;
        Ok(vec![PageItem::literal(text.clone())])
    }
}

#[async_trait]
impl DocumentReader for PdfExtractReader {
    async fn open(&self, bytes: &[u8]) -> Result<Box<dyn ReaderDocument>> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| anyhow!("pdf parse failed: {}", e))?;
        Ok(Box::new(ExtractedDocument { pages }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn page_items_rejects_out_of_range_pages() {
        let doc = ExtractedDocument {
            pages: vec!["one".into(), "two".into()],
        };
        assert_eq!(doc.page_count(), 2);
        assert!(doc.page_items(0).await.is_err());
        assert!(doc.page_items(3).await.is_err());
        let items = doc.page_items(2).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text.as_deref(), Some("two"));
    }

    #[tokio::test]
    async fn open_rejects_garbage_bytes() {
        let err = PdfExtractReader.open(b"not a pdf").await;
        assert!(err.is_err());
    }
}
