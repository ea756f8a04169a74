//! MIME + file-name classification into a [`FileKind`].
//!
//! Declared MIME types from browser and OS file pickers are unreliable for
//! Markdown (`.md` files are often reported as `text/plain`), so the file
//! name is consulted as a tie-breaker before falling back to extension-only
//! matching for exotic or missing MIME types.

use crate::models::FileKind;

/// Canonical MIME types for the accepted kinds.
pub const MIME_PDF: &str = "application/pdf";
pub const MIME_TXT: &str = "text/plain";
pub const MIME_MD: &str = "text/markdown";

/// File extensions the ingestion pipeline accepts.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "txt", "md"];

/// Classify a file from its declared MIME type and name.
///
/// Ordered rules, first match wins:
/// 1. `application/pdf` → PDF, regardless of name.
/// 2. `text/plain` → MD when the name ends with `.md` (case-insensitive),
///    otherwise TXT.
/// 3. `text/markdown` → MD.
/// 4. Fallback: match the name's extension (after the last `.`) alone.
///
/// Returns `None` when nothing matches. Content bytes are never consulted.
pub fn resolve_kind(mime: &str, name: &str) -> Option<FileKind> {
    if mime == MIME_PDF {
        return Some(FileKind::Pdf);
    }
    if mime == MIME_TXT {
        if name.to_lowercase().ends_with(".md") {
            return Some(FileKind::Md);
        }
        return Some(FileKind::Txt);
    }
    if mime == MIME_MD {
        return Some(FileKind::Md);
    }

    match name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .as_deref()
    {
        Some("pdf") => Some(FileKind::Pdf),
        Some("txt") => Some(FileKind::Txt),
        Some("md") => Some(FileKind::Md),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_mime_wins_regardless_of_name() {
        assert_eq!(resolve_kind(MIME_PDF, "notes.txt"), Some(FileKind::Pdf));
        assert_eq!(resolve_kind(MIME_PDF, "noext"), Some(FileKind::Pdf));
        assert_eq!(resolve_kind(MIME_PDF, "report.pdf"), Some(FileKind::Pdf));
    }

    #[test]
    fn plain_text_with_md_extension_is_markdown() {
        assert_eq!(resolve_kind(MIME_TXT, "README.md"), Some(FileKind::Md));
        assert_eq!(resolve_kind(MIME_TXT, "README.MD"), Some(FileKind::Md));
        assert_eq!(resolve_kind(MIME_TXT, "notes.txt"), Some(FileKind::Txt));
        assert_eq!(resolve_kind(MIME_TXT, "noext"), Some(FileKind::Txt));
    }

    #[test]
    fn markdown_mime_is_markdown() {
        assert_eq!(resolve_kind(MIME_MD, "anything.bin"), Some(FileKind::Md));
    }

    #[test]
    fn extension_fallback_for_unknown_mime() {
        assert_eq!(
            resolve_kind("application/octet-stream", "paper.PDF"),
            Some(FileKind::Pdf)
        );
        assert_eq!(resolve_kind("", "log.txt"), Some(FileKind::Txt));
        assert_eq!(resolve_kind("x-custom/weird", "doc.md"), Some(FileKind::Md));
    }

    #[test]
    fn unrecognized_when_nothing_matches() {
        assert_eq!(resolve_kind("application/octet-stream", "README"), None);
        assert_eq!(resolve_kind("", "archive.zip"), None);
        assert_eq!(resolve_kind("image/png", "photo.png"), None);
        // Trailing dot means an empty extension, not a match.
        assert_eq!(resolve_kind("", "strange."), None);
    }
}
