//! Core data models for the ingestion and search pipeline.
//!
//! These types represent the files and search results that flow through
//! classification, extraction, and in-buffer search.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Closed classification of an ingested document's format.
///
/// Determined once at classification time from the declared MIME type and
/// file name (see [`crate::format::resolve_kind`]); never guessed from
/// content bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Txt,
    Md,
}

impl FileKind {
    /// Canonical lowercase extension for this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Pdf => "pdf",
            FileKind::Txt => "txt",
            FileKind::Md => "md",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// An uploaded file after successful extraction.
///
/// Created by the ingestion pipeline; never mutated afterwards. Eviction
/// is the caller's responsibility.
#[derive(Debug, Clone, Serialize)]
pub struct IngestedFile {
    pub id: String,
    pub name: String,
    pub kind: FileKind,
    /// The single flat text buffer produced by extraction.
    pub content: String,
    /// Size of the original file in bytes (not of `content`).
    pub size: u64,
    pub created_at: DateTime<Utc>,
}

/// Default context window when the caller does not specify one.
pub const DEFAULT_CONTEXT_LENGTH: usize = 50;

/// Matching rules for one search over an extracted buffer.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// The string to find. Empty queries yield no matches.
    pub query: String,
    /// Compare exactly; when false, both sides are case-folded first.
    pub case_sensitive: bool,
    /// Accept a match only when both neighbors are non-word characters
    /// or absent.
    pub whole_word: bool,
    /// Characters of context captured on each side of a match.
    pub context_length: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            query: String::new(),
            case_sensitive: false,
            whole_word: false,
            context_length: DEFAULT_CONTEXT_LENGTH,
        }
    }
}

/// One located occurrence of a query within a text buffer.
///
/// `position` is the character offset of the match start; `match_text`
/// and the context windows are sliced from the original buffer, so they
/// preserve source casing under case-insensitive search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchMatch {
    pub id: String,
    /// 0-based ordinal of this match in scan order.
    pub match_index: usize,
    pub match_text: String,
    pub context_before: String,
    pub context_after: String,
    pub position: usize,
}
