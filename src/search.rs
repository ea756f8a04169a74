//! In-buffer text search with case, whole-word, and context options.
//!
//! The scan is pure and stateless: one left-to-right pass over the buffer,
//! non-overlapping — an accepted match at offset `p` with length `L`
//! resumes scanning at `p + L`. A whole-word candidate that fails the
//! boundary test advances by one character instead, so a valid occurrence
//! overlapping the rejected one is not skipped.
//!
//! Offsets and context lengths are measured in characters, not bytes.

use uuid::Uuid;

use crate::models::{SearchMatch, SearchOptions};

/// Find all occurrences of `opts.query` in `text`, in scan order.
///
/// An empty query yields an empty result, not an error. Reported
/// `match_text` and contexts are sliced from the original buffer, so
/// case-insensitive matches keep the source's casing.
pub fn search_text(text: &str, opts: &SearchOptions) -> Vec<SearchMatch> {
    if opts.query.is_empty() {
        return Vec::new();
    }

    let source: Vec<char> = text.chars().collect();
    let haystack: Vec<char> = if opts.case_sensitive {
        source.clone()
    } else {
        source.iter().copied().map(fold_char).collect()
    };
    let needle: Vec<char> = if opts.case_sensitive {
        opts.query.chars().collect()
    } else {
        opts.query.chars().map(fold_char).collect()
    };

    let mut matches = Vec::new();
    let mut pos = 0;
    while pos + needle.len() <= haystack.len() {
        if haystack[pos..pos + needle.len()] != needle[..] {
            pos += 1;
            continue;
        }
        if opts.whole_word && !is_whole_word(&source, pos, needle.len()) {
            pos += 1;
            continue;
        }

        let end = pos + needle.len();
        let before_start = pos.saturating_sub(opts.context_length);
        let after_end = (end + opts.context_length).min(source.len());
        matches.push(SearchMatch {
            id: Uuid::new_v4().to_string(),
            match_index: matches.len(),
            match_text: source[pos..end].iter().collect(),
            context_before: source[before_start..pos].iter().collect(),
            context_after: source[end..after_end].iter().collect(),
            position: pos,
        });
        pos = end;
    }
    matches
}

/// Case-fold one character. `char::to_lowercase` can expand to multiple
/// characters; those stay unfolded to keep 1:1 alignment with the source
/// buffer.
fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Both neighbors of the candidate must be absent or non-word characters.
fn is_whole_word(source: &[char], start: usize, len: usize) -> bool {
    let before_ok = start == 0 || !is_word_char(source[start - 1]);
    let after_ok = start + len >= source.len() || !is_word_char(source[start + len]);
    before_ok && after_ok
}
