//! Canonical text to paragraphs and a flat word sequence.

use log::debug;

use super::{
    Document, Paragraph,
    text_utils::{count_words, is_line_break},
};
use crate::text_policy::paragraph_preview;

/// Split canonical text into paragraphs (one per non-blank line) and words
/// (whitespace-separated tokens).
///
/// Lines without words are skipped and do not consume a paragraph id.
pub fn segment(text: &str) -> Document {
    let mut words = Vec::with_capacity(count_words(text));
    let mut paragraphs = Vec::new();

    for line in text.split(is_line_break) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let start = words.len();
        words.extend(trimmed.split_whitespace().map(str::to_owned));
        let end = words.len();
        if start == end {
            continue;
        }

        paragraphs.push(Paragraph {
            id: paragraphs.len(),
            text: trimmed.to_owned(),
            preview: paragraph_preview(trimmed),
            word_range: start..end,
        });
    }

    debug!(
        "content: segmented paragraphs={} words={}",
        paragraphs.len(),
        words.len()
    );

    Document::from_parts(words, paragraphs)
}
