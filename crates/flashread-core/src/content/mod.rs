//! Content pipeline: raw text to a segmented [`Document`].

pub mod markdown;
pub mod pdf;
pub mod segment;
pub(crate) mod text_utils;

#[cfg(test)]
mod tests;

use core::{fmt, ops::Range, str::FromStr};
use std::path::Path;

use log::debug;

use crate::error::{LoadError, ParseError};

/// One text-to-text cleanup step.
pub type TextPass = fn(&str) -> String;

/// Ruleset used to clean raw text before segmentation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum SourceFormat {
    #[default]
    Plain,
    Markdown,
    /// Text already pulled out of a PDF by an external extractor.
    PdfExtracted,
}

impl SourceFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            SourceFormat::Plain => "plain",
            SourceFormat::Markdown => "markdown",
            SourceFormat::PdfExtracted => "pdf-extracted",
        }
    }

    /// Format implied by a file extension, case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "txt" | "text" => Some(SourceFormat::Plain),
            "md" | "markdown" | "mdown" | "mkd" => Some(SourceFormat::Markdown),
            "pdf" => Some(SourceFormat::PdfExtracted),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "plain" | "text" => Ok(SourceFormat::Plain),
            "markdown" | "md" => Ok(SourceFormat::Markdown),
            "pdf-extracted" | "pdf" => Ok(SourceFormat::PdfExtracted),
            other => Err(ParseError::UnknownFormat(other.to_owned())),
        }
    }
}

/// One non-blank line of canonical text and its slice of the word sequence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Paragraph {
    pub id: usize,
    /// Trimmed source line.
    pub text: String,
    pub preview: String,
    /// Half-open range into [`Document::words`].
    pub word_range: Range<usize>,
}

impl Paragraph {
    pub fn word_count(&self) -> usize {
        self.word_range.len()
    }

    pub fn contains_word(&self, word_index: usize) -> bool {
        self.word_range.contains(&word_index)
    }
}

/// Flat word sequence partitioned into paragraphs.
///
/// Paragraph ranges are contiguous, strictly increasing and cover
/// `0..word_count()` exactly.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Document {
    words: Vec<String>,
    paragraphs: Vec<Paragraph>,
}

impl Document {
    pub(crate) fn from_parts(words: Vec<String>, paragraphs: Vec<Paragraph>) -> Self {
        Self { words, paragraphs }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn paragraph(&self, index: usize) -> Option<&Paragraph> {
        self.paragraphs.get(index)
    }

    /// Paragraph whose range holds `word_index`.
    pub fn paragraph_for_word(&self, word_index: usize) -> Option<&Paragraph> {
        self.paragraphs
            .iter()
            .find(|paragraph| paragraph.contains_word(word_index))
    }

    pub fn words_in(&self, paragraph: &Paragraph) -> &[String] {
        self.words
            .get(paragraph.word_range.clone())
            .unwrap_or_default()
    }
}

/// Apply the cleanup ruleset for `format` and trim the result.
pub fn normalize(raw: &str, format: SourceFormat) -> Result<String, LoadError> {
    let cleaned = match format {
        SourceFormat::Plain => raw.to_owned(),
        SourceFormat::Markdown => markdown::normalize_markdown(raw),
        SourceFormat::PdfExtracted => pdf::normalize_pdf_text(raw),
    };

    let trimmed = cleaned.trim();
    debug!(
        "content: normalized format={} raw_bytes={} canonical_bytes={}",
        format,
        raw.len(),
        trimmed.len()
    );
    if trimmed.is_empty() {
        return Err(LoadError::EmptyContent);
    }

    Ok(trimmed.to_owned())
}

/// Normalize and segment raw text into a playable document.
pub fn ingest(raw: &str, format: SourceFormat) -> Result<Document, LoadError> {
    let canonical = normalize(raw, format)?;
    let document = segment::segment(&canonical);
    if document.is_empty() {
        return Err(LoadError::EmptyContent);
    }

    Ok(document)
}
