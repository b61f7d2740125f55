//! App-level view model consumed by presentation layers.

use core::time::Duration;

use crate::{content::Paragraph, orp::WordSplit};

/// Coarse engine state.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PlaybackStatus {
    /// No document loaded.
    #[default]
    Empty,
    Paused,
    Playing,
}

impl PlaybackStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PlaybackStatus::Empty => "empty",
            PlaybackStatus::Paused => "paused",
            PlaybackStatus::Playing => "playing",
        }
    }
}

/// Read-only snapshot of the reader, borrowed from the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReaderView<'a> {
    pub status: PlaybackStatus,
    /// ORP split of the current word; [`WordSplit::EMPTY`] with no document.
    pub word: WordSplit<'a>,
    pub current_index: usize,
    pub word_count: usize,
    /// 0.0..=1.0
    pub progress: f64,
    pub words_per_minute: u16,
    pub paragraphs: &'a [Paragraph],
    pub current_paragraph_index: usize,
    /// 1-based position of the current word inside its paragraph.
    pub paragraph_word_index: usize,
    pub paragraph_word_total: usize,
    /// Time to reach the last word at the current speed.
    pub remaining: Duration,
}

impl ReaderView<'_> {
    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    pub fn is_empty(&self) -> bool {
        self.status == PlaybackStatus::Empty
    }

    pub fn current_paragraph(&self) -> Option<&Paragraph> {
        self.paragraphs.get(self.current_paragraph_index)
    }

    /// Progress as a whole percentage, for compact labels.
    pub fn progress_pct(&self) -> u8 {
        (self.progress * 100.0).round().clamp(0.0, 100.0) as u8
    }
}
