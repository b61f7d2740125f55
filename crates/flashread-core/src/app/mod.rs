//! Playback state machine for RSVP reading.
//!
//! `Empty` (no document) -> `Paused` on [`PlaybackEngine::load`], and
//! `Paused` <-> `Playing` through play/pause. While playing, each tick from
//! the injected [`TickScheduler`] advances one word; reaching the last word
//! pauses. All navigation clamps instead of failing.

use core::time::Duration;

use log::debug;

use crate::{
    content::{self, Document, Paragraph, SourceFormat},
    error::LoadError,
    input::{CommandSource, ReaderCommand},
    orp::{OrpMode, WordSplit, split_word},
    render::{PlaybackStatus, ReaderView},
    schedule::{TickScheduler, TickToken},
    settings::{ReaderConfig, clamp_wpm},
};

pub struct PlaybackEngine<S>
where
    S: TickScheduler,
{
    scheduler: S,
    config: ReaderConfig,
    document: Document,
    status: PlaybackStatus,
    current_index: usize,
    current_paragraph_index: usize,
    wpm: u16,
    progress: f64,
    tick_source: Option<TickToken>,
}

impl<S> PlaybackEngine<S>
where
    S: TickScheduler,
{
    pub fn new(scheduler: S, config: ReaderConfig) -> Self {
        let config = config.sanitized();
        Self {
            scheduler,
            config,
            document: Document::default(),
            status: PlaybackStatus::Empty,
            current_index: 0,
            current_paragraph_index: 0,
            wpm: config.wpm,
            progress: 0.0,
            tick_source: None,
        }
    }

    /// Normalize and segment `text`, then replace the current document.
    ///
    /// On failure the engine is left exactly as it was.
    pub fn load(&mut self, text: &str, format: SourceFormat) -> Result<(), LoadError> {
        let document = content::ingest(text, format)?;
        self.load_document(document)
    }

    /// Replace the current document with an already segmented one.
    pub fn load_document(&mut self, document: Document) -> Result<(), LoadError> {
        if document.is_empty() {
            return Err(LoadError::EmptyContent);
        }

        self.cancel_tick_source();
        debug!(
            "playback: load words={} paragraphs={}",
            document.word_count(),
            document.paragraph_count()
        );
        self.document = document;
        self.status = PlaybackStatus::Paused;
        self.current_index = 0;
        self.current_paragraph_index = 0;
        self.refresh_position();
        Ok(())
    }

    /// Drop the document and return to `Empty`.
    pub fn close(&mut self) {
        self.pause();
        debug!("playback: close words={}", self.document.word_count());
        self.document = Document::default();
        self.status = PlaybackStatus::Empty;
        self.current_index = 0;
        self.current_paragraph_index = 0;
        self.progress = 0.0;
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    pub fn is_empty(&self) -> bool {
        self.status == PlaybackStatus::Empty
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn word_count(&self) -> usize {
        self.document.word_count()
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn words_per_minute(&self) -> u16 {
        self.wpm
    }

    pub fn current_paragraph_index(&self) -> usize {
        self.current_paragraph_index
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        self.document.paragraphs()
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn orp_mode(&self) -> OrpMode {
        self.config.orp_mode
    }

    pub fn set_orp_mode(&mut self, mode: OrpMode) {
        self.config.orp_mode = mode;
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Token of the live tick source, if playing.
    pub fn tick_source(&self) -> Option<TickToken> {
        self.tick_source
    }

    fn last_index(&self) -> usize {
        self.document.word_count().saturating_sub(1)
    }

    /// Recompute progress and the current paragraph from `current_index`.
    fn refresh_position(&mut self) {
        self.progress = match self.document.word_count() {
            0 => 0.0,
            1 => 1.0,
            count => self.current_index as f64 / (count - 1) as f64,
        };

        if let Some(paragraph) = self.document.paragraph_for_word(self.current_index) {
            self.current_paragraph_index = paragraph.id;
        }
    }
}

include!("runtime.rs");
include!("navigation.rs");
include!("view.rs");
include!("input.rs");
