//! Caller-supplied reader configuration.
//!
//! Nothing here is persisted by the core; hosts that want to remember these
//! values across sessions store them themselves.

use crate::orp::OrpMode;

pub const MIN_WPM: u16 = 100;
pub const MAX_WPM: u16 = 1_000;
pub const DEFAULT_WPM: u16 = 300;
pub const DEFAULT_SKIP_WORDS: usize = 10;
pub const DEFAULT_WPM_STEP: u16 = 25;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    pub orp_mode: OrpMode,
    /// Initial speed, clamped to `MIN_WPM..=MAX_WPM`.
    pub wpm: u16,
    /// Words moved by a plain skip forward/backward.
    pub skip_words: usize,
    /// WPM change for a plain speed up/down.
    pub wpm_step: u16,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            orp_mode: OrpMode::Spritz,
            wpm: DEFAULT_WPM,
            skip_words: DEFAULT_SKIP_WORDS,
            wpm_step: DEFAULT_WPM_STEP,
        }
    }
}

impl ReaderConfig {
    pub const fn with_wpm(mut self, wpm: u16) -> Self {
        self.wpm = wpm;
        self
    }

    pub const fn with_orp_mode(mut self, orp_mode: OrpMode) -> Self {
        self.orp_mode = orp_mode;
        self
    }

    /// Copy with every field forced into its valid range.
    pub fn sanitized(self) -> Self {
        Self {
            orp_mode: self.orp_mode,
            wpm: clamp_wpm(self.wpm as i64),
            skip_words: self.skip_words.max(1),
            wpm_step: self.wpm_step.max(1),
        }
    }
}

/// Clamp any requested speed into `MIN_WPM..=MAX_WPM`.
pub fn clamp_wpm(value: i64) -> u16 {
    value.clamp(MIN_WPM as i64, MAX_WPM as i64) as u16
}
