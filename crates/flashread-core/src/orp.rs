//! Optimal recognition point (fixation letter) selection.

use core::{fmt, str::FromStr};

use crate::{content::text_utils::trim_punctuation, error::ParseError};

/// Heuristic used to place the fixation letter.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum OrpMode {
    /// Length table biased slightly left of center.
    #[default]
    Spritz,
    /// Middle character.
    Center,
    /// First a/e/i/o/u, falling back to [`OrpMode::Spritz`].
    FirstVowel,
}

impl OrpMode {
    pub const ALL: [OrpMode; 3] = [OrpMode::Spritz, OrpMode::Center, OrpMode::FirstVowel];

    pub const fn as_str(self) -> &'static str {
        match self {
            OrpMode::Spritz => "spritz",
            OrpMode::Center => "center",
            OrpMode::FirstVowel => "first-vowel",
        }
    }

    /// Next mode in [`OrpMode::ALL`], wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            OrpMode::Spritz => OrpMode::Center,
            OrpMode::Center => OrpMode::FirstVowel,
            OrpMode::FirstVowel => OrpMode::Spritz,
        }
    }
}

impl fmt::Display for OrpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrpMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "spritz" => Ok(OrpMode::Spritz),
            "center" | "centre" => Ok(OrpMode::Center),
            "first-vowel" | "firstVowel" | "first_vowel" => Ok(OrpMode::FirstVowel),
            other => Err(ParseError::UnknownOrpMode(other.to_owned())),
        }
    }
}

/// A word cut around its fixation letter.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WordSplit<'a> {
    pub prefix: &'a str,
    pub fixation: &'a str,
    pub suffix: &'a str,
}

impl<'a> WordSplit<'a> {
    pub const EMPTY: Self = WordSplit {
        prefix: "",
        fixation: "",
        suffix: "",
    };

    pub fn as_tuple(self) -> (&'a str, &'a str, &'a str) {
        (self.prefix, self.fixation, self.suffix)
    }
}

/// Fixation letter index measured on the punctuation-trimmed word.
pub fn fixation_index(word: &str, mode: OrpMode) -> usize {
    let trimmed = trim_punctuation(word);
    if trimmed.is_empty() {
        return 0;
    }

    let len = trimmed.chars().count();
    match mode {
        OrpMode::Spritz => spritz_letter_index(len),
        OrpMode::Center => len / 2,
        OrpMode::FirstVowel => trimmed
            .chars()
            .position(is_basic_vowel)
            .unwrap_or_else(|| spritz_letter_index(len)),
    }
}

/// Split `word` into prefix, fixation letter and suffix.
///
/// The index from [`fixation_index`] is applied to the untrimmed word, so a
/// leading quote shifts the highlight one character left of the trimmed
/// position. Only the upper bound is clamped.
pub fn split_word(word: &str, mode: OrpMode) -> WordSplit<'_> {
    let char_count = word.chars().count();
    if char_count == 0 {
        return WordSplit::EMPTY;
    }

    let safe_idx = fixation_index(word, mode).min(char_count - 1);
    let mut bounds = word.char_indices().skip(safe_idx);
    let Some((start, fixation)) = bounds.next() else {
        return WordSplit::EMPTY;
    };
    let end = start + fixation.len_utf8();

    WordSplit {
        prefix: &word[..start],
        fixation: &word[start..end],
        suffix: &word[end..],
    }
}

pub fn spritz_letter_index(letter_count: usize) -> usize {
    match letter_count {
        0 | 1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}

fn is_basic_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U')
}
