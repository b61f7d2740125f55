//! Cleanup for text pulled out of PDFs.
//!
//! Extractors hard-wrap lines, split words with hyphens at the margin and
//! leave stray spacing around punctuation. The passes below undo that and
//! must run in [`PDF_PASSES`] order: later passes clean up spacing that
//! earlier ones introduce.

use lazy_static::lazy_static;
use regex::Regex;

use super::{TextPass, text_utils::unify_line_endings};

lazy_static! {
    static ref RE_MULTI_SPACE: Regex = Regex::new(r" {2,}").unwrap();
    static ref RE_TABS: Regex = Regex::new(r"\t+").unwrap();

    /// `exam-\n  ple`; the fragment after the break must start on the next line
    static ref RE_HYPHEN_WRAP: Regex = Regex::new(r"-\n[ \t]*(\S)").unwrap();

    /// Normalizing 3+ consecutive newlines
    static ref RE_MULTI_NEWLINE: Regex = Regex::new(r"\n{3,}").unwrap();

    static ref RE_SPACE_BEFORE_BREAK: Regex = Regex::new(r"[ \t]+\n").unwrap();
    static ref RE_SPACE_AFTER_BREAK: Regex = Regex::new(r"\n[ \t]+").unwrap();

    static ref RE_SPACE_BEFORE_PUNCT: Regex = Regex::new(r" +([.,;:!?])").unwrap();
    static ref RE_PUNCT_BEFORE_LETTER: Regex = Regex::new(r"([.,;:!?])([A-Za-z])").unwrap();
}

/// PDF passes in application order.
pub const PDF_PASSES: [(&str, TextPass); 11] = [
    ("line-endings", unify_line_endings),
    ("collapse-spaces", collapse_spaces_and_tabs),
    ("join-hyphenated", join_hyphenated_words),
    ("merge-soft-breaks", merge_soft_line_breaks),
    ("collapse-breaks", collapse_paragraph_breaks),
    ("trim-around-breaks", trim_spaces_around_breaks),
    ("recollapse-spaces", collapse_spaces),
    ("space-before-punct", remove_space_before_punctuation),
    ("space-after-punct", space_after_punctuation),
    ("trim-lines", trim_lines),
    ("trim-text", trim_text),
];

pub fn normalize_pdf_text(text: &str) -> String {
    PDF_PASSES
        .iter()
        .fold(text.to_owned(), |acc, (_, pass)| pass(&acc))
}

pub fn collapse_spaces_and_tabs(text: &str) -> String {
    let spaces = RE_MULTI_SPACE.replace_all(text, " ");
    RE_TABS.replace_all(&spaces, " ").into_owned()
}

pub fn join_hyphenated_words(text: &str) -> String {
    RE_HYPHEN_WRAP.replace_all(text, "${1}").into_owned()
}

/// Turn a lone `\n` into a space; runs of two or more are paragraph
/// separators and stay.
pub fn merge_soft_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut prev_break = false;

    while let Some(ch) = chars.next() {
        if ch == '\n' {
            let next_break = chars.peek() == Some(&'\n');
            out.push(if prev_break || next_break { '\n' } else { ' ' });
            prev_break = true;
        } else {
            out.push(ch);
            prev_break = false;
        }
    }

    out
}

pub fn collapse_paragraph_breaks(text: &str) -> String {
    RE_MULTI_NEWLINE.replace_all(text, "\n\n").into_owned()
}

pub fn trim_spaces_around_breaks(text: &str) -> String {
    let before = RE_SPACE_BEFORE_BREAK.replace_all(text, "\n");
    RE_SPACE_AFTER_BREAK.replace_all(&before, "\n").into_owned()
}

pub fn collapse_spaces(text: &str) -> String {
    RE_MULTI_SPACE.replace_all(text, " ").into_owned()
}

pub fn remove_space_before_punctuation(text: &str) -> String {
    RE_SPACE_BEFORE_PUNCT.replace_all(text, "${1}").into_owned()
}

pub fn space_after_punctuation(text: &str) -> String {
    RE_PUNCT_BEFORE_LETTER
        .replace_all(text, "${1} ${2}")
        .into_owned()
}

pub fn trim_lines(text: &str) -> String {
    text.split('\n').map(str::trim).collect::<Vec<_>>().join("\n")
}

pub fn trim_text(text: &str) -> String {
    text.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_wrap_is_joined() {
        assert_eq!(normalize_pdf_text("exam-\nple"), "example");
        assert_eq!(join_hyphenated_words("infor-\n   mation"), "information");
    }

    #[test]
    fn hyphen_before_paragraph_break_is_kept() {
        assert_eq!(join_hyphenated_words("end -\n\nNext"), "end -\n\nNext");
    }

    #[test]
    fn four_breaks_collapse_to_two() {
        assert_eq!(normalize_pdf_text("first\n\n\n\nsecond"), "first\n\nsecond");
    }

    #[test]
    fn single_breaks_merge_and_double_breaks_survive() {
        assert_eq!(merge_soft_line_breaks("a\nb\nc"), "a b c");
        assert_eq!(merge_soft_line_breaks("a\n\nb"), "a\n\nb");
        assert_eq!(merge_soft_line_breaks("a\n\n\nb\nc"), "a\n\n\nb c");
    }

    #[test]
    fn tabs_and_space_runs_collapse() {
        assert_eq!(collapse_spaces_and_tabs("a    b\t\tc"), "a b c");
    }

    #[test]
    fn punctuation_spacing_is_repaired() {
        assert_eq!(remove_space_before_punctuation("word , next ."), "word, next.");
        assert_eq!(space_after_punctuation("end.Next,one"), "end. Next, one");
        assert_eq!(space_after_punctuation("pi is 3.14"), "pi is 3.14");
    }

    #[test]
    fn windows_line_endings_are_unified() {
        assert_eq!(
            normalize_pdf_text("line one\r\nline two\r\n\r\nnext"),
            "line one line two\n\nnext"
        );
    }

    #[test]
    fn wrapped_page_text_becomes_paragraphs() {
        let extracted = "  The quick brown fox   jumps over the\nlazy dog .It was a\nwell-known  fact-\nually.\n\n\n\n\tSecond  paragraph starts\nhere !  ";
        assert_eq!(
            normalize_pdf_text(extracted),
            "The quick brown fox jumps over the lazy dog. It was a well-known factually.\n\nSecond paragraph starts here!"
        );
    }

    #[test]
    fn pipeline_output_is_stable() {
        let once = normalize_pdf_text("a  b\t c-\nd\ne\n\n\n\nf , g.H  \n  i");
        assert_eq!(once, "a b cd e\n\nf, g. H i");
        assert_eq!(normalize_pdf_text(&once), once);
    }
}
