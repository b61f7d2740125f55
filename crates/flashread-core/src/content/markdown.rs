//! Markdown cleanup into plain prose.
//!
//! Each pass is a pure `&str -> String` transform that leaves already
//! cleaned text unchanged. [`normalize_markdown`] runs them in
//! [`MARKDOWN_PASSES`] order. Line endings are unified first so the
//! line-anchored passes see bare `\n`; fence removal has to run before inline
//! code is unwrapped or the fence backticks would be read as inline code.

use lazy_static::lazy_static;
use regex::Regex;

use super::{TextPass, text_utils::unify_line_endings};

lazy_static! {
    /// `#` to `######` at line start, with up to three spaces of indent
    static ref RE_HEADING: Regex = Regex::new(r"(?m)^[ \t]{0,3}#{1,6}(?:[ \t]+|$)").unwrap();

    static ref RE_STRONG_EM_STAR: Regex =
        Regex::new(r"\*\*\*([^*\s](?:[^*\n]*[^*\s])?)\*\*\*").unwrap();
    static ref RE_STRONG_STAR: Regex =
        Regex::new(r"\*\*([^*\s](?:[^*\n]*[^*\s])?)\*\*").unwrap();
    static ref RE_EM_STAR: Regex = Regex::new(r"\*([^*\s](?:[^*\n]*[^*\s])?)\*").unwrap();

    // `_` is a word character, so `\b_` only matches when the marker is not
    // glued to a preceding letter (keeps snake_case intact).
    static ref RE_STRONG_EM_UNDERSCORE: Regex =
        Regex::new(r"\b___([^_\s](?:[^_\n]*[^_\s])?)___\b").unwrap();
    static ref RE_STRONG_UNDERSCORE: Regex =
        Regex::new(r"\b__([^_\s](?:[^_\n]*[^_\s])?)__\b").unwrap();
    static ref RE_EM_UNDERSCORE: Regex =
        Regex::new(r"\b_([^_\s](?:[^_\n]*[^_\s])?)_\b").unwrap();

    /// `[label](target)` and `![alt](src)`; the target may hold one level of
    /// balanced parentheses, as in `wiki/Rust_(language)`
    static ref RE_LINK: Regex =
        Regex::new(r"!?\[([^\]\n]*)\]\((?:[^()\n]|\([^()\n]*\))*\)").unwrap();

    static ref RE_FENCE_BACKTICK: Regex = Regex::new(r"(?s)```.*?```").unwrap();
    static ref RE_FENCE_TILDE: Regex = Regex::new(r"(?s)~~~.*?~~~").unwrap();

    static ref RE_INLINE_CODE: Regex = Regex::new(r"`([^`\n]+)`").unwrap();

    static ref RE_BULLET: Regex = Regex::new(r"^[ \t]*[-*+][ \t]+").unwrap();

    /// Three or more `-`, `*` or `_`, optionally separated by spaces
    static ref RE_RULE: Regex = Regex::new(
        r"^[ \t]*(?:(?:-[ \t]*){3,}|(?:\*[ \t]*){3,}|(?:_[ \t]*){3,})$"
    ).unwrap();
}

/// Markdown passes in application order.
pub const MARKDOWN_PASSES: [(&str, TextPass); 8] = [
    ("line-endings", unify_line_endings),
    ("headings", strip_headings),
    ("emphasis", strip_emphasis),
    ("links", unwrap_links),
    ("code-fences", remove_code_fences),
    ("inline-code", unwrap_inline_code),
    ("bullets", strip_bullets),
    ("rules", strip_horizontal_rules),
];

pub fn normalize_markdown(text: &str) -> String {
    MARKDOWN_PASSES
        .iter()
        .fold(text.to_owned(), |acc, (_, pass)| pass(&acc))
}

pub fn strip_headings(text: &str) -> String {
    RE_HEADING.replace_all(text, "").into_owned()
}

pub fn strip_emphasis(text: &str) -> String {
    [
        &*RE_STRONG_EM_STAR,
        &*RE_STRONG_STAR,
        &*RE_EM_STAR,
        &*RE_STRONG_EM_UNDERSCORE,
        &*RE_STRONG_UNDERSCORE,
        &*RE_EM_UNDERSCORE,
    ]
    .iter()
    .fold(text.to_owned(), |acc, re| {
        re.replace_all(&acc, "${1}").into_owned()
    })
}

/// Replace links and images by their labels. A badge such as
/// `[![alt](img)](href)` nests an image in a link label, so this repeats
/// until nothing matches; every round strictly shortens the text.
pub fn unwrap_links(text: &str) -> String {
    let mut out = text.to_owned();
    while RE_LINK.is_match(&out) {
        out = RE_LINK.replace_all(&out, "${1}").into_owned();
    }
    out
}

pub fn remove_code_fences(text: &str) -> String {
    let without_backticks = RE_FENCE_BACKTICK.replace_all(text, "");
    RE_FENCE_TILDE
        .replace_all(&without_backticks, "")
        .into_owned()
}

pub fn unwrap_inline_code(text: &str) -> String {
    RE_INLINE_CODE.replace_all(text, "${1}").into_owned()
}

/// Drop `-`, `*` or `+` list markers. Rule lines such as `- - -` are left
/// for [`strip_horizontal_rules`].
pub fn strip_bullets(text: &str) -> String {
    map_lines(text, |line| {
        if is_horizontal_rule(line) {
            line.to_owned()
        } else {
            RE_BULLET.replace(line, "").into_owned()
        }
    })
}

pub fn strip_horizontal_rules(text: &str) -> String {
    map_lines(text, |line| {
        if is_horizontal_rule(line) {
            String::new()
        } else {
            line.to_owned()
        }
    })
}

fn is_horizontal_rule(line: &str) -> bool {
    RE_RULE.is_match(line)
}

fn map_lines(text: &str, mut f: impl FnMut(&str) -> String) -> String {
    text.split('\n').map(|line| f(line)).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_lose_their_markers() {
        assert_eq!(strip_headings("# Title\n### Sub title\nbody"), "Title\nSub title\nbody");
        assert_eq!(strip_headings("#hashtag"), "#hashtag");
    }

    #[test]
    fn emphasis_keeps_inner_text() {
        assert_eq!(
            strip_emphasis("a **bold** and *it* and ***both*** here"),
            "a bold and it and both here"
        );
        assert_eq!(strip_emphasis("__under__ _line_"), "under line");
    }

    #[test]
    fn emphasis_leaves_identifiers_and_bullets_alone() {
        assert_eq!(strip_emphasis("call snake_case_name now"), "call snake_case_name now");
        assert_eq!(strip_emphasis("* item with *em*"), "* item with em");
        assert_eq!(strip_emphasis("2 * 3 * 4"), "2 * 3 * 4");
    }

    #[test]
    fn links_and_images_become_labels() {
        assert_eq!(
            unwrap_links("see [the docs](https://example.com) or ![a cat](cat.png)"),
            "see the docs or a cat"
        );
    }

    #[test]
    fn badge_links_unwrap_fully() {
        let once = unwrap_links("[![build](https://ci/badge.svg)](https://ci/run) Docs");
        assert_eq!(once, "build Docs");
        assert_eq!(unwrap_links(&once), once);
    }

    #[test]
    fn link_targets_may_hold_parentheses() {
        assert_eq!(
            unwrap_links("see [Rust](https://en.wikipedia.org/wiki/Rust_(language)) now"),
            "see Rust now"
        );
    }

    #[test]
    fn crlf_input_still_drops_rules_and_bullets() {
        let cleaned = normalize_markdown("Intro line\r\n\r\n---\r\n\r\n- - -\r\n* item\r\nEnd");
        assert!(!cleaned.contains('\r'));
        let words: Vec<_> = cleaned.split_whitespace().collect();
        assert_eq!(words, vec!["Intro", "line", "item", "End"]);
    }

    #[test]
    fn fenced_blocks_are_removed() {
        let text = "before\n```rust\nfn main() {}\n```\nafter\n~~~\nraw\n~~~";
        assert_eq!(remove_code_fences(text), "before\n\nafter\n");
    }

    #[test]
    fn inline_code_is_unwrapped() {
        assert_eq!(unwrap_inline_code("run `cargo doc` now"), "run cargo doc now");
    }

    #[test]
    fn bullets_are_stripped_but_rules_survive_until_their_pass() {
        assert_eq!(strip_bullets("- one\n  * two\n+ three"), "one\ntwo\nthree");
        assert_eq!(strip_bullets("- - -"), "- - -");
    }

    #[test]
    fn rules_are_blanked() {
        assert_eq!(strip_horizontal_rules("a\n---\nb\n* * *\n___"), "a\n\nb\n\n");
    }

    #[test]
    fn passes_are_idempotent() {
        let source = "# Head\r\n**b** [l](u) `c` [![i](s)](h)\n- item\n---\n```\nx\n```";
        for (name, pass) in MARKDOWN_PASSES {
            let once = pass(source);
            assert_eq!(pass(&once), once, "pass {name} is not idempotent");
        }
    }

    #[test]
    fn full_pipeline_produces_prose() {
        let source = "# Chapter One\n\nIt was a **dark** night.\n\n```\nignored()\n```\n\n- Read the [manual](m.html).\n\n***\n\nUse `ls`.";
        let cleaned = normalize_markdown(source);
        let words: Vec<_> = cleaned.split_whitespace().collect();
        assert_eq!(
            words,
            vec![
                "Chapter", "One", "It", "was", "a", "dark", "night.", "Read", "the", "manual.",
                "Use", "ls."
            ]
        );
    }
}
