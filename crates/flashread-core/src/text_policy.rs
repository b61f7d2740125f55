//! Shared text shaping and truncation policies for compact UI surfaces.

/// Characters kept in a paragraph preview before the ellipsis.
pub const PREVIEW_MAX_CHARS: usize = 50;
pub const ELLIPSIS: &str = "...";

/// First [`PREVIEW_MAX_CHARS`] characters of `source`, with [`ELLIPSIS`]
/// appended when anything was cut.
pub fn paragraph_preview(source: &str) -> String {
    preview_limited(source, PREVIEW_MAX_CHARS)
}

pub fn preview_limited(source: &str, max_chars: usize) -> String {
    match source.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ELLIPSIS.len());
            out.push_str(&source[..cut]);
            out.push_str(ELLIPSIS);
            out
        }
        None => source.to_owned(),
    }
}

/// `"index/total"` label, used for paragraph and word counters.
pub fn section_secondary_label(index: usize, total: usize, suffix: &str) -> String {
    if suffix.is_empty() {
        format!("{index}/{total}")
    } else {
        format!("{index}/{total} {suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_kept_verbatim() {
        assert_eq!(paragraph_preview("Call me Ishmael."), "Call me Ishmael.");
    }

    #[test]
    fn exactly_fifty_chars_has_no_ellipsis() {
        let text = "a".repeat(PREVIEW_MAX_CHARS);
        assert_eq!(paragraph_preview(&text), text);
    }

    #[test]
    fn long_text_is_cut_on_char_boundary() {
        let text = "é".repeat(60);
        let preview = paragraph_preview(&text);
        assert!(preview.ends_with(ELLIPSIS));
        assert_eq!(preview.chars().count(), PREVIEW_MAX_CHARS + ELLIPSIS.len());
    }

    #[test]
    fn secondary_label_formats_counter() {
        assert_eq!(section_secondary_label(3, 12, ""), "3/12");
        assert_eq!(section_secondary_label(3, 12, "words"), "3/12 words");
    }
}
