/// Line terminators recognised when splitting canonical text into paragraphs.
pub(crate) fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Unicode punctuation (P* categories) for the ASCII range plus the
/// typographic marks that show up in prose.
pub(crate) fn is_punctuation(ch: char) -> bool {
    if ch.is_ascii() {
        return matches!(
            ch,
            '!' | '"'
                | '#'
                | '%'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | ','
                | '-'
                | '.'
                | '/'
                | ':'
                | ';'
                | '?'
                | '@'
                | '['
                | '\\'
                | ']'
                | '_'
                | '{'
                | '}'
        );
    }

    matches!(
        ch,
        '\u{A1}'
            | '\u{A7}'
            | '\u{AB}'
            | '\u{B6}'
            | '\u{B7}'
            | '\u{BB}'
            | '\u{BF}'
            | '\u{2010}'..='\u{2027}'
            | '\u{2030}'..='\u{205E}'
            | '\u{3001}'..='\u{3003}'
            | '\u{300C}'..='\u{300F}'
    )
}

/// Strip leading and trailing punctuation, keeping inner marks such as the
/// apostrophe in `don't`.
pub(crate) fn trim_punctuation(word: &str) -> &str {
    word.trim_matches(is_punctuation)
}

/// Canonicalize `\r\n` and lone `\r` to `\n`.
pub(super) fn unify_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

pub(super) fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_quotes_and_trailing_marks() {
        assert_eq!(trim_punctuation("\"Hello,\""), "Hello");
        assert_eq!(trim_punctuation("«hola»"), "hola");
        assert_eq!(trim_punctuation("don't"), "don't");
        assert_eq!(trim_punctuation("..."), "");
    }

    #[test]
    fn symbols_are_not_punctuation() {
        assert!(!is_punctuation('$'));
        assert!(!is_punctuation('+'));
        assert!(is_punctuation('—'));
        assert!(is_punctuation('…'));
    }

    #[test]
    fn line_endings_become_bare_newlines() {
        assert_eq!(unify_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
    }
}
