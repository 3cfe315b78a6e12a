//! Character classification for the separator test.

/// Combining diacritical marks (U+0300..U+036F).
fn is_generic_combining(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Devanagari combining signs: candrabindu/anusvara/visarga (U+0900..U+0903),
/// dependent vowels and virama (U+093A..U+094F), stress/tone marks
/// (U+0951..U+0957) and the vocalic dependent forms (U+0962..U+0963).
fn is_devanagari_combining(c: char) -> bool {
    matches!(c,
        '\u{0900}'..='\u{0903}'
        | '\u{093A}'..='\u{094F}'
        | '\u{0951}'..='\u{0957}'
        | '\u{0962}'..='\u{0963}')
}

/// Telugu combining signs (U+0C00..U+0C04, U+0C3E..U+0C56, U+0C62..U+0C63).
fn is_telugu_combining(c: char) -> bool {
    matches!(c,
        '\u{0C00}'..='\u{0C04}'
        | '\u{0C3E}'..='\u{0C56}'
        | '\u{0C62}'..='\u{0C63}')
}

/// Dependent signs that attach to a preceding letter (matras, viramas,
/// nasalization marks). These never start a word, so they do not count as
/// separators.
pub fn is_combining_mark(c: char) -> bool {
    is_generic_combining(c) || is_devanagari_combining(c) || is_telugu_combining(c)
}

/// A separator is whitespace, punctuation, or anything that is neither a
/// letter nor a combining mark. End-of-input is handled by the caller.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || (!c.is_alphabetic() && !is_combining_mark(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_and_punctuation_separate() {
        assert!(is_separator(' '));
        assert!(is_separator('\t'));
        assert!(is_separator('.'));
        assert!(is_separator(','));
        assert!(is_separator('!'));
    }

    #[test]
    fn letters_do_not_separate() {
        assert!(!is_separator('a'));
        assert!(!is_separator('Z'));
        assert!(!is_separator('क'));
        assert!(!is_separator('మ'));
    }

    #[test]
    fn matras_do_not_separate() {
        assert!(!is_separator('\u{094D}')); // Devanagari virama
        assert!(!is_separator('ा'));
        assert!(!is_separator('ం')); // Telugu anusvara
        assert!(!is_separator('ీ'));
    }

    #[test]
    fn digits_separate() {
        // Neither letters nor combining marks.
        assert!(is_separator('1'));
        assert!(is_separator('१'));
    }
}
