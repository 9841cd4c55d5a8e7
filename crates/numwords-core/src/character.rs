// Character classification for number-word tokenization.
//
// The tokenizer only needs to know where words start and stop, which
// punctuation may join two number words, and which punctuation closes a
// sentence. Letters are delegated to Unicode; the punctuation set is
// explicit so that unknown symbols stay in their own atoms.

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
///
/// Letters are any Unicode alphabetic character, so Latin and Cyrillic
/// scripts (and combining stress marks, which count as letters here so they
/// never split a word) are handled uniformly.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() || is_combining_mark(c) {
        return CharType::Letter;
    }
    if is_whitespace(c) {
        return CharType::Whitespace;
    }
    if c.is_ascii_digit() {
        return CharType::Digit;
    }
    if is_punctuation_char(c) {
        return CharType::Punctuation;
    }
    CharType::Unknown
}

/// Check whether a character is a punctuation character.
fn is_punctuation_char(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | ';'
            | '-'
            | '!'
            | '?'
            | ':'
            | '\''
            | '"'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '/'
            | '&'
            | '\u{00AB}' // «
            | '\u{00BB}' // »
            | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
            | '\u{2013}' // EN DASH
            | '\u{2014}' // EM DASH
            | '\u{2018}' // LEFT SINGLE QUOTATION MARK
            | '\u{2019}' // RIGHT SINGLE QUOTATION MARK
            | '\u{201C}' // LEFT DOUBLE QUOTATION MARK
            | '\u{201D}' // RIGHT DOUBLE QUOTATION MARK
            | '\u{2026}' // HORIZONTAL ELLIPSIS
    )
}

/// Combining acute/grave accents, used to mark stress in Russian text.
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}' | '\u{0301}')
}

/// Check whether a character is a whitespace character.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

/// Check whether a character is a line break.
pub fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

/// Hyphens that glue compound number words together (`twenty-five`).
pub fn is_joining_hyphen(c: char) -> bool {
    matches!(c, '-' | '\u{2010}' | '\u{2011}')
}

/// Punctuation that closes a sentence.
pub fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\u{2026}')
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase produces an iterator because some
// characters map to several characters. Number words never contain such
// characters, so the one-to-one mapping is enough for lookup keys.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Lower-case a word one character at a time, dropping stress marks.
pub fn fold_case(word: &str) -> String {
    word.chars()
        .filter(|&c| !is_combining_mark(c))
        .map(simple_lower)
        .collect()
}
