// Tokenizer: split text into words, punctuation and whitespace atoms.
//
// Atoms are contiguous and cover the whole input, so concatenating their
// text reproduces it byte for byte. Words are normalized through the
// lexicon for lookup; the original text is kept for pass-through.

use numwords_core::character::{CharType, get_char_type};
use numwords_core::{Atom, AtomType, Lexicon};

// ============================================================================
// Word length detection
// ============================================================================

/// Compute the byte length of a word starting at the beginning of `text`.
///
/// A word is a run of letters and digits. An apostrophe continues the word
/// when it sits between two letters (`o'clock`). Hyphens always split:
/// compound number words are rejoined at lexeme level.
fn word_length(text: &str) -> usize {
    let mut wlen = 0;
    let mut prev_letter = false;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match get_char_type(c) {
            CharType::Letter => {
                prev_letter = true;
                wlen = i + c.len_utf8();
            }
            CharType::Digit => {
                prev_letter = false;
                wlen = i + c.len_utf8();
            }
            CharType::Punctuation if matches!(c, '\'' | '\u{2019}') && prev_letter => {
                match chars.peek() {
                    Some(&(_, next)) if get_char_type(next) == CharType::Letter => {
                        wlen = i + c.len_utf8();
                    }
                    _ => return wlen,
                }
            }
            _ => return wlen,
        }
    }
    wlen
}

/// Find the atom starting at byte offset `pos`.
///
/// Returns the atom type and its byte length, or `None` at end of text.
pub fn next_atom(text: &str, pos: usize) -> Option<(AtomType, usize)> {
    let rest = text.get(pos..)?;
    let first = rest.chars().next()?;

    let atom = match get_char_type(first) {
        CharType::Letter | CharType::Digit => (AtomType::Word, word_length(rest)),
        CharType::Whitespace => {
            let len = rest
                .char_indices()
                .find(|&(_, c)| get_char_type(c) != CharType::Whitespace)
                .map_or(rest.len(), |(i, _)| i);
            (AtomType::Whitespace, len)
        }
        CharType::Punctuation => {
            // Ellipsis written as three consecutive dots.
            if rest.starts_with("...") {
                (AtomType::Punctuation, 3)
            } else {
                (AtomType::Punctuation, first.len_utf8())
            }
        }
        CharType::Unknown => (AtomType::Unknown, first.len_utf8()),
    };
    Some(atom)
}

/// Split `text` into atoms, normalizing words through `lexicon`.
pub fn tokenize(text: &str, lexicon: &dyn Lexicon) -> Vec<Atom> {
    let mut atoms = Vec::new();
    let mut pos = 0;
    while let Some((atom_type, len)) = next_atom(text, pos) {
        if len == 0 {
            break;
        }
        let slice = &text[pos..pos + len];
        let normalized = if atom_type == AtomType::Word {
            lexicon.normalize(slice)
        } else {
            String::new()
        };
        atoms.push(Atom::new(atom_type, slice, normalized, pos));
        pos += len;
    }
    atoms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestLexicon;

    fn types(text: &str) -> Vec<(AtomType, String)> {
        tokenize(text, &TestLexicon)
            .into_iter()
            .map(|a| (a.atom_type, a.text))
            .collect()
    }

    #[test]
    fn empty_text() {
        assert!(tokenize("", &TestLexicon).is_empty());
        assert_eq!(next_atom("", 0), None);
    }

    #[test]
    fn words_and_spaces() {
        assert_eq!(
            types("twenty  five"),
            vec![
                (AtomType::Word, "twenty".to_string()),
                (AtomType::Whitespace, "  ".to_string()),
                (AtomType::Word, "five".to_string()),
            ]
        );
    }

    #[test]
    fn hyphen_splits_compounds() {
        assert_eq!(
            types("twenty-five"),
            vec![
                (AtomType::Word, "twenty".to_string()),
                (AtomType::Punctuation, "-".to_string()),
                (AtomType::Word, "five".to_string()),
            ]
        );
    }

    #[test]
    fn apostrophe_inside_word() {
        assert_eq!(types("o'clock")[0], (AtomType::Word, "o'clock".to_string()));
        assert_eq!(types("cows'").len(), 2);
    }

    #[test]
    fn ellipsis_is_one_atom() {
        assert_eq!(
            types("one..."),
            vec![
                (AtomType::Word, "one".to_string()),
                (AtomType::Punctuation, "...".to_string()),
            ]
        );
    }

    #[test]
    fn unknown_characters() {
        assert_eq!(types("+7")[0], (AtomType::Unknown, "+".to_string()));
        assert_eq!(types("+7")[1], (AtomType::Word, "7".to_string()));
    }

    #[test]
    fn normalized_words() {
        let atoms = tokenize("Twenty ПЯТЬ", &TestLexicon);
        assert_eq!(atoms[0].normalized, "twenty");
        assert_eq!(atoms[2].normalized, "пять");
        assert!(atoms[1].normalized.is_empty());
    }

    #[test]
    fn byte_offsets_cover_input() {
        let text = "Двадцать пять коров, 12 кг.";
        let atoms = tokenize(text, &TestLexicon);
        let mut pos = 0;
        for atom in &atoms {
            assert_eq!(atom.start, pos);
            assert_eq!(&text[atom.start..atom.end()], atom.text);
            pos = atom.end();
        }
        assert_eq!(pos, text.len());
    }
}
