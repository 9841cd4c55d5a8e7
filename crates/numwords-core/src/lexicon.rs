// The Lexicon capability: classify a word of one locale.

use crate::character::fold_case;
use crate::token::NumberToken;

/// Locale-tunable parameters of the shared accumulator and renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleGrammar {
    /// `true` when the hundred word multiplies the group before it
    /// (`two hundred`), `false` when hundreds are words of their own
    /// (`двести`).
    pub hundred_multiplies: bool,

    /// Text placed between an ordinal's digits and its suffix.
    pub ordinal_separator: &'static str,

    /// Symbol placed between the integer and fraction digits.
    pub decimal_symbol: char,
}

impl Default for LocaleGrammar {
    fn default() -> Self {
        Self {
            hundred_multiplies: false,
            ordinal_separator: "-",
            decimal_symbol: '.',
        }
    }
}

/// Number-word classification for one locale.
///
/// Implementations own immutable tables built once and shared between
/// threads; every method takes `&self` and is free of side effects.
pub trait Lexicon: Send + Sync {
    /// Locale identifier, e.g. `"ru"`.
    fn locale(&self) -> &'static str;

    /// Parameters for the shared accumulator.
    fn grammar(&self) -> LocaleGrammar;

    /// Lookup form of a word. The default folds case.
    fn normalize(&self, word: &str) -> String {
        fold_case(word)
    }

    /// Classify a normalized word, or several normalized words joined by a
    /// single space. `original` is the same text as written in the input and
    /// is where ordinal suffixes are copied from.
    fn classify(&self, normalized: &str, original: &str) -> Option<NumberToken>;

    /// Longest multi-word lexeme, in words.
    fn max_lexeme_words(&self) -> usize {
        1
    }

    /// Whether the word doubles as a pronoun or determiner and must not be
    /// converted when it stands alone.
    fn is_ambiguous_alone(&self, _normalized: &str) -> bool {
        false
    }
}

/// The last `chars` characters of `word`, verbatim.
pub fn literal_suffix(word: &str, chars: usize) -> String {
    let count = word.chars().count();
    word.chars().skip(count.saturating_sub(chars)).collect()
}
