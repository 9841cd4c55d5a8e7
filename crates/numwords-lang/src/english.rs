// English lexicon.
//
// `hundred` multiplies the group before it (`twelve hundred`), ordinals
// render with their two-letter ending glued to the digits (`21st`).

use std::sync::LazyLock;

use hashbrown::HashMap;
use numwords_core::lexicon::literal_suffix;
use numwords_core::{Lexicon, LocaleGrammar, NumberKind, NumberToken, Sign};

use NumberKind::*;

const CARDINALS: &[(&str, NumberKind, u128)] = &[
    ("zero", Zero, 0),
    ("one", Unit, 1),
    ("two", Unit, 2),
    ("three", Unit, 3),
    ("four", Unit, 4),
    ("five", Unit, 5),
    ("six", Unit, 6),
    ("seven", Unit, 7),
    ("eight", Unit, 8),
    ("nine", Unit, 9),
    ("ten", Teen, 10),
    ("eleven", Teen, 11),
    ("twelve", Teen, 12),
    ("thirteen", Teen, 13),
    ("fourteen", Teen, 14),
    ("fifteen", Teen, 15),
    ("sixteen", Teen, 16),
    ("seventeen", Teen, 17),
    ("eighteen", Teen, 18),
    ("nineteen", Teen, 19),
    ("twenty", Ten, 20),
    ("thirty", Ten, 30),
    ("forty", Ten, 40),
    ("fifty", Ten, 50),
    ("sixty", Ten, 60),
    ("seventy", Ten, 70),
    ("eighty", Ten, 80),
    ("ninety", Ten, 90),
    ("hundred", Hundred, 100),
    ("a hundred", Hundred, 100),
    ("thousand", Scale, 1_000),
    ("a thousand", Scale, 1_000),
    ("million", Scale, 1_000_000),
    ("a million", Scale, 1_000_000),
    ("billion", Scale, 1_000_000_000),
    ("a billion", Scale, 1_000_000_000),
    ("trillion", Scale, 1_000_000_000_000),
    ("point", DecimalMarker, 0),
    ("decimal point", DecimalMarker, 0),
    ("plus", NumberKind::Sign(Sign::Plus), 0),
    ("minus", NumberKind::Sign(Sign::Minus), 0),
    ("and", Conjunction, 0),
];

const ORDINALS: &[(&str, NumberKind, u128)] = &[
    ("first", OrdinalUnit, 1),
    ("second", OrdinalUnit, 2),
    ("third", OrdinalUnit, 3),
    ("fourth", OrdinalUnit, 4),
    ("fifth", OrdinalUnit, 5),
    ("sixth", OrdinalUnit, 6),
    ("seventh", OrdinalUnit, 7),
    ("eighth", OrdinalUnit, 8),
    ("ninth", OrdinalUnit, 9),
    ("tenth", OrdinalTeen, 10),
    ("eleventh", OrdinalTeen, 11),
    ("twelfth", OrdinalTeen, 12),
    ("thirteenth", OrdinalTeen, 13),
    ("fourteenth", OrdinalTeen, 14),
    ("fifteenth", OrdinalTeen, 15),
    ("sixteenth", OrdinalTeen, 16),
    ("seventeenth", OrdinalTeen, 17),
    ("eighteenth", OrdinalTeen, 18),
    ("nineteenth", OrdinalTeen, 19),
    ("twentieth", OrdinalTen, 20),
    ("thirtieth", OrdinalTen, 30),
    ("fortieth", OrdinalTen, 40),
    ("fiftieth", OrdinalTen, 50),
    ("sixtieth", OrdinalTen, 60),
    ("seventieth", OrdinalTen, 70),
    ("eightieth", OrdinalTen, 80),
    ("ninetieth", OrdinalTen, 90),
    ("hundredth", OrdinalHundred, 100),
    ("thousandth", OrdinalScale, 1_000),
    ("millionth", OrdinalScale, 1_000_000),
    ("billionth", OrdinalScale, 1_000_000_000),
    ("trillionth", OrdinalScale, 1_000_000_000_000),
];

/// Rendered ordinal endings are the last two letters: `st`, `nd`, `rd`, `th`.
const ORDINAL_SUFFIX_CHARS: usize = 2;

static WORDS: LazyLock<HashMap<&'static str, (NumberKind, u128)>> = LazyLock::new(|| {
    CARDINALS
        .iter()
        .chain(ORDINALS)
        .map(|&(word, kind, value)| (word, (kind, value)))
        .collect()
});

/// English number words.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLexicon;

impl Lexicon for EnglishLexicon {
    fn locale(&self) -> &'static str {
        "en"
    }

    fn grammar(&self) -> LocaleGrammar {
        LocaleGrammar {
            hundred_multiplies: true,
            ordinal_separator: "",
            decimal_symbol: '.',
        }
    }

    fn classify(&self, normalized: &str, original: &str) -> Option<NumberToken> {
        let &(kind, value) = WORDS.get(normalized)?;
        if kind.is_ordinal() {
            Some(NumberToken::ordinal(
                kind,
                value,
                literal_suffix(original, ORDINAL_SUFFIX_CHARS),
            ))
        } else {
            Some(NumberToken::new(kind, value))
        }
    }

    fn max_lexeme_words(&self) -> usize {
        2
    }

    fn is_ambiguous_alone(&self, normalized: &str) -> bool {
        normalized == "one"
    }
}
