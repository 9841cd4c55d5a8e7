// Small English-like lexicon for exercising the engine in isolation.

use numwords_core::lexicon::literal_suffix;
use numwords_core::{Lexicon, LocaleGrammar, NumberKind, NumberToken, Sign};

pub(crate) struct TestLexicon;

const CARDINALS: &[(&str, NumberKind, u128)] = &[
    ("zero", NumberKind::Zero, 0),
    ("one", NumberKind::Unit, 1),
    ("two", NumberKind::Unit, 2),
    ("three", NumberKind::Unit, 3),
    ("four", NumberKind::Unit, 4),
    ("five", NumberKind::Unit, 5),
    ("six", NumberKind::Unit, 6),
    ("seven", NumberKind::Unit, 7),
    ("eight", NumberKind::Unit, 8),
    ("nine", NumberKind::Unit, 9),
    ("ten", NumberKind::Teen, 10),
    ("eleven", NumberKind::Teen, 11),
    ("twelve", NumberKind::Teen, 12),
    ("fifteen", NumberKind::Teen, 15),
    ("twenty", NumberKind::Ten, 20),
    ("thirty", NumberKind::Ten, 30),
    ("sixty", NumberKind::Ten, 60),
    ("ninety", NumberKind::Ten, 90),
    ("hundred", NumberKind::Hundred, 100),
    ("thousand", NumberKind::Scale, 1_000),
    ("a thousand", NumberKind::Scale, 1_000),
    ("million", NumberKind::Scale, 1_000_000),
    ("billion", NumberKind::Scale, 1_000_000_000),
    ("point", NumberKind::DecimalMarker, 0),
    ("decimal point", NumberKind::DecimalMarker, 0),
    ("plus", NumberKind::Sign(Sign::Plus), 0),
    ("minus", NumberKind::Sign(Sign::Minus), 0),
    ("and", NumberKind::Conjunction, 0),
    ("um", NumberKind::Ignorable, 0),
];

const ORDINALS: &[(&str, NumberKind, u128)] = &[
    ("first", NumberKind::OrdinalUnit, 1),
    ("second", NumberKind::OrdinalUnit, 2),
    ("third", NumberKind::OrdinalUnit, 3),
    ("fourth", NumberKind::OrdinalUnit, 4),
    ("fifth", NumberKind::OrdinalUnit, 5),
    ("twelfth", NumberKind::OrdinalTeen, 12),
    ("twentieth", NumberKind::OrdinalTen, 20),
    ("hundredth", NumberKind::OrdinalHundred, 100),
    ("thousandth", NumberKind::OrdinalScale, 1_000),
];

impl Lexicon for TestLexicon {
    fn locale(&self) -> &'static str {
        "test"
    }

    fn grammar(&self) -> LocaleGrammar {
        LocaleGrammar {
            hundred_multiplies: true,
            ordinal_separator: "",
            decimal_symbol: '.',
        }
    }

    fn classify(&self, normalized: &str, original: &str) -> Option<NumberToken> {
        if let Some(&(_, kind, value)) = CARDINALS.iter().find(|(w, _, _)| *w == normalized) {
            return Some(NumberToken::new(kind, value));
        }
        ORDINALS
            .iter()
            .find(|(w, _, _)| *w == normalized)
            .map(|&(_, kind, value)| NumberToken::ordinal(kind, value, literal_suffix(original, 2)))
    }

    fn max_lexeme_words(&self) -> usize {
        2
    }

    fn is_ambiguous_alone(&self, normalized: &str) -> bool {
        normalized == "one"
    }
}
