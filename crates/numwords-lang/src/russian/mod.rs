// Russian lexicon.
//
// Hundreds are words of their own (`двести`), so the accumulator runs with
// direct hundreds. Ordinals are recognized as a stem from `ORDINAL_STEMS`
// followed by an adjective ending; the rendered suffix is copied from the
// end of the source word (`двадцать первого` → `21-го`).

mod tables;

use std::sync::LazyLock;

use hashbrown::{HashMap, HashSet};
use numwords_core::character::fold_case;
use numwords_core::lexicon::literal_suffix;
use numwords_core::{Lexicon, LocaleGrammar, NumberKind, NumberToken};

use tables::{AMBIGUOUS_ALONE, CARDINALS, HARD_ENDINGS, ORDINAL_STEMS, SOFT_ENDINGS, SOFT_STEM};

type Entry = (NumberKind, u128);

static CARDINAL_MAP: LazyLock<HashMap<&'static str, Entry>> = LazyLock::new(|| {
    CARDINALS
        .iter()
        .map(|&(word, kind, value)| (word, (kind, value)))
        .collect()
});

static ORDINAL_STEM_MAP: LazyLock<HashMap<&'static str, Entry>> = LazyLock::new(|| {
    ORDINAL_STEMS
        .iter()
        .map(|&(stem, kind, value)| (stem, (kind, value)))
        .collect()
});

static AMBIGUOUS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| AMBIGUOUS_ALONE.iter().copied().collect());

/// Russian number words.
#[derive(Debug, Clone, Copy, Default)]
pub struct RussianLexicon;

impl RussianLexicon {
    /// Split `word` into a known ordinal stem and an adjective ending.
    fn ordinal(&self, normalized: &str, original: &str) -> Option<NumberToken> {
        for &(ending, suffix_chars) in HARD_ENDINGS.iter().chain(SOFT_ENDINGS) {
            let Some(stem) = normalized.strip_suffix(ending) else {
                continue;
            };
            let soft = SOFT_ENDINGS.iter().any(|&(e, _)| e == ending);
            if soft != (stem == SOFT_STEM) {
                continue;
            }
            if let Some(&(kind, value)) = ORDINAL_STEM_MAP.get(stem) {
                return Some(NumberToken::ordinal(
                    kind,
                    value,
                    literal_suffix(original, suffix_chars),
                ));
            }
        }
        None
    }
}

impl Lexicon for RussianLexicon {
    fn locale(&self) -> &'static str {
        "ru"
    }

    fn grammar(&self) -> LocaleGrammar {
        LocaleGrammar {
            hundred_multiplies: false,
            ordinal_separator: "-",
            decimal_symbol: '.',
        }
    }

    fn normalize(&self, word: &str) -> String {
        fold_case(word).replace('ё', "е")
    }

    fn classify(&self, normalized: &str, original: &str) -> Option<NumberToken> {
        if let Some(&(kind, value)) = CARDINAL_MAP.get(normalized) {
            return Some(NumberToken::new(kind, value));
        }
        self.ordinal(normalized, original)
    }

    fn is_ambiguous_alone(&self, normalized: &str) -> bool {
        AMBIGUOUS.contains(normalized)
    }
}
