// Ordinal / decimal / sign overlay around the accumulator.
//
// A phrase is recognized at a lexeme index in three layers:
//
// 1. an optional sign word, kept only when a number follows it;
// 2. the integer run: the longest prefix of number lexemes the accumulator
//    accepts (an ordinal closes it);
// 3. an optional decimal part: when the run stopped at a decimal marker, or
//    the phrase opens with one, a fresh cardinal run after the marker
//    becomes the fraction.
//
// Number lexemes of one phrase are joined by inline whitespace, by a hyphen
// written directly between two words, or by ignorable filler words.

use numwords_core::character::is_joining_hyphen;
use numwords_core::{LocaleGrammar, NumberKind, PhraseKind, Sign};

use crate::accumulator::{Accumulator, Rejection};
use crate::lexeme::Lexeme;
use crate::options::ScanOptions;

/// Digits after a decimal marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub value: u128,
    pub leading_zero_count: usize,
}

/// Outcome of recognizing one phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseResult {
    /// Integer value (the integer part for decimals).
    pub value: u128,
    /// Number tokens consumed, sign and decimal marker excluded.
    pub consumed_token_count: usize,
    pub leading_zero_count: usize,
    pub kind: PhraseKind,
    pub sign: Option<Sign>,
    /// Literal ending of the closing ordinal word.
    pub suffix: Option<String>,
    pub fraction: Option<Fraction>,
}

impl PhraseResult {
    /// The digit this phrase spells when it is one bare unsigned digit word
    /// (`five`, `zero`).
    pub fn single_digit(&self) -> Option<char> {
        if self.kind != PhraseKind::Cardinal
            || self.sign.is_some()
            || self.consumed_token_count != 1
        {
            return None;
        }
        let digit = match (self.value, self.leading_zero_count) {
            (v, 0) if v < 10 => v,
            (0, 1) => 0,
            _ => return None,
        };
        char::from_digit(digit as u32, 10)
    }
}

/// A recognized phrase and the lexemes it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    /// First lexeme index (the sign word, if any).
    pub start: usize,
    /// One past the last lexeme index.
    pub end: usize,
    pub result: PhraseResult,
}

/// Longest accepted run of number lexemes.
#[derive(Debug, Clone, Copy)]
struct Run {
    acc: Accumulator,
    first_kind: NumberKind,
    last: usize,
    /// Lexeme index and reason of the first refused candidate.
    stop: Option<(usize, Rejection)>,
}

/// Phrase recognition over one lexed text.
pub struct Recognizer<'a> {
    source: &'a str,
    lexemes: &'a [Lexeme],
    grammar: LocaleGrammar,
    options: &'a ScanOptions,
}

impl<'a> Recognizer<'a> {
    pub fn new(
        source: &'a str,
        lexemes: &'a [Lexeme],
        grammar: LocaleGrammar,
        options: &'a ScanOptions,
    ) -> Self {
        Self {
            source,
            lexemes,
            grammar,
            options,
        }
    }

    /// Recognize the longest phrase starting at lexeme `start`.
    ///
    /// `after_digit` tells that the previous phrase was a lone digit word
    /// separated from `start` by whitespace only; outside relaxed mode, a
    /// phrase opening with a tens word then keeps its unit apart.
    pub fn recognize(&self, start: usize, after_digit: bool) -> Option<Phrase> {
        let token = self.lexemes.get(start)?.token.as_ref()?;

        let (sign, first) = match token.kind {
            NumberKind::Sign(sign) if self.options.signed => {
                (Some(sign), self.next_candidate(start)?)
            }
            NumberKind::Sign(_) => return None,
            _ => (None, start),
        };

        if self.lexemes[first].kind() == Some(NumberKind::DecimalMarker) {
            let fraction = self.munch(self.next_candidate(first)?, true, false)?;
            return Some(Phrase {
                start,
                end: fraction.last + 1,
                result: PhraseResult {
                    value: 0,
                    consumed_token_count: fraction.acc.consumed(),
                    leading_zero_count: 0,
                    kind: PhraseKind::Decimal,
                    sign,
                    suffix: None,
                    fraction: Some(Self::fraction(&fraction)),
                },
            });
        }

        let split_digits = after_digit && sign.is_none() && !self.options.relaxed;
        let run = self.munch(first, false, split_digits)?;

        if let Some(fraction) = self.decimal_tail(&run) {
            return Some(Phrase {
                start,
                end: fraction.last + 1,
                result: PhraseResult {
                    value: run.acc.value(),
                    consumed_token_count: run.acc.consumed() + fraction.acc.consumed(),
                    leading_zero_count: run.acc.leading_zeros(),
                    kind: PhraseKind::Decimal,
                    sign,
                    suffix: None,
                    fraction: Some(Self::fraction(&fraction)),
                },
            });
        }

        let closing = self.lexemes[run.last].token.as_ref();
        let (kind, suffix) = if run.acc.is_closed() {
            (PhraseKind::Ordinal, closing.and_then(|t| t.suffix.clone()))
        } else {
            (PhraseKind::Cardinal, None)
        };

        Some(Phrase {
            start,
            end: run.last + 1,
            result: PhraseResult {
                value: run.acc.value(),
                consumed_token_count: run.acc.consumed(),
                leading_zero_count: run.acc.leading_zeros(),
                kind,
                sign,
                suffix,
                fraction: None,
            },
        })
    }

    fn fraction(run: &Run) -> Fraction {
        Fraction {
            value: run.acc.value(),
            leading_zero_count: run.acc.leading_zeros(),
        }
    }

    /// Fraction run after a decimal marker that stopped a cardinal run.
    fn decimal_tail(&self, run: &Run) -> Option<Run> {
        if run.acc.is_closed() {
            return None;
        }
        let (marker, reason) = run.stop?;
        if reason != Rejection::NotNumeric
            || self.lexemes[marker].kind() != Some(NumberKind::DecimalMarker)
        {
            return None;
        }
        self.munch(self.next_candidate(marker)?, true, false)
    }

    /// Longest run of number lexemes starting at `first`.
    fn munch(&self, first: usize, cardinal_only: bool, split_digits: bool) -> Option<Run> {
        let token = self.lexemes[first].token.as_ref()?;
        if cardinal_only && token.kind.is_ordinal() {
            return None;
        }
        let acc = Accumulator::new(&self.grammar).push(token).ok()?;
        let mut run = Run {
            acc,
            first_kind: token.kind,
            last: first,
            stop: None,
        };

        while !run.acc.is_closed() {
            let Some(next) = self.next_candidate(run.last) else {
                break;
            };
            let Some(token) = self.lexemes[next].token.as_ref() else {
                break;
            };
            if cardinal_only && token.kind.is_ordinal() {
                break;
            }
            if split_digits
                && run.acc.consumed() == 1
                && run.first_kind == NumberKind::Ten
                && token.kind == NumberKind::Unit
            {
                break;
            }
            match run.acc.push(token) {
                Ok(acc) => {
                    run.acc = acc;
                    run.last = next;
                }
                Err(reason) => {
                    tracing::trace!(
                        word = self.lexemes[next].text(self.source),
                        %reason,
                        "phrase boundary"
                    );
                    run.stop = Some((next, reason));
                    break;
                }
            }
        }
        Some(run)
    }

    /// Next classified lexeme that may continue a phrase whose last lexeme
    /// is `after`, skipping ignorable filler words.
    fn next_candidate(&self, after: usize) -> Option<usize> {
        let mut next = self.skip_gap(after)?;
        while self.lexemes[next].kind() == Some(NumberKind::Ignorable) {
            next = self.skip_gap(next)?;
        }
        Some(next)
    }

    /// The classified word right after the single gap following `after`.
    fn skip_gap(&self, after: usize) -> Option<usize> {
        let gap = self.lexemes.get(after + 1)?;
        let joins = gap.is_inline_space(self.source)
            || gap.is_punctuation_where(self.source, is_joining_hyphen);
        if !joins {
            return None;
        }
        let next = after + 2;
        self.lexemes.get(next)?.token.as_ref()?;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexeme::lex;
    use crate::testing::TestLexicon;
    use numwords_core::Lexicon;

    fn recognize_with(text: &str, options: &ScanOptions, after_digit: bool) -> Option<Phrase> {
        let lexemes = lex(text, &TestLexicon);
        Recognizer::new(text, &lexemes, TestLexicon.grammar(), options).recognize(0, after_digit)
    }

    fn recognize(text: &str) -> Option<Phrase> {
        recognize_with(text, &ScanOptions::default(), false)
    }

    #[test]
    fn cardinal_phrase() {
        let phrase = recognize("two hundred thirty five cows").unwrap();
        assert_eq!(phrase.result.value, 235);
        assert_eq!(phrase.result.kind, PhraseKind::Cardinal);
        assert_eq!(phrase.result.consumed_token_count, 4);
        assert_eq!(phrase.end, 7);
    }

    #[test]
    fn hyphen_joins_words() {
        let phrase = recognize("twenty-five").unwrap();
        assert_eq!(phrase.result.value, 25);
        assert_eq!(phrase.end, 3);
    }

    #[test]
    fn spaced_hyphen_does_not_join() {
        let phrase = recognize("twenty - five").unwrap();
        assert_eq!(phrase.result.value, 20);
    }

    #[test]
    fn punctuation_and_newline_end_phrase() {
        assert_eq!(recognize("twenty, five").unwrap().result.value, 20);
        assert_eq!(recognize("twenty\nfive").unwrap().result.value, 20);
    }

    #[test]
    fn conjunction_never_merges() {
        let phrase = recognize("thirty and eleven").unwrap();
        assert_eq!(phrase.result.value, 30);
        assert_eq!(phrase.end, 1);
    }

    #[test]
    fn ignorable_is_transparent_between_numbers() {
        let phrase = recognize("twenty um five").unwrap();
        assert_eq!(phrase.result.value, 25);
        assert_eq!(phrase.end, 5);
        let phrase = recognize("twenty um cows").unwrap();
        assert_eq!(phrase.end, 1);
    }

    #[test]
    fn maximal_munch_stops_at_rejection() {
        assert_eq!(recognize("sixty twenty").unwrap().result.value, 60);
        assert_eq!(recognize("one two").unwrap().result.value, 1);
    }

    #[test]
    fn not_a_number() {
        assert!(recognize("cows").is_none());
        assert!(recognize(" five").is_none());
        assert!(recognize("and five").is_none());
    }

    #[test]
    fn leading_zeros_counted() {
        let phrase = recognize("zero zero nine").unwrap();
        assert_eq!(phrase.result.value, 9);
        assert_eq!(phrase.result.leading_zero_count, 2);
    }

    #[test]
    fn ordinal_closes_phrase() {
        let phrase = recognize("twenty first second").unwrap();
        assert_eq!(phrase.result.kind, PhraseKind::Ordinal);
        assert_eq!(phrase.result.value, 21);
        assert_eq!(phrase.result.suffix.as_deref(), Some("st"));
        assert_eq!(phrase.end, 3);
    }

    #[test]
    fn sign_prefix() {
        let phrase = recognize("minus fifteen").unwrap();
        assert_eq!(phrase.result.sign, Some(Sign::Minus));
        assert_eq!(phrase.result.value, 15);
        assert_eq!(phrase.result.consumed_token_count, 1);
        assert_eq!(phrase.start, 0);
        assert_eq!(phrase.end, 3);
    }

    #[test]
    fn sign_without_number() {
        assert!(recognize("plus cows").is_none());
        assert!(recognize("plus").is_none());
    }

    #[test]
    fn sign_disabled() {
        let options = ScanOptions {
            signed: false,
            ..ScanOptions::default()
        };
        assert!(recognize_with("minus five", &options, false).is_none());
    }

    #[test]
    fn decimal_phrase() {
        let phrase = recognize("twelve point ninety nine").unwrap();
        assert_eq!(phrase.result.kind, PhraseKind::Decimal);
        assert_eq!(phrase.result.value, 12);
        assert_eq!(
            phrase.result.fraction,
            Some(Fraction {
                value: 99,
                leading_zero_count: 0
            })
        );
        assert_eq!(phrase.end, 7);
    }

    #[test]
    fn decimal_with_two_word_marker_and_zero() {
        let phrase = recognize("one decimal point zero five").unwrap();
        assert_eq!(
            phrase.result.fraction,
            Some(Fraction {
                value: 5,
                leading_zero_count: 1
            })
        );
    }

    #[test]
    fn decimal_without_integer_part() {
        let phrase = recognize("point fifteen").unwrap();
        assert_eq!(phrase.result.kind, PhraseKind::Decimal);
        assert_eq!(phrase.result.value, 0);
        assert_eq!(phrase.result.fraction.map(|f| f.value), Some(15));
    }

    #[test]
    fn marker_without_fraction_is_left_alone() {
        let phrase = recognize("twelve point cows").unwrap();
        assert_eq!(phrase.result.kind, PhraseKind::Cardinal);
        assert_eq!(phrase.end, 1);
        assert!(recognize("point cows").is_none());
    }

    #[test]
    fn ordinal_does_not_start_decimal() {
        let phrase = recognize("first point five").unwrap();
        assert_eq!(phrase.result.kind, PhraseKind::Ordinal);
    }

    #[test]
    fn digit_dictation_keeps_tens_apart() {
        let strict = recognize_with("twenty five", &ScanOptions::default(), true).unwrap();
        assert_eq!(strict.result.value, 20);

        let relaxed = ScanOptions {
            relaxed: true,
            ..ScanOptions::default()
        };
        let phrase = recognize_with("twenty five", &relaxed, true).unwrap();
        assert_eq!(phrase.result.value, 25);

        let phrase = recognize_with("twenty five", &ScanOptions::default(), false).unwrap();
        assert_eq!(phrase.result.value, 25);
    }

    #[test]
    fn single_digit() {
        assert_eq!(recognize("five").unwrap().result.single_digit(), Some('5'));
        assert_eq!(recognize("zero").unwrap().result.single_digit(), Some('0'));
        assert_eq!(recognize("twenty").unwrap().result.single_digit(), None);
        assert_eq!(recognize("zero five").unwrap().result.single_digit(), None);
        assert_eq!(recognize("plus five").unwrap().result.single_digit(), None);
        assert_eq!(recognize("first").unwrap().result.single_digit(), None);
    }
}
