// Phrase scanner: find number phrases in free text and rewrite them.
//
// The scan runs in three passes over the lexemes:
//
// 1. left to right, recognize the longest phrase at each position and
//    record either a verbatim span or a number span;
// 2. merge long runs of bare digit words into one phone-style span;
// 3. concatenate the spans.
//
// Verbatim spans are byte ranges into the source, so everything that is not
// substituted (casing, spacing, punctuation) is reproduced exactly.

use std::ops::Range;

use numwords_core::character::{is_line_break, is_sentence_terminator};
use numwords_core::{AtomType, Lexicon, LocaleGrammar, NumberKind, PhraseKind};

use crate::lexeme::{Lexeme, lex};
use crate::options::ScanOptions;
use crate::overlay::{Phrase, Recognizer};
use crate::render::{group_phone_digits, render};

/// Minimum run of bare digit words rendered as a phone number.
pub const PHONE_MIN_DIGITS: usize = 7;

// ---------------------------------------------------------------------------
// Spans
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
enum Span {
    Verbatim(Range<usize>),
    Number {
        range: Range<usize>,
        rendered: String,
        /// Set when the phrase is one bare digit word.
        digit: Option<char>,
    },
}

impl Span {
    fn range(&self) -> Range<usize> {
        match self {
            Span::Verbatim(range) | Span::Number { range, .. } => range.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

struct Scanner<'a> {
    source: &'a str,
    lexemes: &'a [Lexeme],
    grammar: LocaleGrammar,
    options: &'a ScanOptions,
    spans: Vec<Span>,
    /// End (lexeme index) of the last phrase that was a lone digit word.
    last_digit_end: Option<usize>,
}

impl<'a> Scanner<'a> {
    fn new(
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
            spans: Vec::new(),
            last_digit_end: None,
        }
    }

    fn run(mut self) -> Vec<Span> {
        let recognizer = Recognizer::new(self.source, self.lexemes, self.grammar, self.options);
        let mut pos = 0;

        while pos < self.lexemes.len() {
            let after_digit = self.follows_digit(pos);
            match recognizer.recognize(pos, after_digit) {
                Some(phrase) => pos = self.emit_phrase(phrase),
                None => {
                    self.verbatim(pos, pos + 1);
                    pos += 1;
                }
            }
        }
        self.spans
    }

    /// Record a recognized phrase and return the next lexeme index.
    fn emit_phrase(&mut self, phrase: Phrase) -> usize {
        let text = self.byte_range(phrase.start, phrase.end);
        let result = &phrase.result;

        if result.kind == PhraseKind::Ordinal
            && result.value <= u128::from(self.options.ordinal_threshold)
        {
            tracing::debug!(
                phrase = &self.source[text.clone()],
                value = %result.value,
                "ordinal below threshold kept"
            );
            self.verbatim(phrase.start, phrase.end);
            return phrase.end;
        }

        if self.is_lone_ambiguous(&phrase) {
            tracing::debug!(
                phrase = &self.source[text.clone()],
                "standalone ambiguous word kept"
            );
            self.verbatim(phrase.start, phrase.end);
            return phrase.end;
        }

        let rendered = render(result, &self.grammar);
        tracing::debug!(
            phrase = &self.source[text.clone()],
            rendered = rendered.as_str(),
            kind = ?result.kind,
            "number substituted"
        );
        let digit = result.single_digit();
        self.last_digit_end = digit.map(|_| phrase.end);
        self.spans.push(Span::Number {
            range: text,
            rendered,
            digit,
        });
        phrase.end
    }

    fn verbatim(&mut self, start: usize, end: usize) {
        let range = self.byte_range(start, end);
        match self.spans.last_mut() {
            Some(Span::Verbatim(last)) if last.end == range.start => last.end = range.end,
            _ => self.spans.push(Span::Verbatim(range)),
        }
    }

    fn byte_range(&self, start: usize, end: usize) -> Range<usize> {
        self.lexemes[start].start..self.lexemes[end - 1].end
    }

    /// Whether only inline whitespace separates `pos` from the last lone
    /// digit phrase.
    fn follows_digit(&self, pos: usize) -> bool {
        match self.last_digit_end {
            Some(end) if end < pos => self.lexemes[end..pos]
                .iter()
                .all(|lexeme| lexeme.is_inline_space(self.source)),
            _ => false,
        }
    }

    // -----------------------------------------------------------------------
    // Standalone ambiguous words
    // -----------------------------------------------------------------------

    /// A single ambiguous word (`one` as a pronoun) with no number word next
    /// to it in the same sentence.
    fn is_lone_ambiguous(&self, phrase: &Phrase) -> bool {
        let result = &phrase.result;
        if result.kind != PhraseKind::Cardinal
            || result.sign.is_some()
            || phrase.end - phrase.start != 1
            || !self.lexemes[phrase.start].ambiguous_alone
        {
            return false;
        }
        let before = self.lexemes[..phrase.start].iter().rev();
        let after = self.lexemes[phrase.end..].iter();
        !(self.neighbour_is_number(before) || self.neighbour_is_number(after))
    }

    /// Whether the nearest word in `lexemes` within the sentence is a number
    /// word. Whitespace, non-terminal punctuation and conjunctions are
    /// skipped.
    fn neighbour_is_number<'l>(&self, lexemes: impl Iterator<Item = &'l Lexeme>) -> bool {
        for lexeme in lexemes {
            match lexeme.atom_type {
                AtomType::Word if lexeme.kind() == Some(NumberKind::Conjunction) => {}
                AtomType::Word => return lexeme.is_numeric(),
                AtomType::Punctuation
                    if lexeme.is_punctuation_where(self.source, is_sentence_terminator) =>
                {
                    return false;
                }
                AtomType::Punctuation | AtomType::Whitespace | AtomType::Unknown => {}
            }
        }
        false
    }
}

// ---------------------------------------------------------------------------
// Phone grouping
// ---------------------------------------------------------------------------

fn is_inline_gap(source: &str, span: &Span) -> bool {
    match span {
        Span::Verbatim(range) => source[range.clone()]
            .chars()
            .all(|c| c.is_whitespace() && !is_line_break(c)),
        Span::Number { .. } => false,
    }
}

/// Replace each run of at least [`PHONE_MIN_DIGITS`] digit spans separated
/// by inline whitespace with one grouped span.
fn group_phone_runs(source: &str, spans: Vec<Span>) -> Vec<Span> {
    let mut out: Vec<Span> = Vec::with_capacity(spans.len());
    let mut i = 0;

    while i < spans.len() {
        let mut digits = String::new();
        let mut end = i;
        let mut j = i;
        while let Some(Span::Number {
            digit: Some(digit), ..
        }) = spans.get(j)
        {
            digits.push(*digit);
            end = j;
            match spans.get(j + 1) {
                Some(gap) if is_inline_gap(source, gap) => j += 2,
                _ => break,
            }
        }

        if digits.chars().count() >= PHONE_MIN_DIGITS {
            let rendered = group_phone_digits(&digits);
            tracing::debug!(
                digits = digits.as_str(),
                rendered = rendered.as_str(),
                "phone number grouped"
            );
            out.push(Span::Number {
                range: spans[i].range().start..spans[end].range().end,
                rendered,
                digit: None,
            });
            i = end + 1;
        } else {
            out.push(spans[i].clone());
            i += 1;
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Rewrite every number phrase of `text` as digits.
///
/// Never fails: anything that does not form a valid phrase is copied
/// verbatim.
pub fn alpha2digit(text: &str, lexicon: &dyn Lexicon, options: &ScanOptions) -> String {
    let lexemes = lex(text, lexicon);
    let mut spans = Scanner::new(text, &lexemes, lexicon.grammar(), options).run();
    if options.group_phone_numbers {
        spans = group_phone_runs(text, spans);
    }

    let mut out = String::with_capacity(text.len());
    for span in &spans {
        match span {
            Span::Verbatim(range) => out.push_str(&text[range.clone()]),
            Span::Number { rendered, .. } => out.push_str(rendered),
        }
    }
    out
}
