// Lexemes: atoms with their number classification attached.
//
// Adjacent words are offered to the lexicon as growing windows (one word,
// two words separated by a single inline space, ...). The longest window
// the lexicon recognizes wins and becomes one lexeme spanning all of its
// words, so a two-word decimal marker classifies before its first word is
// looked up on its own.

use numwords_core::{Atom, AtomType, Lexicon, NumberKind, NumberToken};

use crate::tokenizer::tokenize;

/// One unit of scanning: an atom, or several words merged into a single
/// multi-word lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub atom_type: AtomType,

    /// Classification, for words the lexicon recognizes.
    pub token: Option<NumberToken>,

    /// Byte range in the source text.
    pub start: usize,
    pub end: usize,

    /// Lookup form (words joined by single spaces); empty for non-words.
    pub normalized: String,

    /// The lexicon flagged this word as unsafe to convert on its own.
    pub ambiguous_alone: bool,
}

impl Lexeme {
    fn from_atom(atom: &Atom) -> Self {
        Self {
            atom_type: atom.atom_type,
            token: None,
            start: atom.start,
            end: atom.end(),
            normalized: atom.normalized.clone(),
            ambiguous_alone: false,
        }
    }

    /// The number classification kind, if any.
    pub fn kind(&self) -> Option<NumberKind> {
        self.token.as_ref().map(|t| t.kind)
    }

    /// Whether this lexeme is a cardinal or ordinal number word.
    pub fn is_numeric(&self) -> bool {
        self.token.as_ref().is_some_and(NumberToken::is_numeric)
    }

    /// The lexeme's text as written in `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// Whitespace without a line break.
    pub fn is_inline_space(&self, source: &str) -> bool {
        self.atom_type == AtomType::Whitespace
            && !self
                .text(source)
                .chars()
                .any(numwords_core::character::is_line_break)
    }

    /// A single punctuation character satisfying `pred`.
    pub fn is_punctuation_where(&self, source: &str, pred: impl Fn(char) -> bool) -> bool {
        if self.atom_type != AtomType::Punctuation {
            return false;
        }
        let mut chars = self.text(source).chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => pred(c),
            // Ellipsis written as three dots.
            (Some('.'), Some('.')) => pred('\u{2026}'),
            _ => false,
        }
    }
}

/// Indices of the word atoms forming candidate windows starting at `first`:
/// each next word must follow the previous one across exactly one inline
/// whitespace atom.
fn window_ends(atoms: &[Atom], first: usize, max_words: usize) -> Vec<usize> {
    let mut ends = vec![first];
    while ends.len() < max_words {
        let last = ends[ends.len() - 1];
        match (atoms.get(last + 1), atoms.get(last + 2)) {
            (Some(space), Some(word))
                if space.is_inline_space() && word.atom_type == AtomType::Word =>
            {
                ends.push(last + 2);
            }
            _ => break,
        }
    }
    ends
}

fn join_words(atoms: &[Atom], first: usize, last: usize, pick: impl Fn(&Atom) -> &str) -> String {
    atoms[first..=last]
        .iter()
        .filter(|a| a.atom_type == AtomType::Word)
        .map(pick)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Longest lexicon match starting at word atom `first`.
fn longest_match(
    atoms: &[Atom],
    first: usize,
    lexicon: &dyn Lexicon,
) -> Option<(NumberToken, usize, String)> {
    let max_words = lexicon.max_lexeme_words().max(1);
    for &last in window_ends(atoms, first, max_words).iter().rev() {
        let normalized = join_words(atoms, first, last, |a| a.normalized.as_str());
        let original = join_words(atoms, first, last, |a| a.text.as_str());
        if let Some(token) = lexicon.classify(&normalized, &original) {
            return Some((token, last, normalized));
        }
    }
    None
}

/// Tokenize `text` and classify its words.
pub fn lex(text: &str, lexicon: &dyn Lexicon) -> Vec<Lexeme> {
    let atoms = tokenize(text, lexicon);
    let mut lexemes = Vec::with_capacity(atoms.len());
    let mut i = 0;

    while i < atoms.len() {
        if atoms[i].atom_type == AtomType::Word {
            if let Some((token, last, normalized)) = longest_match(&atoms, i, lexicon) {
                let ambiguous_alone = lexicon.is_ambiguous_alone(&normalized);
                lexemes.push(Lexeme {
                    atom_type: AtomType::Word,
                    token: Some(token),
                    start: atoms[i].start,
                    end: atoms[last].end(),
                    normalized,
                    ambiguous_alone,
                });
                i = last + 1;
                continue;
            }
        }
        lexemes.push(Lexeme::from_atom(&atoms[i]));
        i += 1;
    }
    lexemes
}
