// Atom and NumberToken public API types

use crate::enums::{AtomType, NumberKind};

// ---------------------------------------------------------------------------
// Atom
// ---------------------------------------------------------------------------

/// A piece of the input text produced by the tokenizer.
///
/// Atoms never overlap and, laid end to end, reproduce the input exactly.
/// Positions are byte offsets so that untouched spans can be sliced out of
/// the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    /// The type of this atom.
    pub atom_type: AtomType,

    /// The text exactly as it appears in the input.
    pub text: String,

    /// Lookup form of the text (empty for non-word atoms).
    pub normalized: String,

    /// Byte offset of this atom within the input.
    pub start: usize,
}

impl Atom {
    /// Create a new atom. `normalized` is only meaningful for words.
    pub fn new(
        atom_type: AtomType,
        text: impl Into<String>,
        normalized: impl Into<String>,
        start: usize,
    ) -> Self {
        Self {
            atom_type,
            text: text.into(),
            normalized: normalized.into(),
            start,
        }
    }

    /// Byte offset one past the end of this atom.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Whether this atom is whitespace containing no line break.
    pub fn is_inline_space(&self) -> bool {
        self.atom_type == AtomType::Whitespace
            && !self.text.chars().any(crate::character::is_line_break)
    }
}

// ---------------------------------------------------------------------------
// NumberToken
// ---------------------------------------------------------------------------

/// Classification of one lexeme, as returned by a [`crate::Lexicon`].
///
/// `value` is the magnitude the lexeme contributes (0 for structural
/// kinds). `suffix` is set for ordinal kinds only and holds the grammatical
/// ending copied from the source word, ready to be echoed on output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberToken {
    pub kind: NumberKind,
    pub value: u128,
    pub suffix: Option<String>,
}

impl NumberToken {
    /// A cardinal or structural token.
    pub fn new(kind: NumberKind, value: u128) -> Self {
        Self {
            kind,
            value,
            suffix: None,
        }
    }

    /// An ordinal token carrying its literal suffix.
    pub fn ordinal(kind: NumberKind, value: u128, suffix: impl Into<String>) -> Self {
        Self {
            kind,
            value,
            suffix: Some(suffix.into()),
        }
    }

    /// Whether this token is a number word proper (cardinal or ordinal).
    pub fn is_numeric(&self) -> bool {
        self.kind.is_numeric()
    }
}
