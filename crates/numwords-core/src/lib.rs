//! Shared types for numwords.
//!
//! This crate holds everything the locale-agnostic engine and the
//! per-locale lexicons need to agree on, and nothing else:
//!
//! - [`character`] -- Character classification used by the tokenizer
//! - [`enums`] -- Atom, sign and phrase kinds
//! - [`token`] -- Text atoms and classified number tokens
//! - [`lexicon`] -- The `Lexicon` capability and per-locale grammar parameters
//! - [`error`] -- Errors surfaced at the public call boundary

pub mod character;
pub mod enums;
pub mod error;
pub mod lexicon;
pub mod token;

pub use enums::{AtomType, NumberKind, PhraseKind, Sign};
pub use error::NumeralError;
pub use lexicon::{Lexicon, LocaleGrammar};
pub use token::{Atom, NumberToken};
