//! Locale-agnostic number-word recognition.
//!
//! The engine turns classified words into numbers. A [`Lexicon`] supplies
//! the word classification for one locale; everything else lives here:
//!
//! - [`tokenizer`]: atoms (words, punctuation, whitespace)
//! - [`lexeme`]: atoms classified by the lexicon, multi-word lexemes merged
//! - [`accumulator`]: the strict arithmetic grammar of one phrase
//! - [`overlay`]: signs, decimals and ordinals around the accumulator
//! - [`scanner`]: phrase detection and substitution in free text
//! - [`render`]: digit rendering
//!
//! ```ignore
//! let value = numwords_engine::text2num("twenty five", &lexicon)?;
//! let text = numwords_engine::alpha2digit("twenty five cows", &lexicon, &ScanOptions::default());
//! ```

pub mod accumulator;
pub mod lexeme;
pub mod options;
pub mod overlay;
pub mod render;
pub mod scanner;
pub mod tokenizer;

#[cfg(test)]
mod testing;

pub use numwords_core::{Lexicon, NumeralError};
pub use options::ScanOptions;
pub use scanner::alpha2digit;

use numwords_core::character::is_joining_hyphen;
use numwords_core::AtomType;

use accumulator::{Accumulator, Rejection};

/// Parse `text` as exactly one cardinal number phrase.
///
/// Words may be separated by whitespace or joined by a hyphen written
/// directly between two words. Anything else (another word, punctuation, a
/// stray hyphen, a sign, a decimal marker, an ordinal) makes the whole input
/// malformed.
pub fn text2num(text: &str, lexicon: &dyn Lexicon) -> Result<u128, NumeralError> {
    let lexemes = lexeme::lex(text, lexicon);
    let mut acc = Accumulator::new(&lexicon.grammar());
    let mut position = 0;

    for (i, lexeme) in lexemes.iter().enumerate() {
        if lexeme.atom_type == AtomType::Whitespace {
            continue;
        }
        if lexeme.is_punctuation_where(text, is_joining_hyphen) {
            let is_word =
                |j: usize| lexemes.get(j).is_some_and(|l| l.atom_type == AtomType::Word);
            if i > 0 && is_word(i - 1) && is_word(i + 1) {
                continue;
            }
        }
        let token = match &lexeme.token {
            Some(token) if !token.kind.is_ordinal() => token,
            _ => {
                return Err(NumeralError::MalformedNumber(format!(
                    "unexpected `{}` at word {position}",
                    lexeme.text(text)
                )));
            }
        };
        acc = acc.push(token).map_err(|reason| match reason {
            Rejection::MisplacedZero => NumeralError::MisplacedZero { position },
            other => NumeralError::MalformedNumber(format!("{other} at word {position}")),
        })?;
        position += 1;
    }

    if acc.consumed() == 0 {
        return Err(NumeralError::MalformedNumber("no number words".into()));
    }
    Ok(acc.value())
}
