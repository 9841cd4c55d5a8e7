// Errors surfaced at the public call boundary.

/// Error type for number recognition.
///
/// Only `text2num` and locale selection fail; `alpha2digit` recovers from
/// malformed phrases locally and never returns the first two variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    /// The text is not one strictly valid number phrase: magnitude order
    /// or repeat violation, scale ascent, leftover words, or overflow.
    #[error("malformed number: {0}")]
    MalformedNumber(String),

    /// A zero word appeared after the number had started.
    #[error("misplaced zero at word {position}")]
    MisplacedZero {
        /// Zero-based index of the offending word.
        position: usize,
    },

    /// No lexicon is available for the requested locale.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}
