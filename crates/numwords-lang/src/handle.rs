// NumeralHandle: one locale plus scan options.
//
// The handle resolves its lexicon once at construction and keeps the
// options used by `alpha2digit`. Lexicons are immutable statics, so a
// handle is cheap to create and safe to share between threads.

use numwords_core::{Lexicon, NumeralError};
use numwords_engine::ScanOptions;
use numwords_engine::lexeme::{Lexeme, lex};

use crate::locale::LocaleId;

/// Number-word conversion for one locale.
pub struct NumeralHandle {
    locale: LocaleId,
    lexicon: &'static dyn Lexicon,
    options: ScanOptions,
}

impl NumeralHandle {
    /// Create a handle with default options.
    ///
    /// `locale` is a language tag such as `"ru"` or `"en-US"`.
    pub fn new(locale: &str) -> Result<Self, NumeralError> {
        Self::with_options(locale, ScanOptions::default())
    }

    /// Create a handle with the given options.
    pub fn with_options(locale: &str, options: ScanOptions) -> Result<Self, NumeralError> {
        let locale: LocaleId = locale.parse()?;
        tracing::debug!(%locale, ?options, "numeral handle created");
        Ok(Self {
            locale,
            lexicon: locale.lexicon(),
            options,
        })
    }

    pub fn locale(&self) -> LocaleId {
        self.locale
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Parse `text` as exactly one cardinal number.
    pub fn text2num(&self, text: &str) -> Result<u128, NumeralError> {
        numwords_engine::text2num(text, self.lexicon)
    }

    /// Rewrite the number phrases of `text` as digits.
    pub fn alpha2digit(&self, text: &str) -> String {
        numwords_engine::alpha2digit(text, self.lexicon, &self.options)
    }

    /// Classified lexemes of `text`, for inspection.
    pub fn lexemes(&self, text: &str) -> Vec<Lexeme> {
        lex(text, self.lexicon)
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Let a tens word after a lone digit absorb the following unit.
    pub fn set_relaxed(&mut self, value: bool) {
        self.options.relaxed = value;
    }

    /// Set the value at or below which ordinals stay as words.
    pub fn set_ordinal_threshold(&mut self, value: u64) {
        self.options.ordinal_threshold = value;
    }

    /// Set whether plus/minus words are read as signs.
    pub fn set_signed(&mut self, value: bool) {
        self.options.signed = value;
    }

    /// Set whether long digit runs are grouped like phone numbers.
    pub fn set_group_phone_numbers(&mut self, value: bool) {
        self.options.group_phone_numbers = value;
    }
}
