//! Number words to digits, per locale.
//!
//! Built-in lexicons (each behind a cargo feature, both on by default):
//!
//! - `ru`: Russian
//! - `en`: English
//!
//! Two entry points cover most uses:
//!
//! ```
//! use numwords_lang::{ScanOptions, alpha2digit, text2num};
//!
//! assert_eq!(text2num("тысяча девятьсот семьдесят три", "ru").unwrap(), 1973);
//! assert_eq!(
//!     alpha2digit("Двадцать пять коров", "ru", &ScanOptions::default()).unwrap(),
//!     "25 коров"
//! );
//! ```
//!
//! [`NumeralHandle`] keeps a locale and options together for repeated calls.

#[cfg(feature = "en")]
pub mod english;
pub mod handle;
pub mod locale;
#[cfg(feature = "ru")]
pub mod russian;

pub use handle::NumeralHandle;
pub use locale::LocaleId;
pub use numwords_core::NumeralError;
pub use numwords_engine::ScanOptions;

/// Parse `text` as exactly one cardinal number in `locale`.
///
/// Fails with [`NumeralError::UnknownLocale`] for a locale without a
/// lexicon, and with [`NumeralError::MalformedNumber`] or
/// [`NumeralError::MisplacedZero`] when `text` is not one valid number.
pub fn text2num(text: &str, locale: &str) -> Result<u128, NumeralError> {
    let locale: LocaleId = locale.parse()?;
    numwords_engine::text2num(text, locale.lexicon())
}

/// Rewrite every number phrase of `text` as digits.
///
/// Only an unknown locale fails; text that does not form a number is
/// copied unchanged.
pub fn alpha2digit(
    text: &str,
    locale: &str,
    options: &ScanOptions,
) -> Result<String, NumeralError> {
    let locale: LocaleId = locale.parse()?;
    Ok(numwords_engine::alpha2digit(text, locale.lexicon(), options))
}
