// Locale registry: identifiers and their lexicons.

use std::fmt;
use std::str::FromStr;

use numwords_core::{Lexicon, NumeralError};

/// A locale with a built-in lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleId {
    #[cfg(feature = "ru")]
    Russian,
    #[cfg(feature = "en")]
    English,
}

impl LocaleId {
    /// Every locale compiled into this build.
    pub fn all() -> &'static [LocaleId] {
        &[
            #[cfg(feature = "ru")]
            LocaleId::Russian,
            #[cfg(feature = "en")]
            LocaleId::English,
        ]
    }

    /// Primary language subtag (`"ru"`).
    pub fn code(self) -> &'static str {
        self.lexicon().locale()
    }

    /// The shared, immutable lexicon of this locale.
    pub fn lexicon(self) -> &'static dyn Lexicon {
        match self {
            #[cfg(feature = "ru")]
            LocaleId::Russian => &crate::russian::RussianLexicon,
            #[cfg(feature = "en")]
            LocaleId::English => &crate::english::EnglishLexicon,
        }
    }
}

impl FromStr for LocaleId {
    type Err = NumeralError;

    /// Accepts a language tag and matches its primary subtag case
    /// insensitively: `ru`, `RU`, `ru-RU` and `ru_RU` all select Russian.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        LocaleId::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == primary)
            .ok_or_else(|| NumeralError::UnknownLocale(tag.to_string()))
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
