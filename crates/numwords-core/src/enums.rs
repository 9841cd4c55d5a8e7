// Shared enums: AtomType, NumberKind, Sign, PhraseKind

/// Atom types produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomType {
    /// Run of letters and/or digits.
    Word,
    /// Single punctuation character (or an ellipsis written as three dots).
    Punctuation,
    /// Run of whitespace characters.
    Whitespace,
    /// Character that is neither a letter, digit, whitespace nor punctuation.
    Unknown,
}

/// Sign carried by a `plus`/`minus` word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// The symbol written in front of a rendered number.
    pub fn symbol(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

/// Classification of one lexeme.
///
/// Cardinal kinds feed the accumulator directly. Ordinal kinds contribute
/// exactly like their cardinal counterpart and close the phrase. The
/// remaining kinds are structural: they never carry a value of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Zero,
    /// 1-9.
    Unit,
    /// 10-19.
    Teen,
    /// 20, 30, ... 90.
    Ten,
    /// 100-900, or the multiplier word in locales where hundred multiplies.
    Hundred,
    /// Power-of-1000 multiplier (and counting nouns such as Russian `сотня`).
    Scale,
    OrdinalUnit,
    OrdinalTeen,
    OrdinalTen,
    OrdinalHundred,
    OrdinalScale,
    DecimalMarker,
    Sign(Sign),
    Conjunction,
    /// Filler that is transparent between two number words of one phrase.
    Ignorable,
}

impl NumberKind {
    /// Whether this kind closes a phrase as an ordinal.
    pub fn is_ordinal(self) -> bool {
        matches!(
            self,
            NumberKind::OrdinalUnit
                | NumberKind::OrdinalTeen
                | NumberKind::OrdinalTen
                | NumberKind::OrdinalHundred
                | NumberKind::OrdinalScale
        )
    }

    /// The cardinal kind an ordinal contributes as. Cardinal kinds map to
    /// themselves; structural kinds have no cardinal class.
    pub fn cardinal_class(self) -> Option<NumberKind> {
        match self {
            NumberKind::Zero
            | NumberKind::Unit
            | NumberKind::Teen
            | NumberKind::Ten
            | NumberKind::Hundred
            | NumberKind::Scale => Some(self),
            NumberKind::OrdinalUnit => Some(NumberKind::Unit),
            NumberKind::OrdinalTeen => Some(NumberKind::Teen),
            NumberKind::OrdinalTen => Some(NumberKind::Ten),
            NumberKind::OrdinalHundred => Some(NumberKind::Hundred),
            NumberKind::OrdinalScale => Some(NumberKind::Scale),
            NumberKind::DecimalMarker
            | NumberKind::Sign(_)
            | NumberKind::Conjunction
            | NumberKind::Ignorable => None,
        }
    }

    /// Whether this kind is a number word proper (cardinal or ordinal).
    pub fn is_numeric(self) -> bool {
        self.cardinal_class().is_some()
    }
}

/// Shape of a recognized phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhraseKind {
    Cardinal,
    Ordinal,
    Decimal,
}
