// Accumulator: the strict arithmetic grammar of one number phrase.
//
// The state is a small `Copy` struct. Every transition takes the state by
// value and returns the next state or a `Rejection`, so a caller that
// wants the longest valid prefix simply keeps the last state that was
// accepted.
//
// Registers:
// - `total`: sum of all closed scale groups
// - `segment`: the open group (0-999, or more when a counting noun or a
//   multiplying hundred builds it), with one flag per magnitude class
// - `last_scale`: the smallest scale consumed so far; `None` means no scale
//   yet and plays the role of +infinity
//
// Magnitude classes fill in strictly descending order, each at most once
// per group: hundreds, then tens or teens, then units. A teen occupies
// both the tens and the units class.

use numwords_core::{LocaleGrammar, NumberKind, NumberToken};

/// Why a token cannot extend the current phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// A magnitude class is filled twice in one group (`sixty fifty`).
    #[error("magnitude class repeated within one group")]
    RepeatedClass,
    /// A larger class follows a smaller one (`five twenty`, `sixty hundred`).
    #[error("magnitude classes out of order")]
    MagnitudeOrder,
    /// A scale word is not smaller than the previous one (`thousand thousand`).
    #[error("scale words out of order")]
    ScaleOrder,
    /// A zero word after the number started.
    #[error("zero after the number started")]
    MisplacedZero,
    /// The value does not fit in 128 bits.
    #[error("number too large")]
    Overflow,
    /// The token is not a number word.
    #[error("not a number word")]
    NotNumeric,
    /// An ordinal already closed the phrase.
    #[error("phrase already closed by an ordinal")]
    Closed,
}

/// The open scale group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Segment {
    pub value: u128,
    pub has_hundred: bool,
    pub has_tens: bool,
    pub has_teen: bool,
    pub has_unit: bool,
}

impl Segment {
    /// No class filled yet.
    pub fn is_empty(&self) -> bool {
        !(self.has_hundred || self.has_tens || self.has_unit) && self.value == 0
    }
}

/// Accumulator state for one phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accumulator {
    total: u128,
    segment: Segment,
    last_scale: Option<u128>,
    leading_zeros: usize,
    consumed: usize,
    closed: bool,
    hundred_multiplies: bool,
}

impl Accumulator {
    pub fn new(grammar: &LocaleGrammar) -> Self {
        Self {
            total: 0,
            segment: Segment::default(),
            last_scale: None,
            leading_zeros: 0,
            consumed: 0,
            closed: false,
            hundred_multiplies: grammar.hundred_multiplies,
        }
    }

    /// Feed one token. On success the returned state includes it.
    pub fn push(self, token: &NumberToken) -> Result<Self, Rejection> {
        if self.closed {
            return Err(Rejection::Closed);
        }
        let class = token.kind.cardinal_class().ok_or(Rejection::NotNumeric)?;
        let mut next = match class {
            NumberKind::Zero => self.push_zero(),
            NumberKind::Unit => self.push_unit(token.value),
            NumberKind::Teen => self.push_tens(token.value, true),
            NumberKind::Ten => self.push_tens(token.value, false),
            NumberKind::Hundred if self.hundred_multiplies => self.push_hundred_multiplier(token.value),
            NumberKind::Hundred => self.push_hundred(token.value),
            NumberKind::Scale => self.push_scale(token.value),
            _ => Err(Rejection::NotNumeric),
        }?;
        next.total
            .checked_add(next.segment.value)
            .ok_or(Rejection::Overflow)?;
        next.consumed += 1;
        next.closed = token.kind.is_ordinal();
        Ok(next)
    }

    /// Arithmetic value of everything consumed so far.
    pub fn value(&self) -> u128 {
        self.total.saturating_add(self.segment.value)
    }

    /// Number of tokens accepted, zeros included.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of zero tokens before the first digit content.
    pub fn leading_zeros(&self) -> usize {
        self.leading_zeros
    }

    /// Whether an ordinal closed the phrase.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether any digit content (not just zeros) has been consumed.
    pub fn has_content(&self) -> bool {
        self.total > 0 || self.last_scale.is_some() || !self.segment.is_empty()
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    fn push_zero(mut self) -> Result<Self, Rejection> {
        if self.has_content() {
            return Err(Rejection::MisplacedZero);
        }
        self.leading_zeros += 1;
        Ok(self)
    }

    fn push_unit(mut self, value: u128) -> Result<Self, Rejection> {
        if self.segment.has_unit {
            return Err(Rejection::RepeatedClass);
        }
        if self.segment.has_teen {
            return Err(Rejection::MagnitudeOrder);
        }
        self.segment.value += value;
        self.segment.has_unit = true;
        Ok(self)
    }

    fn push_tens(mut self, value: u128, teen: bool) -> Result<Self, Rejection> {
        if self.segment.has_tens {
            return Err(Rejection::RepeatedClass);
        }
        if self.segment.has_unit {
            return Err(Rejection::MagnitudeOrder);
        }
        self.segment.value += value;
        self.segment.has_tens = true;
        self.segment.has_teen = teen;
        Ok(self)
    }

    /// Hundred as a word of its own: must open the group.
    fn push_hundred(mut self, value: u128) -> Result<Self, Rejection> {
        if self.segment.has_hundred {
            return Err(Rejection::RepeatedClass);
        }
        if !self.segment.is_empty() {
            return Err(Rejection::MagnitudeOrder);
        }
        self.segment.value = value;
        self.segment.has_hundred = true;
        Ok(self)
    }

    /// Hundred as a multiplier of the group built so far (`two hundred`,
    /// `twelve hundred`); a bare hundred counts as one hundred. Only units
    /// and teens multiply: `sixty hundred` is out of order.
    fn push_hundred_multiplier(mut self, value: u128) -> Result<Self, Rejection> {
        if self.segment.has_hundred {
            return Err(Rejection::RepeatedClass);
        }
        if self.segment.has_tens && !self.segment.has_teen {
            return Err(Rejection::MagnitudeOrder);
        }
        let factor = if self.segment.value == 0 { 1 } else { self.segment.value };
        self.segment = Segment {
            value: factor.checked_mul(value).ok_or(Rejection::Overflow)?,
            has_hundred: true,
            ..Segment::default()
        };
        Ok(self)
    }

    /// Counting noun of hundreds (`двенадцать сотен`): multiplies the open
    /// group and stays inside it, so a larger scale can still follow
    /// (`пять сотен тысяч`).
    fn push_counted_hundreds(mut self, value: u128) -> Result<Self, Rejection> {
        if self.segment.has_hundred {
            return Err(Rejection::RepeatedClass);
        }
        let factor = if self.segment.value == 0 { 1 } else { self.segment.value };
        self.segment = Segment {
            value: factor.checked_mul(value).ok_or(Rejection::Overflow)?,
            has_hundred: true,
            ..Segment::default()
        };
        Ok(self)
    }

    fn push_scale(mut self, scale: u128) -> Result<Self, Rejection> {
        if scale < 1_000 {
            return self.push_counted_hundreds(scale);
        }
        if self.last_scale.is_some_and(|last| scale >= last) {
            return Err(Rejection::ScaleOrder);
        }
        let group = if self.segment.value == 0 { 1 } else { self.segment.value };
        let contribution = group.checked_mul(scale).ok_or(Rejection::Overflow)?;
        self.total = self
            .total
            .checked_add(contribution)
            .ok_or(Rejection::Overflow)?;
        self.segment = Segment::default();
        self.last_scale = Some(scale);
        Ok(self)
    }
}
