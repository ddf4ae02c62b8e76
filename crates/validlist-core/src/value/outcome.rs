//! Outcome - result of validating a probe value

use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::width::ScoreWidth;
use crate::error::{Result, ValidlistError};

/// The decoded tag of an [`Outcome`].
///
/// Raw encodings relative to `MAX` of the width: `Pass = 0`,
/// `Perfect = MAX-1`, `Fail = MAX`. `Score(n)` covers `1..=MAX-2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OutcomeKind<W = u32> {
    /// Accepted without a score.
    Pass,
    /// Accepted with score points.
    Score(W),
    /// Accepted as a perfect match.
    Perfect,
    /// Rejected.
    Fail,
}

/// The result of validating a probe value: pass, fail, perfect, or a score.
///
/// Arithmetic is sentinel-absorbing: `FAIL` dominates every operation, then
/// `PERFECT`, otherwise score points combine numerically. Numeric results
/// saturate at the largest plain score and at `PASS`, so a sum can never
/// alias a sentinel.
///
/// `PartialEq` is structural. The validation truth table, where a failure
/// never matches anything and a perfect result matches every non-failure,
/// lives in [`Outcome::matches`] and the related comparison methods.
///
/// # Examples
///
/// ```
/// use validlist_core::Outcome;
///
/// let a: Outcome = Outcome::from_raw(12);
/// let b = Outcome::from_raw(432);
///
/// assert_eq!((a + b).raw(), 444);
/// assert!((a + Outcome::PERFECT).is_perfect());
/// assert!((Outcome::<u32>::PERFECT + Outcome::FAIL).is_fail());
/// assert!(Outcome::FAIL.is_below(&a));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "OutcomeKind<W>",
        into = "OutcomeKind<W>",
        bound(serialize = "W: ScoreWidth + serde::Serialize",
              deserialize = "W: ScoreWidth + serde::Deserialize<'de>")
    )
)]
pub struct Outcome<W = u32> {
    kind: OutcomeKind<W>,
}

impl<W> Outcome<W> {
    /// Pass result, the identity for addition.
    pub const PASS: Self = Outcome { kind: OutcomeKind::Pass };

    /// Perfect result.
    pub const PERFECT: Self = Outcome { kind: OutcomeKind::Perfect };

    /// Failed result.
    pub const FAIL: Self = Outcome { kind: OutcomeKind::Fail };
}

impl<W: ScoreWidth> Outcome<W> {
    /// Decodes a raw integer. Every integer is a legal outcome.
    pub fn from_raw(raw: W) -> Self {
        let kind = if raw.is_zero() {
            OutcomeKind::Pass
        } else if raw == W::max_value() {
            OutcomeKind::Fail
        } else if raw == W::below_max(1) {
            OutcomeKind::Perfect
        } else {
            OutcomeKind::Score(raw)
        };
        Outcome { kind }
    }

    /// Creates a plain score outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ValidlistError::ReservedScore`] for `0` and for the
    /// sentinel range `MAX-1..=MAX`.
    pub fn score(score: W) -> Result<Self> {
        if score.is_zero() || score > Self::max_score() {
            return Err(ValidlistError::ReservedScore {
                score: score.widen(),
                max_score: Self::max_score().widen(),
            });
        }
        Ok(Outcome {
            kind: OutcomeKind::Score(score),
        })
    }

    /// Largest plain score representable at this width.
    #[inline]
    pub fn max_score() -> W {
        W::below_max(2)
    }

    // Clamps a numeric result into the score range; `None` means overflow.
    fn from_points(points: Option<W>) -> Self {
        match points {
            Some(points) if points.is_zero() => Self::PASS,
            Some(points) if points <= Self::max_score() => Outcome {
                kind: OutcomeKind::Score(points),
            },
            _ => Outcome {
                kind: OutcomeKind::Score(Self::max_score()),
            },
        }
    }

    /// Returns the raw encoding.
    pub fn raw(&self) -> W {
        match self.kind {
            OutcomeKind::Pass => W::zero(),
            OutcomeKind::Score(score) => score,
            OutcomeKind::Perfect => W::below_max(1),
            OutcomeKind::Fail => W::max_value(),
        }
    }

    /// Returns the decoded tag.
    #[inline]
    pub fn kind(&self) -> OutcomeKind<W> {
        self.kind
    }

    #[inline]
    pub fn is_fail(&self) -> bool {
        self.kind == OutcomeKind::Fail
    }

    #[inline]
    pub fn is_pass(&self) -> bool {
        self.kind == OutcomeKind::Pass
    }

    #[inline]
    pub fn is_perfect(&self) -> bool {
        self.kind == OutcomeKind::Perfect
    }

    /// Returns true for `FAIL` or `PERFECT`.
    #[inline]
    pub fn is_special(&self) -> bool {
        matches!(self.kind, OutcomeKind::Fail | OutcomeKind::Perfect)
    }

    /// Returns true unless the outcome is `FAIL` or `PERFECT`.
    #[inline]
    pub fn is_not_special(&self) -> bool {
        !self.is_special()
    }

    /// Returns true for `FAIL`, `PASS` or `PERFECT`.
    #[inline]
    pub fn is_any_special(&self) -> bool {
        !self.is_score()
    }

    /// Returns true for plain scores.
    #[inline]
    pub fn is_score(&self) -> bool {
        matches!(self.kind, OutcomeKind::Score(_))
    }

    /// Returns true unless the outcome is `FAIL`.
    #[inline]
    pub fn is_ok(&self) -> bool {
        !self.is_fail()
    }

    /// Validation equality: false if either side failed, true if either side
    /// is perfect, otherwise raw equality.
    pub fn matches(&self, other: &Self) -> bool {
        if self.is_fail() || other.is_fail() {
            return false;
        }
        if self.is_perfect() || other.is_perfect() {
            return true;
        }
        self.raw() == other.raw()
    }

    /// Negation of [`matches`](Self::matches).
    pub fn differs(&self, other: &Self) -> bool {
        !self.matches(other)
    }

    /// True if `self` failed when either side failed, otherwise `raw < raw`.
    pub fn is_below(&self, other: &Self) -> bool {
        if self.is_fail() || other.is_fail() {
            return self.is_fail();
        }
        self.raw() < other.raw()
    }

    /// True if `other` failed when either side failed, otherwise `raw > raw`.
    pub fn is_above(&self, other: &Self) -> bool {
        if self.is_fail() || other.is_fail() {
            return other.is_fail();
        }
        self.raw() > other.raw()
    }

    /// True if `self` failed when either side failed, otherwise `raw <= raw`.
    pub fn is_at_most(&self, other: &Self) -> bool {
        if self.is_fail() || other.is_fail() {
            return self.is_fail();
        }
        self.raw() <= other.raw()
    }

    /// True if `other` failed when either side failed, otherwise `raw >= raw`.
    pub fn is_at_least(&self, other: &Self) -> bool {
        if self.is_fail() || other.is_fail() {
            return other.is_fail();
        }
        self.raw() >= other.raw()
    }
}

impl<W> Default for Outcome<W> {
    fn default() -> Self {
        Outcome::PASS
    }
}

impl<W: ScoreWidth> From<W> for Outcome<W> {
    fn from(raw: W) -> Self {
        Outcome::from_raw(raw)
    }
}

impl<W: ScoreWidth> TryFrom<OutcomeKind<W>> for Outcome<W> {
    type Error = ValidlistError;

    fn try_from(kind: OutcomeKind<W>) -> Result<Self> {
        match kind {
            OutcomeKind::Score(score) => Outcome::score(score),
            other => Ok(Outcome { kind: other }),
        }
    }
}

impl<W> From<Outcome<W>> for OutcomeKind<W> {
    fn from(outcome: Outcome<W>) -> Self {
        outcome.kind
    }
}

impl<W: ScoreWidth> Add for Outcome<W> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        if self.is_fail() || other.is_fail() {
            return Outcome::FAIL;
        }
        if self.is_perfect() || other.is_perfect() {
            return Outcome::PERFECT;
        }
        Outcome::from_points(self.raw().checked_add(&other.raw()))
    }
}

impl<W: ScoreWidth> Sub for Outcome<W> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        if self.is_fail() || other.is_fail() {
            return Outcome::FAIL;
        }
        if self.is_perfect() || other.is_perfect() {
            return Outcome::PERFECT;
        }
        Outcome::from_points(Some(self.raw().saturating_sub(other.raw())))
    }
}

impl<W: ScoreWidth> AddAssign for Outcome<W> {
    fn add_assign(&mut self, other: Self) {
        if other.is_fail() {
            *self = Outcome::FAIL;
            return;
        }
        // FAIL and PERFECT absorb further points.
        if self.is_special() {
            return;
        }
        if other.is_perfect() {
            *self = Outcome::PERFECT;
            return;
        }
        *self = Outcome::from_points(self.raw().checked_add(&other.raw()));
    }
}

impl<W: ScoreWidth> SubAssign for Outcome<W> {
    fn sub_assign(&mut self, other: Self) {
        if other.is_fail() {
            *self = Outcome::FAIL;
            return;
        }
        if self.is_special() {
            return;
        }
        if other.is_perfect() {
            *self = Outcome::PERFECT;
            return;
        }
        *self = Outcome::from_points(Some(self.raw().saturating_sub(other.raw())));
    }
}

impl<W: ScoreWidth> Sum for Outcome<W> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Outcome::PASS, |total, outcome| total + outcome)
    }
}

impl_tag_display!(Outcome, OutcomeKind, "Return value" {
    Pass => "PASS",
    Fail => "FAIL",
    Perfect => "PERFECT",
});
