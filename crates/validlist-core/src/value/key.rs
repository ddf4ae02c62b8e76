//! Key - tag describing the role of a stored entry

use std::cmp::Ordering;
use std::str::FromStr;

use super::outcome::Outcome;
use super::width::ScoreWidth;
use crate::error::{Result, ValidlistError};

/// The decoded tag of a [`Key`].
///
/// Raw encodings relative to `MAX` of the width: `Whitelist = 0`,
/// `Minimum = MAX-4`, `Maximum = MAX-3`, `Perfect = MAX-2`,
/// `Blacklist = MAX-1`, `Null = MAX`. `Score(n)` covers `1..=MAX-5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KeyKind<W = u32> {
    /// Value is accepted.
    Whitelist,
    /// Value is accepted with a score.
    Score(W),
    /// Value is a lower bound.
    Minimum,
    /// Value is an upper bound.
    Maximum,
    /// Value is accepted as a perfect match.
    Perfect,
    /// Value is rejected.
    Blacklist,
    /// No tag; never matches.
    Null,
}

/// A tag labeling a stored value as whitelisted, blacklisted, a bound,
/// perfect, or score-weighted.
///
/// Keys are immutable. Plain scores are guaranteed never to collide with a
/// sentinel: decoding a raw integer maps the sentinel range to its tag, and
/// [`Key::score`] refuses reserved values.
///
/// Ordering treats [`Key::NULL`] as the least key: whenever either side is
/// null the raw comparison is inverted, otherwise raw values compare
/// numerically.
///
/// # Examples
///
/// ```
/// use validlist_core::Key;
///
/// let small: Key = Key::from_raw(5);
/// let big: Key = Key::from_raw(573_789);
///
/// assert!(small < big);
/// assert!(Key::<u32>::NULL < Key::WHITELIST);
/// assert!(Key::<u32>::BLACKLIST > big);
/// assert_eq!(Key::<u8>::from_raw(254), Key::BLACKLIST);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "KeyKind<W>",
        into = "KeyKind<W>",
        bound(serialize = "W: ScoreWidth + serde::Serialize",
              deserialize = "W: ScoreWidth + serde::Deserialize<'de>")
    )
)]
pub struct Key<W = u32> {
    kind: KeyKind<W>,
}

impl<W> Key<W> {
    /// Whitelist tag.
    pub const WHITELIST: Self = Key { kind: KeyKind::Whitelist };

    /// Lower bound tag.
    pub const MINIMUM: Self = Key { kind: KeyKind::Minimum };

    /// Upper bound tag.
    pub const MAXIMUM: Self = Key { kind: KeyKind::Maximum };

    /// Perfect match tag.
    pub const PERFECT: Self = Key { kind: KeyKind::Perfect };

    /// Blacklist tag.
    pub const BLACKLIST: Self = Key { kind: KeyKind::Blacklist };

    /// Null tag.
    pub const NULL: Self = Key { kind: KeyKind::Null };
}

impl<W: ScoreWidth> Key<W> {
    /// Decodes a raw integer. Every integer is a legal key.
    pub fn from_raw(raw: W) -> Self {
        let kind = if raw.is_zero() {
            KeyKind::Whitelist
        } else if raw == W::max_value() {
            KeyKind::Null
        } else if raw == W::below_max(1) {
            KeyKind::Blacklist
        } else if raw == W::below_max(2) {
            KeyKind::Perfect
        } else if raw == W::below_max(3) {
            KeyKind::Maximum
        } else if raw == W::below_max(4) {
            KeyKind::Minimum
        } else {
            KeyKind::Score(raw)
        };
        Key { kind }
    }

    /// Creates a plain score key.
    ///
    /// # Errors
    ///
    /// Returns [`ValidlistError::ReservedScore`] for `0` and for the
    /// sentinel range `MAX-4..=MAX`.
    pub fn score(score: W) -> Result<Self> {
        if score.is_zero() || score > Self::max_score() {
            return Err(ValidlistError::ReservedScore {
                score: score.widen(),
                max_score: Self::max_score().widen(),
            });
        }
        Ok(Key {
            kind: KeyKind::Score(score),
        })
    }

    /// Largest plain score representable at this width.
    #[inline]
    pub fn max_score() -> W {
        W::below_max(5)
    }

    /// Parses a tag name (`whitelist`, `blacklist`, `minimum`, `maximum`,
    /// `perfect`, `null`), ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self> {
        let key = match name.trim().to_ascii_lowercase().as_str() {
            "whitelist" => Self::WHITELIST,
            "blacklist" => Self::BLACKLIST,
            "minimum" => Self::MINIMUM,
            "maximum" => Self::MAXIMUM,
            "perfect" => Self::PERFECT,
            "null" | "null_key" => Self::NULL,
            _ => return Err(ValidlistError::InvalidKeyName(name.to_string())),
        };
        Ok(key)
    }

    /// Returns the raw encoding.
    pub fn raw(&self) -> W {
        match self.kind {
            KeyKind::Whitelist => W::zero(),
            KeyKind::Score(score) => score,
            KeyKind::Minimum => W::below_max(4),
            KeyKind::Maximum => W::below_max(3),
            KeyKind::Perfect => W::below_max(2),
            KeyKind::Blacklist => W::below_max(1),
            KeyKind::Null => W::max_value(),
        }
    }

    /// Returns the decoded tag.
    #[inline]
    pub fn kind(&self) -> KeyKind<W> {
        self.kind
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.kind == KeyKind::Null
    }

    #[inline]
    pub fn is_whitelist(&self) -> bool {
        self.kind == KeyKind::Whitelist
    }

    #[inline]
    pub fn is_blacklist(&self) -> bool {
        self.kind == KeyKind::Blacklist
    }

    #[inline]
    pub fn is_perfect(&self) -> bool {
        self.kind == KeyKind::Perfect
    }

    #[inline]
    pub fn is_minimum(&self) -> bool {
        self.kind == KeyKind::Minimum
    }

    #[inline]
    pub fn is_maximum(&self) -> bool {
        self.kind == KeyKind::Maximum
    }

    /// Returns true for plain score keys.
    #[inline]
    pub fn is_score(&self) -> bool {
        matches!(self.kind, KeyKind::Score(_))
    }

    /// Returns true for minimum or maximum keys.
    #[inline]
    pub fn is_bound(&self) -> bool {
        matches!(self.kind, KeyKind::Minimum | KeyKind::Maximum)
    }

    /// Returns true for keys that accept a matching value
    /// (whitelist, perfect, or a plain score).
    #[inline]
    pub fn is_accepting(&self) -> bool {
        matches!(
            self.kind,
            KeyKind::Whitelist | KeyKind::Perfect | KeyKind::Score(_)
        )
    }

    /// Maps a matched key to the outcome it produces.
    ///
    /// | Key          | Outcome    |
    /// |--------------|------------|
    /// | `WHITELIST`  | `PASS`     |
    /// | `PERFECT`    | `PERFECT`  |
    /// | `BLACKLIST`  | `FAIL`     |
    /// | score `n`    | score `n`  |
    ///
    /// Bounds and null keys have no outcome.
    pub fn to_outcome(&self) -> Option<Outcome<W>> {
        match self.kind {
            KeyKind::Whitelist => Some(Outcome::PASS),
            KeyKind::Perfect => Some(Outcome::PERFECT),
            KeyKind::Blacklist => Some(Outcome::FAIL),
            // Key scores stop at MAX-5, well inside the outcome score range.
            KeyKind::Score(score) => Some(Outcome::from_raw(score)),
            KeyKind::Minimum | KeyKind::Maximum | KeyKind::Null => None,
        }
    }
}

impl<W> Default for Key<W> {
    fn default() -> Self {
        Key::NULL
    }
}

impl<W: ScoreWidth> Ord for Key<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.is_null() || other.is_null() {
            other.raw().cmp(&self.raw())
        } else {
            self.raw().cmp(&other.raw())
        }
    }
}

impl<W: ScoreWidth> PartialOrd for Key<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: ScoreWidth> From<W> for Key<W> {
    fn from(raw: W) -> Self {
        Key::from_raw(raw)
    }
}

impl<W: ScoreWidth> TryFrom<KeyKind<W>> for Key<W> {
    type Error = ValidlistError;

    fn try_from(kind: KeyKind<W>) -> Result<Self> {
        match kind {
            KeyKind::Score(score) => Key::score(score),
            other => Ok(Key { kind: other }),
        }
    }
}

impl<W> From<Key<W>> for KeyKind<W> {
    fn from(key: Key<W>) -> Self {
        key.kind
    }
}

impl<W: ScoreWidth> FromStr for Key<W> {
    type Err = ValidlistError;

    /// Parses a tag name or a plain score.
    fn from_str(s: &str) -> Result<Self> {
        match W::from_str_radix(s.trim(), 10) {
            Ok(score) => Key::score(score),
            Err(_) => Key::from_name(s),
        }
    }
}

impl_tag_display!(Key, KeyKind, "Key value" {
    Whitelist => "WHITELIST",
    Blacklist => "BLACKLIST",
    Maximum => "MAXIMUM",
    Minimum => "MINIMUM",
    Perfect => "PERFECT",
    Null => "NULL_KEY",
});
