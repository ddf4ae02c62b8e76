//! Score width trait definition

use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{PrimInt, Unsigned};

/// Unsigned integer type backing the raw encoding of [`Key`](super::Key)
/// and [`Outcome`](super::Outcome).
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`. A program
/// should pick one width and use it for every key and outcome it combines;
/// values of different widths do not interoperate.
pub trait ScoreWidth:
    PrimInt + Unsigned + From<u8> + Hash + Debug + Display + Default + Send + Sync + 'static
{
    /// Returns `MAX - offset`, the raw encoding of a sentinel.
    #[inline]
    fn below_max(offset: u8) -> Self {
        Self::max_value() - <Self as From<u8>>::from(offset)
    }

    /// Widens the value for error reporting.
    #[inline]
    fn widen(self) -> u128 {
        self.to_u128().unwrap_or(u128::MAX)
    }
}

impl<T> ScoreWidth for T where
    T: PrimInt + Unsigned + From<u8> + Hash + Debug + Display + Default + Send + Sync + 'static
{
}
