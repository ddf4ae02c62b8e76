//! Tagged value types for labeling entries and validation results
//!
//! Both types are generic over the unsigned integer width backing their raw
//! encoding. Sentinels occupy the top of the range so plain scores use the
//! low range.

mod key;
mod outcome;
mod width;

#[cfg(test)]
mod tests;

pub use key::{Key, KeyKind};
pub use outcome::{Outcome, OutcomeKind};
pub use width::ScoreWidth;
