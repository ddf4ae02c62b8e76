//! Equality-only fixture.

use validlist::Capable;

/// An access badge identified by holder and number.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Capable)]
pub struct Badge {
    pub holder: String,
    pub number: u32,
}

impl Badge {
    pub fn new(holder: impl Into<String>, number: u32) -> Self {
        Self {
            holder: holder.into(),
            number,
        }
    }
}
