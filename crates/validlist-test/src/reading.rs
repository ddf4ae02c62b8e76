//! Numeric newtype fixture.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use validlist::Capable;

/// A sensor reading in tenths of a degree.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Capable)]
#[capable(ord, arithmetic, display)]
pub struct Reading(pub f64);

impl Add for Reading {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Reading(self.0 + other.0)
    }
}

impl Sub for Reading {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Reading(self.0 - other.0)
    }
}

impl AddAssign for Reading {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl SubAssign for Reading {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
