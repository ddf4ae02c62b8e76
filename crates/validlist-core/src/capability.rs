//! Compile-time operator capabilities of element types
//!
//! Every element stored in a [`KeyedEntry`](crate::KeyedEntry) must implement
//! [`Capable`], which requires `PartialEq` and exposes a constant
//! [`Capabilities`] set. Collections read that constant to decide which
//! fallback behaviors may apply; nothing is computed at runtime.
//!
//! Built-in impls cover the primitive types, `String` and `&'static str`.
//! Domain types opt in with `#[derive(Capable)]`, whose generated impl carries
//! where-clauses proving every claimed capability.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Operators supported by an element type.
    #[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// `==` is available.
        const EQUALITY      = 0b0000_0001;
        /// `!=` is available.
        const INEQUALITY    = 0b0000_0010;
        /// `<`, `>`, `<=`, `>=` together with equality.
        const COMPARISON    = 0b0000_0100;
        /// `+`, `-`, `+=` and `-=` are all available.
        const ARITHMETIC    = 0b0000_1000;
        /// The type can be rendered with `Display`.
        const PRINTABLE     = 0b0001_0000;

        /// Equality and inequality, implied by `PartialEq`.
        const EQUATABLE     = Self::EQUALITY.bits() | Self::INEQUALITY.bits();
        /// Everything a numeric primitive supports.
        const NUMERIC       = Self::EQUATABLE.bits()
            | Self::COMPARISON.bits()
            | Self::ARITHMETIC.bits()
            | Self::PRINTABLE.bits();
    }
}

impl Capabilities {
    /// Returns true if equality is available.
    #[inline]
    pub const fn is_equatable(self) -> bool {
        self.contains(Capabilities::EQUALITY)
    }

    /// Returns true if full ordering plus equality is available.
    #[inline]
    pub const fn is_comparable(self) -> bool {
        self.contains(Capabilities::EQUALITY.union(Capabilities::COMPARISON))
    }

    /// Returns true if every arithmetic operator is available.
    #[inline]
    pub const fn is_arithmetic(self) -> bool {
        self.contains(Capabilities::ARITHMETIC)
    }

    #[inline]
    pub const fn is_printable(self) -> bool {
        self.contains(Capabilities::PRINTABLE)
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }
        bitflags::parser::to_writer(self, f)
    }
}

/// Element types usable in keyed entries and collections.
///
/// The `PartialEq` supertrait is what makes non-equatable element types
/// fail to compile.
///
/// # Examples
///
/// ```
/// use validlist_core::{capabilities_of, Capabilities};
///
/// assert!(capabilities_of::<i32>().is_arithmetic());
/// assert!(capabilities_of::<String>().is_comparable());
/// assert!(!capabilities_of::<bool>().is_arithmetic());
/// assert_eq!(capabilities_of::<f32>(), Capabilities::NUMERIC);
/// ```
///
/// Types without `PartialEq` cannot be collected:
///
/// ```compile_fail,E0599
/// use validlist_core::KeyedCollection;
///
/// struct NoEq;
///
/// let _ = KeyedCollection::<NoEq>::new();
/// ```
pub trait Capable: PartialEq {
    /// Operators this type supports.
    const CAPABILITIES: Capabilities;
}

/// Returns the capability set of `T`.
#[inline]
pub const fn capabilities_of<T: Capable>() -> Capabilities {
    T::CAPABILITIES
}

impl_capable!(Capabilities::NUMERIC =>
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
);

impl_capable!(
    Capabilities::EQUATABLE
        .union(Capabilities::COMPARISON)
        .union(Capabilities::PRINTABLE) =>
    bool, char, String, &'static str,
);

impl_capable!(Capabilities::EQUATABLE.union(Capabilities::COMPARISON) => ());
