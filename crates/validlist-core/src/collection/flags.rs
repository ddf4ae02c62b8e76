//! Derived configuration flags of a keyed collection

use std::fmt;

use bitflags::bitflags;

use crate::capability::Capabilities;
use crate::value::{Key, ScoreWidth};

bitflags! {
    /// Configuration derived from the element type and the history of
    /// inserted keys.
    ///
    /// `BLACKLIST_ONLY` and `WHITELIST_ONLY` start set and are only ever
    /// cleared.
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollectionFlags: u8 {
        /// The collection has been set up.
        const INITIALIZED    = 1 << 0;
        /// Every inserted key was `BLACKLIST`.
        const BLACKLIST_ONLY = 1 << 1;
        /// Every inserted key was `WHITELIST`, `PERFECT` or a plain score.
        const WHITELIST_ONLY = 1 << 2;
        /// The element type supports arithmetic.
        const ARITHMETIC     = 1 << 3;
        /// The element type supports full ordering.
        const COMPARABLE     = 1 << 4;
        /// At least one `PERFECT` entry was inserted.
        const PERFECT        = 1 << 5;
        /// At least one `MAXIMUM` entry was offered.
        const MAXIMUM        = 1 << 6;
        /// At least one `MINIMUM` entry was offered.
        const MINIMUM        = 1 << 7;
    }
}

impl CollectionFlags {
    /// Initial flags for an empty collection of elements with `caps`.
    pub fn initial(caps: Capabilities) -> Self {
        let mut flags = CollectionFlags::INITIALIZED
            | CollectionFlags::BLACKLIST_ONLY
            | CollectionFlags::WHITELIST_ONLY;
        flags.set(CollectionFlags::ARITHMETIC, caps.is_arithmetic());
        flags.set(CollectionFlags::COMPARABLE, caps.is_comparable());
        flags
    }

    /// Updates the flags for an inserted key.
    pub fn record<W: ScoreWidth>(&mut self, key: &Key<W>) {
        if !key.is_blacklist() {
            self.remove(CollectionFlags::BLACKLIST_ONLY);
        }
        if !key.is_accepting() {
            self.remove(CollectionFlags::WHITELIST_ONLY);
        }
        if key.is_perfect() {
            self.insert(CollectionFlags::PERFECT);
        }
        if key.is_maximum() {
            self.insert(CollectionFlags::MAXIMUM);
        }
        if key.is_minimum() {
            self.insert(CollectionFlags::MINIMUM);
        }
    }
}

impl fmt::Debug for CollectionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }
        bitflags::parser::to_writer(self, f)
    }
}

/// Summary such as
/// `[ Initialized, Blacklist, ~Whitelist, Arithmetic, Comparable, ~Perfect, ~Maximum, ~Minimum ]`.
impl fmt::Display for CollectionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = [
            (CollectionFlags::INITIALIZED, "Initialized"),
            (CollectionFlags::BLACKLIST_ONLY, "Blacklist"),
            (CollectionFlags::WHITELIST_ONLY, "Whitelist"),
            (CollectionFlags::ARITHMETIC, "Arithmetic"),
            (CollectionFlags::COMPARABLE, "Comparable"),
            (CollectionFlags::PERFECT, "Perfect"),
            (CollectionFlags::MAXIMUM, "Maximum"),
            (CollectionFlags::MINIMUM, "Minimum"),
        ];
        f.write_str("[ ")?;
        for (i, (flag, label)) in labels.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if !self.contains(*flag) {
                f.write_str("~")?;
            }
            f.write_str(label)?;
        }
        f.write_str(" ]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_flags() {
        let flags = CollectionFlags::initial(Capabilities::NUMERIC);
        assert!(flags.contains(
            CollectionFlags::INITIALIZED
                | CollectionFlags::BLACKLIST_ONLY
                | CollectionFlags::WHITELIST_ONLY
                | CollectionFlags::ARITHMETIC
                | CollectionFlags::COMPARABLE
        ));

        let flags = CollectionFlags::initial(Capabilities::EQUATABLE);
        assert!(!flags.contains(CollectionFlags::ARITHMETIC));
        assert!(!flags.contains(CollectionFlags::COMPARABLE));
    }

    #[test]
    fn test_record_is_monotonic() {
        let mut flags = CollectionFlags::initial(Capabilities::EQUATABLE);

        flags.record(&Key::<u32>::BLACKLIST);
        assert!(flags.contains(CollectionFlags::BLACKLIST_ONLY));
        assert!(!flags.contains(CollectionFlags::WHITELIST_ONLY));

        flags.record(&Key::<u32>::WHITELIST);
        assert!(!flags.contains(CollectionFlags::BLACKLIST_ONLY));

        flags.record(&Key::<u32>::BLACKLIST);
        assert!(!flags.contains(CollectionFlags::BLACKLIST_ONLY));
        assert!(!flags.contains(CollectionFlags::WHITELIST_ONLY));
    }

    #[test]
    fn test_record_bounds_and_perfect() {
        let mut flags = CollectionFlags::initial(Capabilities::NUMERIC);
        flags.record(&Key::<u32>::PERFECT);
        assert!(flags.contains(CollectionFlags::PERFECT | CollectionFlags::WHITELIST_ONLY));

        flags.record(&Key::<u32>::MINIMUM);
        assert!(flags.contains(CollectionFlags::MINIMUM));
        assert!(!flags.contains(CollectionFlags::MAXIMUM));
        assert!(!flags.contains(CollectionFlags::WHITELIST_ONLY));

        flags.record(&Key::<u32>::MAXIMUM);
        assert!(flags.contains(CollectionFlags::MAXIMUM));
    }

    #[test]
    fn test_display_summary() {
        let flags = CollectionFlags::initial(Capabilities::NUMERIC);
        assert_eq!(
            flags.to_string(),
            "[ Initialized, Blacklist, Whitelist, Arithmetic, Comparable, ~Perfect, ~Maximum, ~Minimum ]"
        );
    }
}
