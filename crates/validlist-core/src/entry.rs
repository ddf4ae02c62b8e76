//! KeyedEntry - a value paired with its key

use std::cmp::Ordering;
use std::fmt;

use crate::capability::Capable;
use crate::value::{Key, ScoreWidth};

/// An immutable `(Key, value)` pair.
///
/// Entries compare and order by key only; the stored value takes part in
/// [`query`](Self::query) alone.
///
/// # Examples
///
/// ```
/// use validlist_core::{Key, KeyedEntry};
///
/// let entry: KeyedEntry<i32> = KeyedEntry::new(Key::BLACKLIST, 10);
///
/// assert_eq!(entry.query(&10), Key::BLACKLIST);
/// assert!(entry.query(&11).is_null());
/// ```
#[derive(Clone)]
pub struct KeyedEntry<T, W = u32> {
    key: Key<W>,
    value: T,
}

impl<T: Capable, W: ScoreWidth> KeyedEntry<T, W> {
    /// Creates an entry with an explicit key.
    pub fn new(key: Key<W>, value: T) -> Self {
        KeyedEntry { key, value }
    }

    /// Creates a whitelisted entry.
    pub fn from_value(value: T) -> Self {
        KeyedEntry::new(Key::WHITELIST, value)
    }

    #[inline]
    pub fn key(&self) -> Key<W> {
        self.key
    }

    /// Returns the raw encoding of the key.
    #[inline]
    pub fn raw_key(&self) -> W {
        self.key.raw()
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn cloned_value(&self) -> T
    where
        T: Clone,
    {
        self.value.clone()
    }

    /// Splits the entry into its key and value.
    pub fn into_parts(self) -> (Key<W>, T) {
        (self.key, self.value)
    }

    /// Returns the stored key if `probe` equals the stored value, otherwise
    /// [`Key::NULL`].
    pub fn query(&self, probe: &T) -> Key<W> {
        if *probe == self.value {
            self.key
        } else {
            Key::NULL
        }
    }
}

impl<T: Capable + Default, W: ScoreWidth> Default for KeyedEntry<T, W> {
    fn default() -> Self {
        KeyedEntry::from_value(T::default())
    }
}

impl<T: Capable, W: ScoreWidth> From<T> for KeyedEntry<T, W> {
    fn from(value: T) -> Self {
        KeyedEntry::from_value(value)
    }
}

impl<T: Capable, W: ScoreWidth> From<(Key<W>, T)> for KeyedEntry<T, W> {
    fn from((key, value): (Key<W>, T)) -> Self {
        KeyedEntry::new(key, value)
    }
}

impl<T: Capable, W: ScoreWidth> From<(W, T)> for KeyedEntry<T, W> {
    fn from((raw, value): (W, T)) -> Self {
        KeyedEntry::new(Key::from_raw(raw), value)
    }
}

impl<T, W: ScoreWidth> PartialEq for KeyedEntry<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T, W: ScoreWidth> Eq for KeyedEntry<T, W> {}

impl<T, W: ScoreWidth> PartialOrd for KeyedEntry<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, W: ScoreWidth> Ord for KeyedEntry<T, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<T, W: ScoreWidth> PartialEq<Key<W>> for KeyedEntry<T, W> {
    fn eq(&self, key: &Key<W>) -> bool {
        self.key == *key
    }
}

impl<T, W: ScoreWidth> PartialOrd<Key<W>> for KeyedEntry<T, W> {
    fn partial_cmp(&self, key: &Key<W>) -> Option<Ordering> {
        Some(self.key.cmp(key))
    }
}

impl<T: fmt::Debug, W: ScoreWidth> fmt::Debug for KeyedEntry<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

/// `{Key: WHITELIST, Data type: i32, Data: 5}`; the alternate form prints
/// the detailed key.
impl<T: fmt::Display, W: ScoreWidth> fmt::Display for KeyedEntry<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_name = std::any::type_name::<T>();
        if f.alternate() {
            write!(
                f,
                "{{Key: {:#}, Data type: {}, Data: {}}}",
                self.key, type_name, self.value
            )
        } else {
            write!(
                f,
                "{{Key: {}, Data type: {}, Data: {}}}",
                self.key, type_name, self.value
            )
        }
    }
}
