//! KeyedCollection - ordered keyed entries and the query algorithm
//!
//! A collection stores entries in insertion order and keeps
//! [`CollectionFlags`] in sync with every insert. Querying scans the entries
//! and short-circuits on the first match; a miss falls back to a policy
//! decided by the flags.

mod flags;


pub use flags::CollectionFlags;

use std::fmt;
use std::ops::{AddAssign, Index, SubAssign};

use tracing::{debug, trace};

use crate::capability::Capable;
use crate::entry::KeyedEntry;
use crate::value::{Key, Outcome, ScoreWidth};

/// Anything that turns a probe value into an [`Outcome`].
///
/// This is the callable form of a validator: generic code can accept any
/// `Validate<T>` without knowing how the result is computed.
pub trait Validate<T, W = u32> {
    fn validate(&self, probe: &T) -> Outcome<W>;
}

/// An ordered list of [`KeyedEntry`] values with derived configuration.
///
/// # Query algorithm
///
/// 1. An uninitialized collection fails every probe.
/// 2. Entries are scanned in insertion order; the first entry whose key is
///    not null for the probe decides the outcome through
///    [`Key::to_outcome`].
/// 3. On a miss, a blacklist-only collection passes the probe, and every
///    other configuration fails it. Value-distance scoring for arithmetic
///    types and range checks for comparable types are not implemented and
///    fail as well.
///
/// `MINIMUM` and `MAXIMUM` entries only set their flag; they are rejected and
/// never stored.
///
/// # Examples
///
/// ```
/// use validlist_core::{KeyedCollection, Outcome};
///
/// let mut tiers: KeyedCollection<&str> = KeyedCollection::new();
/// tiers -= "banned";
/// tiers -= "suspended";
///
/// assert!(tiers.is_blacklist_only());
/// assert_eq!(tiers.query(&"banned"), Outcome::FAIL);
/// assert_eq!(tiers.query(&"member"), Outcome::PASS);
/// ```
#[derive(Clone)]
pub struct KeyedCollection<T, W = u32> {
    entries: Vec<KeyedEntry<T, W>>,
    flags: CollectionFlags,
}

impl<T: Capable, W: ScoreWidth> KeyedCollection<T, W> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        let flags = CollectionFlags::initial(T::CAPABILITIES);
        debug!(
            event = "collection_created",
            element = std::any::type_name::<T>(),
            flags = %flags,
        );
        KeyedCollection {
            entries: Vec::new(),
            flags,
        }
    }

    /// Creates a collection holding `values`, all tagged with `key`.
    pub fn from_keyed<I: IntoIterator<Item = T>>(key: Key<W>, values: I) -> Self {
        let mut collection = Self::new();
        collection.add_keyed(key, values);
        collection
    }

    /// Creates a collection from raw entries.
    pub fn from_entries<I: IntoIterator<Item = KeyedEntry<T, W>>>(entries: I) -> Self {
        let mut collection = Self::new();
        collection.add_entries(entries);
        collection
    }

    /// Creates a collection holding one entry.
    pub fn from_entry(entry: KeyedEntry<T, W>) -> Self {
        let mut collection = Self::new();
        collection.add(entry);
        collection
    }

    /// Creates a collection of whitelisted values.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut collection = Self::new();
        collection.add_values(values);
        collection
    }

    /// Creates a collection holding one whitelisted value.
    pub fn from_value(value: T) -> Self {
        let mut collection = Self::new();
        collection.add_value(value);
        collection
    }

    /// Creates a collection holding one value with `key`.
    pub fn from_key_value(key: Key<W>, value: T) -> Self {
        let mut collection = Self::new();
        collection.add_with_key(key, value);
        collection
    }

    /// Inserts one entry and returns `true` if it was rejected.
    ///
    /// `MINIMUM` and `MAXIMUM` entries are rejected after updating the
    /// flags; every other entry is appended.
    pub fn add(&mut self, entry: KeyedEntry<T, W>) -> bool {
        let key = entry.key();
        self.flags.record(&key);
        let rejected = key.is_bound();
        if !rejected {
            self.entries.push(entry);
        }
        trace!(
            event = "entry_added",
            key = %key,
            rejected,
            len = self.entries.len() as u64,
        );
        rejected
    }

    // Folds `add` over `entries` and returns the rejected count.
    fn add_all<I: IntoIterator<Item = KeyedEntry<T, W>>>(&mut self, entries: I) -> usize {
        let rejected: usize = entries
            .into_iter()
            .map(|entry| usize::from(self.add(entry)))
            .sum();
        if rejected > 0 {
            debug!(event = "entries_rejected", rejected = rejected as u64);
        }
        rejected
    }

    /// Adds every value with the same key; returns the rejected count.
    pub fn add_keyed<I: IntoIterator<Item = T>>(&mut self, key: Key<W>, values: I) -> usize {
        self.add_all(values.into_iter().map(|value| KeyedEntry::new(key, value)))
    }

    /// Adds raw entries; returns the rejected count.
    pub fn add_entries<I: IntoIterator<Item = KeyedEntry<T, W>>>(&mut self, entries: I) -> usize {
        self.add_all(entries)
    }

    /// Adds every stored entry of `other`; returns the rejected count.
    ///
    /// Flags are not copied, so bounds recorded by `other` stay behind.
    pub fn merge(&mut self, other: &KeyedCollection<T, W>) -> usize
    where
        T: Clone,
    {
        self.add_all(other.entries.iter().cloned())
    }

    /// Adds whitelisted values; returns the rejected count.
    pub fn add_values<I: IntoIterator<Item = T>>(&mut self, values: I) -> usize {
        self.add_keyed(Key::WHITELIST, values)
    }

    /// Adds one whitelisted value; returns the rejected count.
    pub fn add_value(&mut self, value: T) -> usize {
        usize::from(self.add(KeyedEntry::from_value(value)))
    }

    /// Adds one value with `key`; returns the rejected count.
    pub fn add_with_key(&mut self, key: Key<W>, value: T) -> usize {
        usize::from(self.add(KeyedEntry::new(key, value)))
    }

    pub fn whitelist(&mut self, value: T) -> &mut Self {
        self.add_with_key(Key::WHITELIST, value);
        self
    }

    pub fn blacklist(&mut self, value: T) -> &mut Self {
        self.add_with_key(Key::BLACKLIST, value);
        self
    }

    pub fn perfect(&mut self, value: T) -> &mut Self {
        self.add_with_key(Key::PERFECT, value);
        self
    }

    /// Validates `probe` against the collection.
    pub fn query(&self, probe: &T) -> Outcome<W> {
        if !self.is_initialized() {
            return Outcome::FAIL;
        }

        if let Some(outcome) = self
            .entries
            .iter()
            .find_map(|entry| entry.query(probe).to_outcome())
        {
            trace!(event = "query", outcome = %outcome, matched = true);
            return outcome;
        }

        let outcome = self.fallback();
        trace!(event = "query", outcome = %outcome, matched = false, flags = %self.flags);
        outcome
    }

    // Outcome of a probe that matched no entry.
    fn fallback(&self) -> Outcome<W> {
        // Whitelist-only, arithmetic and comparable collections all reject
        // unknown probes for now.
        if self.flags.contains(CollectionFlags::BLACKLIST_ONLY) {
            Outcome::PASS
        } else {
            Outcome::FAIL
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&KeyedEntry<T, W>> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeyedEntry<T, W>> {
        self.entries.iter()
    }

    #[inline]
    pub fn flags(&self) -> CollectionFlags {
        self.flags
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.flags.contains(CollectionFlags::INITIALIZED)
    }

    #[inline]
    pub fn is_blacklist_only(&self) -> bool {
        self.flags.contains(CollectionFlags::BLACKLIST_ONLY)
    }

    #[inline]
    pub fn is_whitelist_only(&self) -> bool {
        self.flags.contains(CollectionFlags::WHITELIST_ONLY)
    }

    #[inline]
    pub fn is_arithmetic(&self) -> bool {
        self.flags.contains(CollectionFlags::ARITHMETIC)
    }

    #[inline]
    pub fn is_comparable(&self) -> bool {
        self.flags.contains(CollectionFlags::COMPARABLE)
    }

    #[inline]
    pub fn contains_perfect(&self) -> bool {
        self.flags.contains(CollectionFlags::PERFECT)
    }

    #[inline]
    pub fn contains_maximum(&self) -> bool {
        self.flags.contains(CollectionFlags::MAXIMUM)
    }

    #[inline]
    pub fn contains_minimum(&self) -> bool {
        self.flags.contains(CollectionFlags::MINIMUM)
    }
}

impl<T: Capable, W: ScoreWidth> Validate<T, W> for KeyedCollection<T, W> {
    fn validate(&self, probe: &T) -> Outcome<W> {
        self.query(probe)
    }
}

impl<T: Capable, W: ScoreWidth> Default for KeyedCollection<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Capable, W: ScoreWidth> Index<usize> for KeyedCollection<T, W> {
    type Output = KeyedEntry<T, W>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a, T, W> IntoIterator for &'a KeyedCollection<T, W> {
    type Item = &'a KeyedEntry<T, W>;
    type IntoIter = std::slice::Iter<'a, KeyedEntry<T, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<T: Capable, W: ScoreWidth> FromIterator<KeyedEntry<T, W>> for KeyedCollection<T, W> {
    fn from_iter<I: IntoIterator<Item = KeyedEntry<T, W>>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl<T: Capable, W: ScoreWidth> FromIterator<T> for KeyedCollection<T, W> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T: Capable, W: ScoreWidth> Extend<KeyedEntry<T, W>> for KeyedCollection<T, W> {
    fn extend<I: IntoIterator<Item = KeyedEntry<T, W>>>(&mut self, iter: I) {
        self.add_entries(iter);
    }
}

/// `list += value` whitelists `value`.
impl<T: Capable, W: ScoreWidth> AddAssign<T> for KeyedCollection<T, W> {
    fn add_assign(&mut self, value: T) {
        self.add_with_key(Key::WHITELIST, value);
    }
}

/// `list += vec![..]` whitelists every value.
impl<T: Capable, W: ScoreWidth> AddAssign<Vec<T>> for KeyedCollection<T, W> {
    fn add_assign(&mut self, values: Vec<T>) {
        self.add_keyed(Key::WHITELIST, values);
    }
}

/// `list += &values[..]` whitelists clones of every value.
impl<T: Capable + Clone, W: ScoreWidth> AddAssign<&[T]> for KeyedCollection<T, W> {
    fn add_assign(&mut self, values: &[T]) {
        self.add_keyed(Key::WHITELIST, values.iter().cloned());
    }
}

/// `list += entry` adds a raw entry.
impl<T: Capable, W: ScoreWidth> AddAssign<KeyedEntry<T, W>> for KeyedCollection<T, W> {
    fn add_assign(&mut self, entry: KeyedEntry<T, W>) {
        self.add(entry);
    }
}

/// `list -= value` blacklists `value`.
impl<T: Capable, W: ScoreWidth> SubAssign<T> for KeyedCollection<T, W> {
    fn sub_assign(&mut self, value: T) {
        self.add_with_key(Key::BLACKLIST, value);
    }
}

/// `list -= vec![..]` blacklists every value.
impl<T: Capable, W: ScoreWidth> SubAssign<Vec<T>> for KeyedCollection<T, W> {
    fn sub_assign(&mut self, values: Vec<T>) {
        self.add_keyed(Key::BLACKLIST, values);
    }
}

/// `list -= &values[..]` blacklists clones of every value.
impl<T: Capable + Clone, W: ScoreWidth> SubAssign<&[T]> for KeyedCollection<T, W> {
    fn sub_assign(&mut self, values: &[T]) {
        self.add_keyed(Key::BLACKLIST, values.iter().cloned());
    }
}

impl<T: fmt::Debug, W: ScoreWidth> fmt::Debug for KeyedCollection<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedCollection")
            .field("entries", &self.entries)
            .field("flags", &self.flags)
            .finish()
    }
}

/// One entry per line followed by the flag summary.
impl<T: fmt::Display, W: ScoreWidth> fmt::Display for KeyedCollection<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "KeyedCollection {{")?;
        for entry in &self.entries {
            if f.alternate() {
                writeln!(f, "    {:#}", entry)?;
            } else {
                writeln!(f, "    {}", entry)?;
            }
        }
        write!(f, "}} {}", self.flags)
    }
}
