//! Declarative configuration for validlist collections.
//!
//! Describe a collection in TOML or YAML and build it without code changes.
//!
//! # Examples
//!
//! ```
//! use validlist_config::ListConfig;
//! use validlist_core::Outcome;
//!
//! let config: ListConfig<i32> = ListConfig::from_toml_str(r#"
//!     whitelist = [1, 2, 3]
//!     blacklist = [13]
//!
//!     [[entries]]
//!     key = 10
//!     value = 5
//! "#).unwrap();
//!
//! let list = config.build().unwrap();
//! assert_eq!(list.query(&2), Outcome::PASS);
//! assert_eq!(list.query(&5).raw(), 10);
//! assert_eq!(list.query(&13), Outcome::FAIL);
//! ```
//!
//! Use an empty config when the file is missing:
//!
//! ```
//! use validlist_config::ListConfig;
//!
//! let config: ListConfig<String> = ListConfig::load("allowlist.toml").unwrap_or_default();
//! assert!(config.is_empty());
//! ```

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validlist_core::{Capable, Key, KeyedCollection, KeyedEntry, ScoreWidth, ValidlistError};


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid key: {0}")]
    Key(#[from] ValidlistError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Key of a configured entry: a tag name or a plain score.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum KeySpec<W = u32> {
    /// Plain score, checked against the reserved range.
    Score(W),
    /// Tag name such as `"whitelist"` or `"perfect"`, case-insensitive.
    Name(String),
}

impl<W: ScoreWidth> KeySpec<W> {
    /// Resolves to a key.
    ///
    /// # Errors
    ///
    /// Returns [`ValidlistError::InvalidKeyName`] for unknown names and
    /// [`ValidlistError::ReservedScore`] for scores outside the plain range.
    /// A quoted score such as `"10"` resolves like a plain one.
    pub fn resolve(&self) -> Result<Key<W>, ValidlistError> {
        match self {
            KeySpec::Score(score) => Key::score(*score),
            KeySpec::Name(name) => name.parse(),
        }
    }
}

impl<W> From<&str> for KeySpec<W> {
    fn from(name: &str) -> Self {
        KeySpec::Name(name.to_string())
    }
}

impl<W: ScoreWidth> From<Key<W>> for KeySpec<W> {
    fn from(key: Key<W>) -> Self {
        if key.is_score() {
            KeySpec::Score(key.raw())
        } else {
            KeySpec::Name(key.to_string())
        }
    }
}

/// A single keyed entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EntryConfig<T, W = u32> {
    pub key: KeySpec<W>,
    pub value: T,
}

/// A collection described declaratively.
///
/// Entries are inserted in a fixed order: `entries` first, then `perfect`,
/// `whitelist` and `blacklist`. Since the first matching entry decides a
/// query, explicit entries take precedence over the shorthand lists.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ListConfig<T, W = u32> {
    /// Values accepted without a score.
    #[serde(default = "Vec::new")]
    pub whitelist: Vec<T>,

    /// Values always rejected.
    #[serde(default = "Vec::new")]
    pub blacklist: Vec<T>,

    /// Values accepted as perfect matches.
    #[serde(default = "Vec::new")]
    pub perfect: Vec<T>,

    /// Entries with explicit keys.
    #[serde(default = "Vec::new")]
    pub entries: Vec<EntryConfig<T, W>>,
}

impl<T, W> Default for ListConfig<T, W> {
    fn default() -> Self {
        ListConfig {
            whitelist: Vec::new(),
            blacklist: Vec::new(),
            perfect: Vec::new(),
            entries: Vec::new(),
        }
    }
}

impl<T, W> ListConfig<T, W> {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the configuration describes no values at all.
    pub fn is_empty(&self) -> bool {
        self.whitelist.is_empty()
            && self.blacklist.is_empty()
            && self.perfect.is_empty()
            && self.entries.is_empty()
    }

    /// Adds an entry with an explicit key.
    pub fn with_entry(mut self, key: impl Into<KeySpec<W>>, value: T) -> Self {
        self.entries.push(EntryConfig {
            key: key.into(),
            value,
        });
        self
    }

    /// Adds a whitelisted value.
    pub fn with_whitelisted(mut self, value: T) -> Self {
        self.whitelist.push(value);
        self
    }

    /// Adds a blacklisted value.
    pub fn with_blacklisted(mut self, value: T) -> Self {
        self.blacklist.push(value);
        self
    }

    /// Adds a perfect value.
    pub fn with_perfect(mut self, value: T) -> Self {
        self.perfect.push(value);
        self
    }
}

impl<T, W> ListConfig<T, W>
where
    T: DeserializeOwned,
    W: DeserializeOwned,
{
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }
}

impl<T, W> ListConfig<T, W>
where
    T: Capable + Clone + fmt::Debug,
    W: ScoreWidth,
{
    /// Builds the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Key`] for an unresolvable entry key and
    /// [`ConfigError::Invalid`] when a blacklisted value is also whitelisted
    /// or perfect.
    pub fn build(&self) -> Result<KeyedCollection<T, W>, ConfigError> {
        self.build_report().map(|(collection, _)| collection)
    }

    /// Builds the collection and returns it with the number of rejected
    /// entries (`minimum` and `maximum` keys only set flags).
    pub fn build_report(&self) -> Result<(KeyedCollection<T, W>, usize), ConfigError> {
        for (name, list) in [("whitelisted", &self.whitelist), ("perfect", &self.perfect)] {
            if let Some(value) = list.iter().find(|v| self.blacklist.contains(v)) {
                return Err(ConfigError::Invalid(format!(
                    "{value:?} is both {name} and blacklisted"
                )));
            }
        }

        let entries = self
            .entries
            .iter()
            .map(|entry| -> Result<_, ConfigError> {
                Ok(KeyedEntry::new(entry.key.resolve()?, entry.value.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut collection = KeyedCollection::new();
        let mut rejected = collection.add_entries(entries);
        rejected += collection.add_keyed(Key::PERFECT, self.perfect.iter().cloned());
        rejected += collection.add_keyed(Key::WHITELIST, self.whitelist.iter().cloned());
        rejected += collection.add_keyed(Key::BLACKLIST, self.blacklist.iter().cloned());
        Ok((collection, rejected))
    }
}
