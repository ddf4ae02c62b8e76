//! validlist - keyed whitelist/blacklist validation in Rust
//!
//! Register values as whitelisted, blacklisted, perfect or score-weighted,
//! then query whether a probe passes.
//!
//! # Example
//!
//! ```rust
//! use validlist::prelude::*;
//!
//! let mut ports: KeyedCollection<u16> = KeyedCollection::from_values([80, 443]);
//! ports.add_with_key(Key::from_raw(5), 8080);
//! ports -= 23;
//!
//! assert_eq!(ports.query(&443), Outcome::PASS);
//! assert_eq!(ports.query(&8080).raw(), 5);
//! assert_eq!(ports.query(&23), Outcome::FAIL);
//! ```
//!
//! # Capability claims
//!
//! `#[derive(Capable)]` proves every claim with a where-clause, so a type
//! claiming `arithmetic` without the operators does not compile:
//!
//! ```compile_fail,E0277
//! use validlist::Capable;
//!
//! #[derive(PartialEq, Capable)]
//! #[capable(arithmetic)]
//! struct Label(String);
//! ```

// User-facing derive
pub use validlist_macros::Capable;

// Value and collection types
pub use validlist_core::{
    capabilities_of, Capabilities, Capable, CollectionFlags, Key, KeyKind, KeyedCollection,
    KeyedEntry, Outcome, OutcomeKind, Result, ScoreWidth, Validate, ValidlistError,
};

#[cfg(feature = "config")]
pub use validlist_config::{ConfigError, EntryConfig, KeySpec, ListConfig};

#[cfg(feature = "console")]
pub use validlist_console as console;

pub mod prelude {
    pub use super::Capable;
    pub use super::{Key, KeyedCollection, KeyedEntry, Outcome, Validate};
}
