//! validlist Core - value types and keyed collections for validation
//!
//! This crate provides the fundamental abstractions for validlist:
//! - [`Key`] tags describing the role of a stored value
//! - [`Outcome`] results with sentinel-absorbing arithmetic
//! - [`KeyedEntry`] and [`KeyedCollection`] implementing the query algorithm
//! - [`Capabilities`] describing which operators an element type supports
//!
//! # Example
//!
//! ```
//! use validlist_core::{Key, KeyedCollection, Outcome};
//!
//! let mut list: KeyedCollection<i32> = KeyedCollection::from_values([1, 2, 3]);
//! list.add_with_key(Key::PERFECT, 7);
//!
//! assert_eq!(list.query(&2), Outcome::PASS);
//! assert_eq!(list.query(&7), Outcome::PERFECT);
//! assert_eq!(list.query(&4), Outcome::FAIL);
//! ```

#[macro_use]
mod macros;

pub mod capability;
pub mod collection;
pub mod entry;
pub mod error;
pub mod value;

pub use capability::{capabilities_of, Capabilities, Capable};
pub use collection::{CollectionFlags, KeyedCollection, Validate};
pub use entry::KeyedEntry;
pub use error::{Result, ValidlistError};
pub use value::{Key, KeyKind, Outcome, OutcomeKind, ScoreWidth};
