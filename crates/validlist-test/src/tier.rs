//! Ordered, printable fixture.
//!
//! # Example
//!
//! ```
//! use validlist::prelude::*;
//! use validlist_test::tier::{membership_policy, Tier};
//!
//! let policy = membership_policy();
//! assert_eq!(policy.query(&Tier::Gold), Outcome::PERFECT);
//! assert_eq!(policy.query(&Tier::Banned), Outcome::FAIL);
//! ```

use std::fmt;

use validlist::{Capable, Key, KeyedCollection};

/// Membership tier, ordered from lowest to highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Capable)]
#[capable(ord, display)]
pub enum Tier {
    Banned,
    Guest,
    Member,
    Silver,
    Gold,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Banned,
        Tier::Guest,
        Tier::Member,
        Tier::Silver,
        Tier::Gold,
    ];
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Banned => "banned",
            Tier::Guest => "guest",
            Tier::Member => "member",
            Tier::Silver => "silver",
            Tier::Gold => "gold",
        };
        f.write_str(name)
    }
}

/// Gold is perfect, silver scores 2, members pass, banned fails.
pub fn membership_policy() -> KeyedCollection<Tier> {
    let mut policy: KeyedCollection<Tier> = KeyedCollection::new();
    policy.perfect(Tier::Gold).whitelist(Tier::Member).blacklist(Tier::Banned);
    policy.add_with_key(Key::from_raw(2), Tier::Silver);
    policy
}
