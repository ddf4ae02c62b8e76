//! `#[derive(Capable)]` accepted forms.

use validlist::{Capabilities, Capable, KeyedCollection, Outcome};

#[derive(PartialEq, Capable)]
pub struct Unit;

#[derive(PartialEq, PartialOrd, Capable)]
#[capable(ord)]
pub enum Priority {
    Low,
    Normal,
    Urgent,
}

#[derive(PartialEq, Capable)]
pub struct Pair<A, B> {
    pub left: A,
    pub right: B,
}

fn main() {
    assert_eq!(<Unit as Capable>::CAPABILITIES, Capabilities::EQUATABLE);
    assert!(<Priority as Capable>::CAPABILITIES.is_comparable());
    assert!(!<Pair<u8, char> as Capable>::CAPABILITIES.is_printable());

    let list: KeyedCollection<Priority> = KeyedCollection::from_value(Priority::Urgent);
    assert_eq!(list.query(&Priority::Urgent), Outcome::PASS);
    assert_eq!(list.query(&Priority::Low), Outcome::FAIL);
    let _ = Priority::Normal;
}
