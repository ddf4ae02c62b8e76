//! Macros for validlist element types.

use proc_macro::TokenStream;
use syn::{parse_macro_input, Attribute, DeriveInput};

mod capable;

/// Derives `Capable` for a domain type.
///
/// Equality is always claimed and requires a `PartialEq` impl. Further
/// capabilities are opted into through `#[capable(...)]`:
///
/// - `ord`: ordering, requires `PartialOrd`
/// - `arithmetic`: requires `Add`, `Sub`, `AddAssign` and `SubAssign`
/// - `display`: requires `Display`
///
/// Each claim becomes a where-clause on the generated impl, so a claim the
/// type cannot back is a compile error.
#[proc_macro_derive(Capable, attributes(capable))]
pub fn derive_capable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    capable::expand_derive(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn get_attribute<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(name))
}
