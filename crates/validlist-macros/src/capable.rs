// #[derive(Capable)] implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Error, WherePredicate};

use crate::get_attribute;

#[derive(Default)]
struct Claims {
    ord: bool,
    arithmetic: bool,
    display: bool,
}

fn parse_claims(input: &DeriveInput) -> Result<Claims, Error> {
    let mut claims = Claims::default();
    let Some(attr) = get_attribute(&input.attrs, "capable") else {
        return Ok(claims);
    };

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("ord") {
            claims.ord = true;
        } else if meta.path.is_ident("arithmetic") {
            claims.arithmetic = true;
        } else if meta.path.is_ident("display") {
            claims.display = true;
        } else {
            return Err(meta.error("expected one of `ord`, `arithmetic`, `display`"));
        }
        Ok(())
    })?;

    Ok(claims)
}

pub fn expand_derive(input: DeriveInput) -> Result<TokenStream, Error> {
    let claims = parse_claims(&input)?;
    let name = &input.ident;

    let mut generics = input.generics.clone();
    let where_clause = generics.make_where_clause();
    where_clause
        .predicates
        .push(syn::parse_quote! { Self: ::core::cmp::PartialEq });
    let mut caps = vec![quote! { ::validlist::Capabilities::EQUATABLE }];

    if claims.ord {
        where_clause
            .predicates
            .push(syn::parse_quote! { Self: ::core::cmp::PartialOrd });
        caps.push(quote! { ::validlist::Capabilities::COMPARISON });
    }
    if claims.arithmetic {
        let predicates: [WherePredicate; 4] = [
            syn::parse_quote! { Self: ::core::ops::Add<Output = Self> },
            syn::parse_quote! { Self: ::core::ops::Sub<Output = Self> },
            syn::parse_quote! { Self: ::core::ops::AddAssign },
            syn::parse_quote! { Self: ::core::ops::SubAssign },
        ];
        where_clause.predicates.extend(predicates);
        caps.push(quote! { ::validlist::Capabilities::ARITHMETIC });
    }
    if claims.display {
        where_clause
            .predicates
            .push(syn::parse_quote! { Self: ::core::fmt::Display });
        caps.push(quote! { ::validlist::Capabilities::PRINTABLE });
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let first = &caps[0];
    let rest = &caps[1..];

    Ok(quote! {
        impl #impl_generics ::validlist::Capable for #name #ty_generics #where_clause {
            const CAPABILITIES: ::validlist::Capabilities = #first #(.union(#rest))*;
        }
    })
}
