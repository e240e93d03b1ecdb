//! Derive macro implementation used by `dimscalar-core`.
//!
//! `dimscalar-derive` is an implementation detail of this workspace. The `Dimension` derive expands in terms of
//! `crate::Dimension`, `crate::QuantityKind` and `crate::Unit`, so it is intended to be used by `dimscalar-core` (or
//! by crates that expose an identical crate-root API).
//!
//! Most users should depend on `dimscalar` instead and use the predefined quantity kinds.
//!
//! # Generated impls
//!
//! For a dimension marker type `LengthDim`, the derive implements:
//!
//! - `crate::Dimension for LengthDim`
//! - `crate::AbsoluteDimension for LengthDim` when `relative = ...` is given
//! - `crate::MoneyPerDimension for LengthDim` when `per = ...` is given
//!
//! # Attributes
//!
//! The derive reads a required `#[dimension(...)]` attribute:
//!
//! - `kind = Length`: the `QuantityKind` variant this marker stands for
//! - `standard = METER`: the standard (SI) unit constant of the kind
//! - `units = UNITS`: the registered units of the kind, as a `&'static [Unit<Self>]`
//! - `relative = LengthDim` (optional): relative counterpart of an absolute kind
//! - `per = AreaDim` (optional): denominator kind of a money-per kind

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, Token, Type,
};

/// Derive `crate::Dimension` (and optionally `AbsoluteDimension` / `MoneyPerDimension`) for a marker type.
///
/// The derive must be paired with a `#[dimension(...)]` attribute providing at least `kind`, `standard`, and
/// `units`.
///
/// This macro is intended for use by `dimscalar-core`.
#[proc_macro_derive(Dimension, attributes(dimension))]
pub fn derive_dimension(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_dimension_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_dimension_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attr = parse_dimension_attribute(&input.attrs)?;

    let kind = &attr.kind;
    let standard = &attr.standard;
    let units = &attr.units;

    let mut expanded = quote! {
        impl crate::Dimension for #name {
            const KIND: crate::QuantityKind = crate::QuantityKind::#kind;
            const STANDARD_UNIT: crate::Unit<Self> = #standard;

            #[inline]
            fn units() -> &'static [crate::Unit<Self>] {
                #units
            }
        }
    };

    if let Some(relative) = &attr.relative {
        expanded.extend(quote! {
            impl crate::AbsoluteDimension for #name {
                type Relative = #relative;
            }
        });
    }

    if let Some(per) = &attr.per {
        expanded.extend(quote! {
            impl crate::MoneyPerDimension for #name {
                type Per = #per;
            }
        });
    }

    Ok(expanded)
}

/// Parsed contents of the `#[dimension(...)]` attribute.
struct DimensionAttribute {
    kind: Ident,
    standard: Expr,
    units: Expr,
    relative: Option<Type>,
    per: Option<Type>,
}

impl Parse for DimensionAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut kind: Option<Ident> = None;
        let mut standard: Option<Expr> = None;
        let mut units: Option<Expr> = None;
        let mut relative: Option<Type> = None;
        let mut per: Option<Type> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "kind" => kind = Some(input.parse()?),
                "standard" => standard = Some(input.parse()?),
                "units" => units = Some(input.parse()?),
                "relative" => relative = Some(input.parse()?),
                "per" => per = Some(input.parse()?),
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let kind =
            kind.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `kind`"))?;
        let standard = standard.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `standard`")
        })?;
        let units = units
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `units`"))?;

        if relative.is_some() && per.is_some() {
            return Err(syn::Error::new(
                input.span(),
                "`relative` and `per` cannot be combined on one dimension",
            ));
        }

        Ok(DimensionAttribute {
            kind,
            standard,
            units,
            relative,
            per,
        })
    }
}

fn parse_dimension_attribute(attrs: &[Attribute]) -> syn::Result<DimensionAttribute> {
    for attr in attrs {
        if attr.path().is_ident("dimension") {
            return attr.parse_args::<DimensionAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[dimension(...)] attribute",
    ))
}
