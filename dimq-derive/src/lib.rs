//! Derive macro implementation used by `dimq-core`.
//!
//! `dimq-derive` is an implementation detail of this workspace. The `Dimension` derive expands in terms of
//! `crate::Dimension`, `crate::DimensionVector` and `crate::Ratio`, so it is intended to be used by `dimq-core` (or
//! by crates that expose an identical crate-root API).
//!
//! Most users should depend on `dimq` instead and use the predefined dimensions.
//!
//! # Generated impls
//!
//! For a dimension marker type `MyDim`, the derive implements `crate::Dimension for MyDim` with a `VECTOR`
//! assembled from the attribute's exponents, and a `SYMBOL` override when `symbol` is given.
//!
//! # Attributes
//!
//! The derive reads a required `#[dimension(...)]` attribute. Every key is optional; omitted exponents are zero and
//! an empty attribute declares a dimensionless marker:
//!
//! - `length`, `mass`, `time`, `current`, `temperature`, `substance`, `luminous_intensity`: an integer literal
//!   (`length = -2`) or a rational string (`time = "1/2"`)
//! - `symbol = "rad"`: display symbol overriding the registry lookup

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Ident, Lit, LitStr, Token,
};

/// Base-dimension keys in vector slot order.
const SLOTS: [&str; 7] = [
    "length",
    "mass",
    "time",
    "current",
    "temperature",
    "substance",
    "luminous_intensity",
];

/// Derive `crate::Dimension` for a marker type.
///
/// The derive must be paired with a `#[dimension(...)]` attribute.
///
/// This macro is intended for use by `dimq-core`.
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

    let exponents = attr.exponents.iter().map(|&(num, den)| {
        quote! { crate::Ratio::new(#num, #den) }
    });

    let symbol = attr.symbol.as_ref().map(|symbol| {
        quote! { const SYMBOL: ::core::option::Option<&'static str> = ::core::option::Option::Some(#symbol); }
    });

    Ok(quote! {
        impl crate::Dimension for #name {
            const VECTOR: crate::DimensionVector = crate::DimensionVector::new([#(#exponents),*]);
            #symbol
        }
    })
}

/// Parsed contents of the `#[dimension(...)]` attribute.
struct DimensionAttribute {
    /// `(numerator, denominator)` per slot, denominator always positive.
    exponents: [(i32, i32); 7],
    symbol: Option<LitStr>,
}

impl Parse for DimensionAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut exponents = [(0, 1); 7];
        let mut symbol: Option<LitStr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            let key = ident.to_string();
            if key == "symbol" {
                symbol = Some(input.parse()?);
            } else if let Some(slot) = SLOTS.iter().position(|s| *s == key) {
                exponents[slot] = parse_exponent(input)?;
            } else {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("unknown attribute `{}`", key),
                ));
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(DimensionAttribute { exponents, symbol })
    }
}

/// Reads `-2`, `3` or `"1/2"`.
fn parse_exponent(input: ParseStream) -> syn::Result<(i32, i32)> {
    let negative = if input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        true
    } else {
        false
    };

    let lit: Lit = input.parse()?;
    let (num, den) = match &lit {
        Lit::Int(int) => (int.base10_parse::<i32>()?, 1),
        Lit::Str(text) => parse_rational(text)?,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "expected an integer exponent or a rational string like \"1/2\"",
            ))
        }
    };

    let num = if negative { -num } else { num };
    Ok(if den < 0 { (-num, -den) } else { (num, den) })
}

fn parse_rational(text: &LitStr) -> syn::Result<(i32, i32)> {
    let value = text.value();
    let invalid = || syn::Error::new(text.span(), format!("invalid rational exponent `{}`", value));

    let (num, den) = match value.split_once('/') {
        Some((num, den)) => (num.trim(), den.trim()),
        None => (value.trim(), "1"),
    };
    let num: i32 = num.parse().map_err(|_| invalid())?;
    let den: i32 = den.parse().map_err(|_| invalid())?;
    if den == 0 {
        return Err(syn::Error::new(
            text.span(),
            "exponent denominator must not be zero",
        ));
    }
    Ok((num, den))
}

fn parse_dimension_attribute(attrs: &[Attribute]) -> syn::Result<DimensionAttribute> {
    for attr in attrs {
        if attr.path().is_ident("dimension") {
            return attr.parse_args::<DimensionAttribute>();
        }
    }

    Err(syn::Error::new(
        Span::call_site(),
        "missing #[dimension(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_dimension_attribute_base() {
        let input: DeriveInput = parse_quote! {
            #[dimension(length = 1)]
            pub enum Length {}
        };

        let attr = parse_dimension_attribute(&input.attrs).unwrap();
        assert_eq!(attr.exponents[0], (1, 1));
        assert!(attr.exponents[1..].iter().all(|&e| e == (0, 1)));
        assert!(attr.symbol.is_none());
    }

    #[test]
    fn test_parse_dimension_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub enum Length {}
        };

        let err = parse_dimension_attribute(&input.attrs).err().unwrap();
        assert!(err
            .to_string()
            .contains("missing #[dimension(...)] attribute"));
    }

    #[test]
    fn test_parse_negative_and_rational_exponents() {
        let tokens = quote! {
            length = -3, mass = 1, time = "-1/2", luminous_intensity = "2/-4"
        };
        let attr: DimensionAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.exponents[0], (-3, 1));
        assert_eq!(attr.exponents[1], (1, 1));
        assert_eq!(attr.exponents[2], (-1, 2));
        assert_eq!(attr.exponents[6], (-2, 4));
    }

    #[test]
    fn test_parse_symbol_only() {
        let tokens = quote! { symbol = "rad" };
        let attr: DimensionAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.unwrap().value(), "rad");
        assert!(attr.exponents.iter().all(|&e| e == (0, 1)));
    }

    #[test]
    fn test_parse_empty_attribute_is_dimensionless() {
        let attr: DimensionAttribute = syn::parse2(quote! {}).unwrap();
        assert!(attr.exponents.iter().all(|&e| e == (0, 1)));
    }

    #[test]
    fn test_parse_trailing_comma() {
        let attr: DimensionAttribute = syn::parse2(quote! { mass = 1, }).unwrap();
        assert_eq!(attr.exponents[1], (1, 1));
    }

    #[test]
    fn test_parse_unknown_key() {
        let result: syn::Result<DimensionAttribute> = syn::parse2(quote! { charge = 1 });
        let err = result.err().unwrap();
        assert!(err.to_string().contains("unknown attribute `charge`"));
    }

    #[test]
    fn test_parse_zero_denominator() {
        let result: syn::Result<DimensionAttribute> = syn::parse2(quote! { time = "1/0" });
        let err = result.err().unwrap();
        assert!(err.to_string().contains("must not be zero"));
    }

    #[test]
    fn test_parse_bad_literal() {
        let result: syn::Result<DimensionAttribute> = syn::parse2(quote! { time = 1.5 });
        assert!(result.is_err());

        let result: syn::Result<DimensionAttribute> = syn::parse2(quote! { time = "half" });
        let err = result.err().unwrap();
        assert!(err.to_string().contains("invalid rational exponent"));
    }

    #[test]
    fn test_derive_dimension_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[dimension(length = 1, time = -2)]
            pub enum Acceleration {}
        };

        let code = derive_dimension_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Dimension for Acceleration"));
        assert!(code.contains("crate :: Ratio :: new (1i32 , 1i32)"));
        assert!(code.contains("2i32 , 1i32)"));
        assert!(!code.contains("SYMBOL"));
    }

    #[test]
    fn test_derive_dimension_impl_with_symbol() {
        let input: DeriveInput = parse_quote! {
            #[dimension(symbol = "rad")]
            pub enum Angle {}
        };

        let code = derive_dimension_impl(input).unwrap().to_string();
        assert!(code.contains("const SYMBOL"));
        assert!(code.contains("\"rad\""));
    }

    #[test]
    fn test_derive_dimension_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub enum Length {}
        };
        let err = derive_dimension_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
