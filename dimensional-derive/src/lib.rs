//! Derive macros used by `dimensional-core`.
//!
//! `dimensional-derive` is an implementation detail of this workspace. Both derives expand in terms of crate-root
//! paths (`crate::Unit`, `crate::Dimension`, `crate::Exponents`, `crate::BaseDimension`, `crate::Rational`), so they
//! are intended to be used by `dimensional-core` (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `dimensional` instead and use the predefined units and dimensions.
//!
//! # `#[derive(Unit)]`
//!
//! Reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "cm"`: displayed unit symbol
//! - `dimension = Length`: dimension tag type
//! - `ratio = 1e-2`: factor from this unit to the canonical unit of the dimension
//!
//! # `#[derive(Dimension)]`
//!
//! Reads a required `#[dimension(...)]` attribute listing the non-zero exponents by base-dimension name:
//!
//! ```rust,ignore
//! #[derive(Dimension)]
//! #[dimension(length = 1, time = -2)]
//! pub enum Acceleration {}
//! ```
//!
//! Exponents may be fractions (`length = 1/2`). The names are `mass`, `length`, `time`, `current`, `angle`,
//! `temperature`, `luminosity` and `amount`. An empty attribute (`#[dimension()]`) declares a dimensionless tag.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitInt, LitStr, Token,
};

/// Base-dimension names accepted by `#[dimension(...)]`, paired with their `BaseDimension` variant.
const BASE_NAMES: [(&str, &str); 8] = [
    ("mass", "Mass"),
    ("length", "Length"),
    ("time", "Time"),
    ("current", "Current"),
    ("angle", "Angle"),
    ("temperature", "Temperature"),
    ("luminosity", "Luminosity"),
    ("amount", "Amount"),
];

/// Derive `crate::Unit`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `dimension`, and `ratio`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Derive `crate::Dimension` from a `#[dimension(...)]` exponent list.
#[proc_macro_derive(Dimension, attributes(dimension))]
pub fn derive_dimension(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_dimension_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let ratio = &unit_attr.ratio;

    Ok(quote! {
        impl crate::Unit for #name {
            const RATIO: f64 = #ratio;
            type Dim = #dimension;
            const SYMBOL: &'static str = #symbol;
        }
    })
}

fn derive_dimension_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attr = parse_dimension_attribute(&input.attrs)?;

    let terms = attr.exponents.iter().map(|exponent| {
        let variant = format_ident!("{}", exponent.variant);
        let numerator = exponent.numerator;
        let denominator = exponent.denominator;
        quote! {
            .with(crate::BaseDimension::#variant, crate::Rational::new(#numerator, #denominator))
        }
    });

    Ok(quote! {
        impl crate::Dimension for #name {
            const EXPONENTS: crate::Exponents = crate::Exponents::ZERO #(#terms)*;
        }
    })
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Expr,
    ratio: Expr,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;
        let mut ratio: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => symbol = Some(input.parse()?),
                "dimension" => dimension = Some(input.parse()?),
                "ratio" => ratio = Some(input.parse()?),
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

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;

        Ok(UnitAttribute {
            symbol,
            dimension,
            ratio,
        })
    }
}

/// One `name = [-]n[/d]` entry of a `#[dimension(...)]` attribute.
#[derive(Debug, PartialEq)]
struct ExponentEntry {
    variant: &'static str,
    numerator: i64,
    denominator: i64,
}

impl Parse for ExponentEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ident: Ident = input.parse()?;
        let name = ident.to_string();
        let variant = BASE_NAMES
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, variant)| *variant)
            .ok_or_else(|| {
                syn::Error::new(ident.span(), format!("unknown base dimension `{}`", name))
            })?;

        input.parse::<Token![=]>()?;

        let negative = if input.peek(Token![-]) {
            input.parse::<Token![-]>()?;
            true
        } else {
            false
        };

        let numerator: LitInt = input.parse()?;
        let mut numerator: i64 = numerator.base10_parse()?;
        if negative {
            numerator = -numerator;
        }

        let denominator = if input.peek(Token![/]) {
            input.parse::<Token![/]>()?;
            let literal: LitInt = input.parse()?;
            let denominator: i64 = literal.base10_parse()?;
            if denominator == 0 {
                return Err(syn::Error::new(literal.span(), "exponent denominator must be non-zero"));
            }
            denominator
        } else {
            1
        };

        Ok(ExponentEntry {
            variant,
            numerator,
            denominator,
        })
    }
}

/// Parsed contents of the `#[dimension(...)]` attribute.
struct DimensionAttribute {
    exponents: Vec<ExponentEntry>,
}

impl Parse for DimensionAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let entries = input.parse_terminated(ExponentEntry::parse, Token![,])?;
        let mut exponents: Vec<ExponentEntry> = Vec::with_capacity(entries.len());

        for entry in entries {
            if exponents.iter().any(|seen| seen.variant == entry.variant) {
                return Err(syn::Error::new(
                    input.span(),
                    format!("duplicate base dimension `{}`", entry.variant.to_lowercase()),
                ));
            }
            exponents.push(entry);
        }

        Ok(DimensionAttribute { exponents })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
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

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    // ─────────────────────────────────────────────────────────────────────────────
    // #[unit(...)]
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn unit_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "cm", dimension = Length, ratio = 1e-2)]
            pub struct Centimeter;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "cm");
    }

    #[test]
    fn unit_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn unit_attribute_missing_fields() {
        let cases: [(DeriveInput, &str); 3] = [
            (
                parse_quote! {
                    #[unit(dimension = Length, ratio = 1.0)]
                    pub struct Meter;
                },
                "`symbol`",
            ),
            (
                parse_quote! {
                    #[unit(symbol = "m", ratio = 1.0)]
                    pub struct Meter;
                },
                "`dimension`",
            ),
            (
                parse_quote! {
                    #[unit(symbol = "m", dimension = Length)]
                    pub struct Meter;
                },
                "`ratio`",
            ),
        ];

        for (input, field) in cases {
            let err = parse_unit_attribute(&input.attrs).err().unwrap();
            assert!(err.to_string().contains(field), "{err}");
        }
    }

    #[test]
    fn unit_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Length, ratio = 1.0, plural = "meters")]
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("unknown attribute `plural`"));
    }

    #[test]
    fn derive_unit_expansion() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "min", dimension = Time, ratio = 60.0)]
            pub struct Minute;
        };

        let output = derive_unit_impl(input).unwrap().to_string();
        assert!(output.contains("impl crate :: Unit for Minute"));
        assert!(output.contains("const RATIO : f64 = 60.0"));
        assert!(output.contains("type Dim = Time"));
        assert!(output.contains("\"min\""));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // #[dimension(...)]
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn dimension_attribute_integers_and_fractions() {
        let input: DeriveInput = parse_quote! {
            #[dimension(length = 1, time = -2, mass = 1/2)]
            pub enum Odd {}
        };

        let attr = parse_dimension_attribute(&input.attrs).unwrap();
        assert_eq!(
            attr.exponents,
            vec![
                ExponentEntry { variant: "Length", numerator: 1, denominator: 1 },
                ExponentEntry { variant: "Time", numerator: -2, denominator: 1 },
                ExponentEntry { variant: "Mass", numerator: 1, denominator: 2 },
            ]
        );
    }

    #[test]
    fn dimension_attribute_trailing_comma() {
        let input: DeriveInput = parse_quote! {
            #[dimension(angle = 1,)]
            pub enum Angular {}
        };

        let attr = parse_dimension_attribute(&input.attrs).unwrap();
        assert_eq!(attr.exponents.len(), 1);
        assert_eq!(attr.exponents[0].variant, "Angle");
    }

    #[test]
    fn dimension_attribute_empty_is_dimensionless() {
        let input: DeriveInput = parse_quote! {
            #[dimension()]
            pub enum Ratio {}
        };

        let attr = parse_dimension_attribute(&input.attrs).unwrap();
        assert!(attr.exponents.is_empty());
    }

    #[test]
    fn dimension_attribute_errors() {
        let cases: [(DeriveInput, &str); 4] = [
            (
                parse_quote! {
                    #[dimension(distance = 1)]
                    pub enum Bad {}
                },
                "unknown base dimension `distance`",
            ),
            (
                parse_quote! {
                    #[dimension(length = 1/0)]
                    pub enum Bad {}
                },
                "denominator must be non-zero",
            ),
            (
                parse_quote! {
                    #[dimension(length = 1, length = 2)]
                    pub enum Bad {}
                },
                "duplicate base dimension `length`",
            ),
            (
                parse_quote! {
                    pub enum Bad {}
                },
                "missing #[dimension(...)] attribute",
            ),
        ];

        for (input, message) in cases {
            let err = parse_dimension_attribute(&input.attrs).err().unwrap();
            assert!(err.to_string().contains(message), "{err}");
        }
    }

    #[test]
    fn derive_dimension_expansion() {
        let input: DeriveInput = parse_quote! {
            #[dimension(length = 1, time = -1)]
            pub enum Velocity {}
        };

        let output = derive_dimension_impl(input).unwrap().to_string();
        assert!(output.contains("impl crate :: Dimension for Velocity"));
        assert!(output.contains("crate :: Exponents :: ZERO"));
        assert!(output.contains("crate :: BaseDimension :: Length"));
        assert!(output.contains("crate :: BaseDimension :: Time"));
        assert!(output.contains("crate :: Rational :: new"));
    }
}
