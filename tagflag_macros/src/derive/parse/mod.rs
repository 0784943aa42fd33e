//! Parsing of `#[flag(...)]` field attributes.
//!
//! Accepted forms:
//!
//! - `#[flag]` includes the field with an empty tag;
//! - `#[flag("tag")]` or `#[flag = "tag"]` sets the tag;
//! - `#[flag(tag = "...", rename = "Name")]` sets the tag and overrides the
//!   record field name verbatim;
//! - `#[flag(skip)]` leaves the field out of the table.

mod type_utils;

use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ExprLit, Ident, Lit, LitStr, Meta, Token};

pub(crate) use type_utils::vec_inner;

/// Settings collected from every `#[flag]` attribute on one field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct FlagAttrs {
    pub tag: Option<String>,
    pub rename: Option<String>,
    pub skip: bool,
    /// Whether any `#[flag]` attribute was present.
    pub present: bool,
}

enum FlagArg {
    Tag(LitStr),
    Rename(LitStr),
    Skip,
}

impl Parse for FlagArg {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        if input.peek(LitStr) {
            return Ok(Self::Tag(input.parse()?));
        }
        let key: Ident = input.parse()?;
        if key == "skip" {
            return Ok(Self::Skip);
        }
        input.parse::<Token![=]>()?;
        let value: LitStr = input.parse()?;
        match key.to_string().as_str() {
            "tag" => Ok(Self::Tag(value)),
            "rename" => Ok(Self::Rename(value)),
            _ => Err(syn::Error::new(
                key.span(),
                format!("unknown flag attribute `{key}`; expected `tag`, `rename` or `skip`"),
            )),
        }
    }
}

fn set_once(slot: &mut Option<String>, lit: &LitStr, key: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(lit.span(), format!("duplicate `{key}` in #[flag]")));
    }
    *slot = Some(lit.value());
    Ok(())
}

fn apply_args(input: ParseStream<'_>, attrs: &mut FlagAttrs) -> syn::Result<()> {
    for arg in Punctuated::<FlagArg, Token![,]>::parse_terminated(input)? {
        match arg {
            FlagArg::Tag(lit) => set_once(&mut attrs.tag, &lit, "tag")?,
            FlagArg::Rename(lit) => {
                if lit.value().is_empty() {
                    return Err(syn::Error::new(lit.span(), "rename must not be empty"));
                }
                set_once(&mut attrs.rename, &lit, "rename")?;
            }
            FlagArg::Skip => attrs.skip = true,
        }
    }
    Ok(())
}

/// Collects the `#[flag]` settings of a field.
pub(crate) fn parse_flag_attrs(attrs: &[Attribute]) -> syn::Result<FlagAttrs> {
    let mut out = FlagAttrs::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("flag")) {
        out.present = true;
        match &attr.meta {
            Meta::Path(_) => {}
            Meta::List(list) => {
                list.parse_args_with(|input: ParseStream<'_>| apply_args(input, &mut out))?;
            }
            Meta::NameValue(pair) => {
                let Expr::Lit(ExprLit {
                    lit: Lit::Str(lit), ..
                }) = &pair.value
                else {
                    return Err(syn::Error::new_spanned(
                        &pair.value,
                        "#[flag = ...] expects a string literal",
                    ));
                };
                set_once(&mut out.tag, lit, "tag")?;
            }
        }
    }
    Ok(out)
}
