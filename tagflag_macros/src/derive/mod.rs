//! Expansion of `#[derive(FlagRecord)]`.

mod parse;

use heck::ToUpperCamelCase;
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Ident};

use parse::{FlagAttrs, parse_flag_attrs, vec_inner};

/// One field of the generated table.
#[derive(Debug)]
struct TableEntry<'a> {
    ident: &'a Ident,
    name: String,
    tag: String,
}

/// Builds the `FlagRecord` impl for `input`.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let entries = table_entries(input)?;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let calls = entries.iter().map(|entry| {
        let TableEntry {
            ident: field,
            name,
            tag,
        } = entry;
        quote! { .field(#name, #tag, &mut self.#field) }
    });
    Ok(quote! {
        impl #impl_generics ::tagflag::FlagRecord for #ident #ty_generics #where_clause {
            fn fields(&mut self) -> ::tagflag::Fields<'_> {
                ::tagflag::Fields::new() #(#calls)*
            }
        }
    })
}

fn table_entries(input: &DeriveInput) -> syn::Result<Vec<TableEntry<'_>>> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "FlagRecord requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "FlagRecord can only be derived for structs",
            ));
        }
    };

    let mut entries = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let FlagAttrs {
            tag,
            rename,
            skip,
            present,
        } = parse_flag_attrs(&field.attrs)?;
        let included = present || vec_inner(&field.ty).is_some() || ident.unraw() == "usage";
        if skip || !included {
            continue;
        }
        entries.push(TableEntry {
            ident,
            name: rename.unwrap_or_else(|| field_name(ident)),
            tag: tag.unwrap_or_default(),
        });
    }
    Ok(entries)
}

/// Converts a Rust field identifier into a record field name.
///
/// `some_file` becomes `SomeFile` and `baz_` becomes `Baz_`. Identifiers
/// starting with `_` are returned unchanged and never become flags.
pub(crate) fn field_name(ident: &Ident) -> String {
    let raw = ident.unraw().to_string();
    if raw.starts_with('_') {
        return raw;
    }
    let stem = raw.trim_end_matches('_');
    let underscores = raw.len() - stem.len();
    format!("{}{}", stem.to_upper_camel_case(), "_".repeat(underscores))
}
