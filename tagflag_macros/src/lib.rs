//! Procedural macros for `tagflag`.
//!
//! `#[derive(FlagRecord)]` generates the field table `tagflag` binds flags
//! from. A field takes part when it carries `#[flag(...)]`, when its type is
//! `Vec<T>` (the leftover arguments) or when it is named `usage`. Field names
//! are converted to `UpperCamelCase`, keeping any trailing `_`, so `out_data`
//! becomes `--OutData` and `baz_` becomes `--baz`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `tagflag::FlagRecord`.
///
/// ```rust,ignore
/// #[derive(tagflag::FlagRecord)]
/// struct Opt {
///     #[flag("how old | 20")]
///     age: i64,
///     #[flag(tag = "do not inflate | 42", rename = "IQ")]
///     iq: i32,
///     #[flag(skip)]
///     cache: Vec<String>,
///     args: Vec<String>,
/// }
/// ```
#[proc_macro_derive(FlagRecord, attributes(flag))]
pub fn derive_flag_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
