//! Shallow inspection of field types.

use syn::{GenericArgument, PathArguments, Type};

/// Returns the first type argument of `ty` when its last path segment is
/// `wrapper`.
///
/// Only the outermost path is inspected, so `std::vec::Vec<T>` and `Vec<T>`
/// both match while `Option<Vec<T>>` does not.
fn type_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let last = path.path.segments.last()?;
    if last.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// Extracts `T` if `ty` is `Vec<T>`.
///
/// Vector fields receive the leftover arguments and join the table even
/// without a `#[flag]` attribute.
pub(crate) fn vec_inner(ty: &Type) -> Option<&Type> {
    type_inner(ty, "Vec")
}
