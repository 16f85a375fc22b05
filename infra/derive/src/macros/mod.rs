pub mod api;
pub mod error;
pub mod runtime;
pub mod slice;

use syn::Attribute;

/// Returns `true` when one of the `#[derive(...)]` attributes already names `name`
/// (either bare or as the last path segment, e.g. `thiserror::Error`).
pub fn has_derive(attrs: &[Attribute], name: &str) -> bool {
    let mut found = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.segments.last().is_some_and(|seg| seg.ident == name) {
                found = true;
            }
            Ok(())
        });
    }
    found
}
