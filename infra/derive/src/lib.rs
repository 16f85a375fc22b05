#![allow(unreachable_pub)]

//! # Macros
//!
//! Attribute macros shared by every crate in the workspace:
//!
//! * [`pantry_error`] turns an enum into a `thiserror` error with `.context(...)` support.
//! * [`pantry_slice`] turns a struct into an `Arc`-backed feature slice handle.
//! * [`api_model`] / [`api_handler`] wire DTOs and Axum handlers into `utoipa`.
//! * [`main`] boots an `async fn main` on a `pantry_runtime` profile.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own macros;
//! the consuming crates exercise them in their tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Bootstraps an `async fn main` on a tuned Tokio runtime.
///
/// Accepts an optional profile: `high_performance`, `memory_efficient` or `default`.
/// The function must return a `Result`.
///
/// ```rust,ignore
/// #[pantry_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Declares an API data transfer object.
///
/// Adds `Debug`, `Serialize` and `Deserialize` when missing, derives `utoipa::ToSchema`
/// under the consumer's `server` feature and applies `#[serde(rename_all = "camelCase")]`
/// unless `rename_all = "..."` is given.
///
/// ```rust,ignore
/// #[api_model]
/// pub struct CatalogStats {
///     pub recipe_count: usize,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(args.into(), input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Registers an Axum handler with `utoipa::path` when the consumer's `server` feature is on.
///
/// ```rust,ignore
/// #[api_handler(get, path = "/recipes", responses((status = OK, body = [Recipe])))]
/// pub async fn list_recipes() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Defines a domain error enum.
///
/// Every variant must use named fields. Variants with a `source` field (or a field marked
/// `#[source]`/`#[from]`) must also carry `context: Option<Cow<'static, str>>`.
///
/// The expansion provides:
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A `<Name>Ext` trait adding `.context(...)` to `Result<T, Name>` and to
///   `Result<T, Source>` for every source type.
/// * `From<Source>` for each source variant.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists.
/// * A private `format_context` helper for the `#[error(...)]` strings.
///
/// ```rust,ignore
/// #[pantry_error]
/// pub enum PantryError {
///     #[error("Seed file error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///     #[error("Internal pantry error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn pantry_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).unwrap_or_else(syn::Error::into_compile_error).into()
}

/// Turns a struct into a feature slice handle.
///
/// The struct body moves into a generated `<Name>Inner`; `<Name>` becomes a cheap-to-clone
/// `Arc` wrapper that derefs to it and implements `pantry_domain::registry::FeatureSlice`.
///
/// ```rust,ignore
/// #[pantry_derive::pantry_slice]
/// pub struct Recipes {
///     store: RecipeStore,
/// }
///
/// let slice = Recipes::new(RecipesInner { store });
/// ```
#[proc_macro_attribute]
pub fn pantry_slice(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
